//! Integration tests: algebraic properties of the FFT engine
//!
//! These run every property against both transform primitives so the
//! engine's interleaving and scaling are checked independently of the
//! kernel doing the butterflies.

use spectral_engine::adapters::{Radix2Kernel, RustFftKernel};
use spectral_engine::ports::TransformPrimitive;
use spectral_engine::{ComplexSignal, FftEngine};

const SIZES: [usize; 6] = [1, 2, 8, 64, 256, 1024];

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Deterministic pseudo-random signal in [-1, 1)
fn signal(len: usize, seed: u64) -> Vec<f64> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 11) as f64 / (1u64 << 53) as f64) * 2.0 - 1.0
        })
        .collect()
}

fn max_error(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).fold(0.0, f64::max)
}

fn naive_dft(re: &[f64], im: &[f64]) -> ComplexSignal {
    let n = re.len();
    let mut out = ComplexSignal::new(vec![0.0; n], vec![0.0; n]);
    for k in 0..n {
        for m in 0..n {
            let angle = -2.0 * std::f64::consts::PI * ((m * k) % n) as f64 / n as f64;
            let (s, c) = angle.sin_cos();
            out.re[k] += re[m] * c - im[m] * s;
            out.im[k] += re[m] * s + im[m] * c;
        }
    }
    out
}

fn check_round_trip<P: TransformPrimitive>(mut engine: FftEngine<P>) {
    for (seed, &n) in SIZES.iter().enumerate() {
        engine.init(n).unwrap();
        let re = signal(n, seed as u64 * 2);
        let im = signal(n, seed as u64 * 2 + 1);

        let freq = engine.forward_transform(&re, &im).unwrap();
        let back = engine.inverse_transform(&freq.re, &freq.im).unwrap();

        let tol = 1e-12 * (n as f64).log2().max(1.0);
        assert!(max_error(&back.re, &re) < tol, "re round trip failed at N={n}");
        assert!(max_error(&back.im, &im) < tol, "im round trip failed at N={n}");
    }
}

fn check_linearity<P: TransformPrimitive>(mut engine: FftEngine<P>) {
    let n = 128;
    engine.init(n).unwrap();
    let (a, b) = (1.75, -0.5);

    let (xr, xi) = (signal(n, 10), signal(n, 11));
    let (yr, yi) = (signal(n, 12), signal(n, 13));
    let mix = |u: &[f64], v: &[f64]| -> Vec<f64> {
        u.iter().zip(v).map(|(p, q)| a * p + b * q).collect()
    };

    let fx = engine.forward_transform(&xr, &xi).unwrap();
    let fy = engine.forward_transform(&yr, &yi).unwrap();
    let fmix = engine.forward_transform(&mix(&xr, &yr), &mix(&xi, &yi)).unwrap();

    assert!(max_error(&fmix.re, &mix(&fx.re, &fy.re)) < 1e-10);
    assert!(max_error(&fmix.im, &mix(&fx.im, &fy.im)) < 1e-10);
}

#[test]
fn round_trip_reconstructs_input_rustfft() {
    init_logging();
    check_round_trip(FftEngine::new());
}

#[test]
fn round_trip_reconstructs_input_radix2() {
    init_logging();
    check_round_trip(FftEngine::with_primitive(Radix2Kernel::new()));
}

#[test]
fn forward_transform_is_linear_rustfft() {
    check_linearity(FftEngine::with_primitive(RustFftKernel::new()));
}

#[test]
fn forward_transform_is_linear_radix2() {
    check_linearity(FftEngine::with_primitive(Radix2Kernel::new()));
}

#[test]
fn both_primitives_match_naive_dft() {
    let n = 32;
    let re = signal(n, 99);
    let im = signal(n, 100);
    let expected = naive_dft(&re, &im);

    let mut fast = FftEngine::new();
    fast.init(n).unwrap();
    let mut table = FftEngine::with_primitive(Radix2Kernel::new());
    table.init(n).unwrap();

    for got in [
        fast.forward_transform(&re, &im).unwrap(),
        table.forward_transform(&re, &im).unwrap(),
    ] {
        assert!(max_error(&got.re, &expected.re) < 1e-10);
        assert!(max_error(&got.im, &expected.im) < 1e-10);
    }
}

#[test]
fn independent_engines_run_on_separate_threads() {
    init_logging();
    let handles: Vec<_> = [16usize, 64, 256]
        .into_iter()
        .map(|n| {
            std::thread::spawn(move || {
                let mut engine = FftEngine::new();
                engine.init(n).unwrap();
                let re = signal(n, n as u64);
                let out = engine.forward_transform(&re, &vec![0.0; n]).unwrap();
                let back = engine.inverse_transform(&out.re, &out.im).unwrap();
                max_error(&back.re, &re)
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap() < 1e-12);
    }
}

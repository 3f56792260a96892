//! Window (envelope) catalog
//!
//! Each window is a closed-form weight over a normalized axis spanning
//! `[-1, 1]`, stretched by a per-window `time_scale`. Parameters live in one
//! typed struct per kind; `ParamSpec` describes their declared ranges for
//! UI sliders and validation.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Declared range of a single window parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParamSpec {
    const fn new(name: &'static str, value: f64, min: f64, max: f64, step: f64) -> Self {
        Self {
            name,
            value,
            min,
            max,
            step,
        }
    }

    /// Same spec carrying `value` as its current value
    fn with_value(self, value: f64) -> Self {
        Self { value, ..self }
    }

    /// Clamp `value` into `[min, max]`
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

pub const TIME_SCALE: ParamSpec = ParamSpec::new("Time scale", 1.0, 0.01, 1.0, 0.01);
pub const TRUNCATE: ParamSpec = ParamSpec::new("Truncate?", 1.0, 0.0, 1.0, 1.0);
pub const BLACKMAN_ALPHA: ParamSpec = ParamSpec::new("Alpha", 0.16, 0.0, 0.5, 0.01);
pub const COS_POWER_N: ParamSpec = ParamSpec::new("n", 1.0, 1.0, 16.0, 0.01);
pub const KAISER_ALPHA: ParamSpec = ParamSpec::new("α", 3.0, 2.5, 32.0, 0.01);
pub const GAUSSIAN_SIGMA: ParamSpec = ParamSpec::new("σ", 0.25, 0.01, 0.5, 0.01);
pub const TUKEY_WIDTH: ParamSpec = ParamSpec::new("Width", 0.5, 0.0, 1.0, 0.01);

fn flag(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

/// Parameters shared by windows whose only control is the time scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeScale {
    pub time_scale: f64,
}

impl Default for TimeScale {
    fn default() -> Self {
        Self {
            time_scale: TIME_SCALE.value,
        }
    }
}

/// Hamming-family parameters: optionally zero outside `|x| < 1`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Truncatable {
    pub time_scale: f64,
    pub truncate: bool,
}

impl Default for Truncatable {
    fn default() -> Self {
        Self {
            time_scale: TIME_SCALE.value,
            truncate: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlackmanParams {
    pub time_scale: f64,
    /// 0.16 gives the classic 0.42 / 0.5 / 0.08 coefficients
    pub alpha: f64,
}

impl Default for BlackmanParams {
    fn default() -> Self {
        Self {
            time_scale: TIME_SCALE.value,
            alpha: BLACKMAN_ALPHA.value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CosPowerParams {
    pub time_scale: f64,
    pub n: f64,
}

impl Default for CosPowerParams {
    fn default() -> Self {
        Self {
            time_scale: TIME_SCALE.value,
            n: COS_POWER_N.value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KaiserParams {
    pub time_scale: f64,
    /// Shape factor; the Bessel argument is `π·alpha`
    pub alpha: f64,
}

impl Default for KaiserParams {
    fn default() -> Self {
        Self {
            time_scale: TIME_SCALE.value,
            alpha: KAISER_ALPHA.value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaussianParams {
    pub time_scale: f64,
    pub sigma: f64,
    pub truncate: bool,
}

impl Default for GaussianParams {
    fn default() -> Self {
        Self {
            time_scale: TIME_SCALE.value,
            sigma: GAUSSIAN_SIGMA.value,
            truncate: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TukeyParams {
    pub time_scale: f64,
    /// Half-width of the flat top, as a fraction of the half-window
    pub width: f64,
}

impl Default for TukeyParams {
    fn default() -> Self {
        Self {
            time_scale: TIME_SCALE.value,
            width: TUKEY_WIDTH.value,
        }
    }
}

/// Window kind together with its parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Window {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "rect")]
    Rectangular(TimeScale),
    #[serde(rename = "hann")]
    Hann(TimeScale),
    #[serde(rename = "hamming")]
    Hamming(Truncatable),
    #[serde(rename = "hamming-exact")]
    HammingExact(Truncatable),
    #[serde(rename = "blackman")]
    Blackman(BlackmanParams),
    #[serde(rename = "blackman-exact")]
    BlackmanExact(TimeScale),
    #[serde(rename = "nuttall")]
    Nuttall(TimeScale),
    #[serde(rename = "blackman-nuttall")]
    BlackmanNuttall(TimeScale),
    #[serde(rename = "blackman-harris")]
    BlackmanHarris(TimeScale),
    #[serde(rename = "kawahara-five")]
    KawaharaFive(TimeScale),
    #[serde(rename = "kawahara-six")]
    KawaharaSix(TimeScale),
    #[serde(rename = "flattop")]
    FlatTop(TimeScale),
    #[serde(rename = "cospn")]
    CosPower(CosPowerParams),
    #[serde(rename = "kaiser")]
    Kaiser(KaiserParams),
    #[serde(rename = "gaussian")]
    Gaussian(GaussianParams),
    #[serde(rename = "tukey")]
    Tukey(TukeyParams),
}

impl Default for Window {
    fn default() -> Self {
        Window::Hann(TimeScale::default())
    }
}

/// Catalog keys in display order
pub const WINDOW_KEYS: [&str; 17] = [
    "none",
    "rect",
    "hann",
    "hamming",
    "hamming-exact",
    "blackman",
    "blackman-exact",
    "nuttall",
    "blackman-nuttall",
    "blackman-harris",
    "kawahara-five",
    "kawahara-six",
    "flattop",
    "cospn",
    "kaiser",
    "gaussian",
    "tukey",
];

const NUTTALL: [f64; 4] = [0.355768, 0.487396, 0.144232, 0.012604];
const BLACKMAN_NUTTALL: [f64; 4] = [0.3635819, 0.4891775, 0.1365995, 0.0106411];
const BLACKMAN_HARRIS: [f64; 4] = [0.35875, 0.48829, 0.14128, 0.01168];
const KAWAHARA_FIVE: [f64; 5] = [
    0.2940462892,
    0.4539870314,
    0.2022629686,
    0.0460129686,
    0.0036907422,
];
const KAWAHARA_SIX: [f64; 6] = [
    0.2624710164,
    0.4265335164,
    0.2250165621,
    0.0726831633,
    0.0125124215,
    0.0007833203,
];
const FLAT_TOP: [f64; 5] = [0.215578950, 0.416631580, 0.277263158, 0.083578947, 0.006947368];

fn clamp_unit(x: f64) -> f64 {
    x.clamp(-1.0, 1.0)
}

/// `Σ a_k·cos(k·ω)`
fn cosine_sum(coeffs: &[f64], omega: f64) -> f64 {
    coeffs
        .iter()
        .enumerate()
        .map(|(k, a)| a * (k as f64 * omega).cos())
        .sum()
}

/// Open interval test used by truncating windows
fn inside(xx: f64) -> bool {
    xx > -1.0 && xx < 1.0
}

/// Modified Bessel function of the first kind, order zero
pub fn bessel_i0(x: f64) -> f64 {
    let half = x / 2.0;
    let mut term = 1.0;
    let mut sum = 1.0;
    for k in 1..500 {
        let factor = half / k as f64;
        term *= factor * factor;
        sum += term;
        if term < sum * 1e-17 {
            break;
        }
    }
    sum
}

/// `length` evenly spaced points spanning `[-1, 1]`
pub fn time_axis(length: usize) -> Vec<f64> {
    match length {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let last = (length - 1) as f64;
            (0..length).map(|i| 2.0 * i as f64 / last - 1.0).collect()
        }
    }
}

/// `length` evenly spaced points spanning `[0, 1]`, for frequency-domain envelopes
pub fn frequency_axis(length: usize) -> Vec<f64> {
    match length {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let last = (length - 1) as f64;
            (0..length).map(|i| i as f64 / last).collect()
        }
    }
}

impl Window {
    /// Window with default parameters for a catalog key
    pub fn from_key(key: &str) -> Option<Self> {
        let window = match key {
            "none" | "" => Window::None,
            "rect" => Window::Rectangular(TimeScale::default()),
            "hann" => Window::Hann(TimeScale::default()),
            "hamming" => Window::Hamming(Truncatable::default()),
            "hamming-exact" => Window::HammingExact(Truncatable::default()),
            "blackman" => Window::Blackman(BlackmanParams::default()),
            "blackman-exact" => Window::BlackmanExact(TimeScale::default()),
            "nuttall" => Window::Nuttall(TimeScale::default()),
            "blackman-nuttall" => Window::BlackmanNuttall(TimeScale::default()),
            "blackman-harris" => Window::BlackmanHarris(TimeScale::default()),
            "kawahara-five" => Window::KawaharaFive(TimeScale::default()),
            "kawahara-six" => Window::KawaharaSix(TimeScale::default()),
            "flattop" => Window::FlatTop(TimeScale::default()),
            "cospn" => Window::CosPower(CosPowerParams::default()),
            "kaiser" => Window::Kaiser(KaiserParams::default()),
            "gaussian" => Window::Gaussian(GaussianParams::default()),
            "tukey" => Window::Tukey(TukeyParams::default()),
            _ => return None,
        };
        Some(window)
    }

    /// Every window kind with default parameters
    pub fn catalog() -> Vec<Self> {
        WINDOW_KEYS.iter().filter_map(|key| Self::from_key(key)).collect()
    }

    pub fn key(&self) -> &'static str {
        match self {
            Window::None => "none",
            Window::Rectangular(_) => "rect",
            Window::Hann(_) => "hann",
            Window::Hamming(_) => "hamming",
            Window::HammingExact(_) => "hamming-exact",
            Window::Blackman(_) => "blackman",
            Window::BlackmanExact(_) => "blackman-exact",
            Window::Nuttall(_) => "nuttall",
            Window::BlackmanNuttall(_) => "blackman-nuttall",
            Window::BlackmanHarris(_) => "blackman-harris",
            Window::KawaharaFive(_) => "kawahara-five",
            Window::KawaharaSix(_) => "kawahara-six",
            Window::FlatTop(_) => "flattop",
            Window::CosPower(_) => "cospn",
            Window::Kaiser(_) => "kaiser",
            Window::Gaussian(_) => "gaussian",
            Window::Tukey(_) => "tukey",
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Window::None => "None",
            Window::Rectangular(_) => "Rectangular (Boxcar)",
            Window::Hann(_) => "Hann",
            Window::Hamming(_) => "Hamming",
            Window::HammingExact(_) => "Hamming (Exact)",
            Window::Blackman(_) => "Blackman",
            Window::BlackmanExact(_) => "Blackman (Exact)",
            Window::Nuttall(_) => "Nuttall",
            Window::BlackmanNuttall(_) => "Blackman–Nuttall",
            Window::BlackmanHarris(_) => "Blackman–Harris",
            Window::KawaharaFive(_) => "Kawahara five-term",
            Window::KawaharaSix(_) => "Kawahara six-term",
            Window::FlatTop(_) => "Flat top",
            Window::CosPower(_) => "cos^n",
            Window::Kaiser(_) => "Kaiser",
            Window::Gaussian(_) => "Gaussian",
            Window::Tukey(_) => "Tukey",
        }
    }

    fn time_scale(&self) -> f64 {
        match self {
            Window::None => TIME_SCALE.value,
            Window::Rectangular(p)
            | Window::Hann(p)
            | Window::BlackmanExact(p)
            | Window::Nuttall(p)
            | Window::BlackmanNuttall(p)
            | Window::BlackmanHarris(p)
            | Window::KawaharaFive(p)
            | Window::KawaharaSix(p)
            | Window::FlatTop(p) => p.time_scale,
            Window::Hamming(p) | Window::HammingExact(p) => p.time_scale,
            Window::Blackman(p) => p.time_scale,
            Window::CosPower(p) => p.time_scale,
            Window::Kaiser(p) => p.time_scale,
            Window::Gaussian(p) => p.time_scale,
            Window::Tukey(p) => p.time_scale,
        }
    }

    /// Declared ranges of this window's parameters, carrying current values
    pub fn param_specs(&self) -> Vec<ParamSpec> {
        let mut specs = Vec::new();
        if !matches!(self, Window::None) {
            specs.push(TIME_SCALE.with_value(self.time_scale()));
        }
        match self {
            Window::Hamming(p) | Window::HammingExact(p) => {
                specs.push(TRUNCATE.with_value(flag(p.truncate)));
            }
            Window::Blackman(p) => specs.push(BLACKMAN_ALPHA.with_value(p.alpha)),
            Window::CosPower(p) => specs.push(COS_POWER_N.with_value(p.n)),
            Window::Kaiser(p) => specs.push(KAISER_ALPHA.with_value(p.alpha)),
            Window::Gaussian(p) => {
                specs.push(GAUSSIAN_SIGMA.with_value(p.sigma));
                specs.push(TRUNCATE.with_value(flag(p.truncate)));
            }
            Window::Tukey(p) => specs.push(TUKEY_WIDTH.with_value(p.width)),
            _ => {}
        }
        specs
    }

    /// Copy of this window with every parameter clamped into its declared range
    pub fn validated(self) -> Self {
        fn fit(spec: &ParamSpec, value: f64, key: &str) -> f64 {
            let clamped = spec.clamp(value);
            if clamped != value || value.is_nan() {
                log::warn!("{key}: {} = {value} out of range, using {clamped}", spec.name);
            }
            // NaN passes through clamp unchanged
            if clamped.is_nan() { spec.value } else { clamped }
        }

        let key = self.key();
        let ts = |t: f64| fit(&TIME_SCALE, t, key);
        let plain = |p: TimeScale| TimeScale {
            time_scale: ts(p.time_scale),
        };
        match self {
            Window::None => Window::None,
            Window::Rectangular(p) => Window::Rectangular(plain(p)),
            Window::Hann(p) => Window::Hann(plain(p)),
            Window::Hamming(p) => Window::Hamming(Truncatable {
                time_scale: ts(p.time_scale),
                ..p
            }),
            Window::HammingExact(p) => Window::HammingExact(Truncatable {
                time_scale: ts(p.time_scale),
                ..p
            }),
            Window::Blackman(p) => Window::Blackman(BlackmanParams {
                time_scale: ts(p.time_scale),
                alpha: fit(&BLACKMAN_ALPHA, p.alpha, key),
            }),
            Window::BlackmanExact(p) => Window::BlackmanExact(plain(p)),
            Window::Nuttall(p) => Window::Nuttall(plain(p)),
            Window::BlackmanNuttall(p) => Window::BlackmanNuttall(plain(p)),
            Window::BlackmanHarris(p) => Window::BlackmanHarris(plain(p)),
            Window::KawaharaFive(p) => Window::KawaharaFive(plain(p)),
            Window::KawaharaSix(p) => Window::KawaharaSix(plain(p)),
            Window::FlatTop(p) => Window::FlatTop(plain(p)),
            Window::CosPower(p) => Window::CosPower(CosPowerParams {
                time_scale: ts(p.time_scale),
                n: fit(&COS_POWER_N, p.n, key),
            }),
            Window::Kaiser(p) => Window::Kaiser(KaiserParams {
                time_scale: ts(p.time_scale),
                alpha: fit(&KAISER_ALPHA, p.alpha, key),
            }),
            Window::Gaussian(p) => Window::Gaussian(GaussianParams {
                time_scale: ts(p.time_scale),
                sigma: fit(&GAUSSIAN_SIGMA, p.sigma, key),
                truncate: p.truncate,
            }),
            Window::Tukey(p) => Window::Tukey(TukeyParams {
                time_scale: ts(p.time_scale),
                width: fit(&TUKEY_WIDTH, p.width, key),
            }),
        }
    }

    /// Evaluate the envelope at `length` points spanning `[-1, 1]`
    ///
    /// `Window::None` has no envelope and yields an empty vector.
    pub fn generate(&self, length: usize) -> Vec<f64> {
        if matches!(self, Window::None) {
            return Vec::new();
        }

        // Kaiser normalizes by I0(β), computed once per call
        let kaiser_norm = match self {
            Window::Kaiser(p) => bessel_i0(PI * p.alpha),
            _ => 1.0,
        };

        time_axis(length)
            .into_iter()
            .map(|x| self.weight(x, kaiser_norm))
            .collect()
    }

    fn weight(&self, x: f64, kaiser_norm: f64) -> f64 {
        let xx = x / self.time_scale();
        let omega = PI * clamp_unit(xx);

        match self {
            Window::None => 1.0,
            Window::Rectangular(_) => {
                if inside(xx) { 1.0 } else { 0.0 }
            }
            Window::Hann(_) => 0.5 + 0.5 * omega.cos(),
            Window::Hamming(p) => {
                if p.truncate && !inside(xx) {
                    0.0
                } else {
                    0.54 + 0.46 * omega.cos()
                }
            }
            Window::HammingExact(p) => {
                if p.truncate && !inside(xx) {
                    0.0
                } else {
                    0.53836 + 0.46164 * omega.cos()
                }
            }
            Window::Blackman(p) => {
                let a = p.alpha;
                ((1.0 - a) + omega.cos() + a * (2.0 * omega).cos()) / 2.0
            }
            Window::BlackmanExact(_) => {
                (7938.0 + 9240.0 * omega.cos() + 1430.0 * (2.0 * omega).cos()) / 18608.0
            }
            Window::Nuttall(_) => cosine_sum(&NUTTALL, omega),
            Window::BlackmanNuttall(_) => cosine_sum(&BLACKMAN_NUTTALL, omega),
            Window::BlackmanHarris(_) => cosine_sum(&BLACKMAN_HARRIS, omega),
            Window::KawaharaFive(_) => cosine_sum(&KAWAHARA_FIVE, omega),
            Window::KawaharaSix(_) => cosine_sum(&KAWAHARA_SIX, omega),
            Window::FlatTop(_) => cosine_sum(&FLAT_TOP, omega),
            Window::CosPower(p) => {
                if inside(xx) {
                    (omega / 2.0).cos().powf(p.n)
                } else {
                    0.0
                }
            }
            Window::Kaiser(p) => {
                if !inside(xx) {
                    return 0.0;
                }
                bessel_i0(PI * p.alpha * (1.0 - xx * xx).sqrt()) / kaiser_norm
            }
            Window::Gaussian(p) => {
                if p.truncate && !inside(xx) {
                    0.0
                } else {
                    (-0.5 * xx * xx / (p.sigma * p.sigma)).exp()
                }
            }
            Window::Tukey(p) => {
                let r = xx.abs();
                if r < p.width {
                    1.0
                } else if r >= 1.0 {
                    0.0
                } else {
                    let omega = PI * clamp_unit((r - p.width) / (1.0 - p.width));
                    0.5 + 0.5 * omega.cos()
                }
            }
        }
    }
}

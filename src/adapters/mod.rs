//! Adapters: concrete implementations of port traits
//!
//! The transform adapters wrap one numeric kernel each behind
//! `TransformPrimitive`; `config_store` keeps profiles on disk.

pub mod config_store;
pub mod radix2;
pub mod rustfft_kernel;

pub use config_store::ProfileStore;
pub use radix2::Radix2Kernel;
pub use rustfft_kernel::RustFftKernel;

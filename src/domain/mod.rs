//! Core domain types
//!
//! Pure types with no I/O dependencies. These represent the values that flow
//! in and out of the FFT engine.

pub mod config;
pub mod error;
pub mod types;

pub use config::*;
pub use error::*;
pub use types::*;

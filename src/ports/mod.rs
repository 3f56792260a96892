//! Port traits (interfaces)
//!
//! These traits define the boundary between the engine and the numeric
//! kernels that do the actual butterfly work. Adapters implement them.

pub mod transform;

pub use transform::*;

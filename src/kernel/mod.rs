//! Numeric and vector kernels shared by the operator handlers.

pub mod numeric;
pub mod vector;

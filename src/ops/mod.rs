//! Higher-level GA operations

pub mod exponential;
pub mod interpolation;
pub mod operators;
pub mod reflection;
pub mod rotor;

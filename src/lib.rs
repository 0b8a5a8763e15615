#![doc = include_str!("../README.md")]

pub mod error;
pub mod rational;
pub mod dimensions;
pub mod unit;
pub mod uom;
pub mod format;
pub mod ga;
pub mod linalg;
pub mod lock;
pub mod random;
pub mod vector;
pub mod bivector;
pub mod spinor;
pub mod multivector;

pub mod ops;

pub use error::{AlgebraError, Result};
pub use rational::Rational;
pub use dimensions::{Dimensions, DimensionsSummary};
pub use unit::Unit;
pub use format::NumberFormat;
pub use vector::{Vector3, VectorE3, Rounded};
pub use bivector::{Bivector3, BivectorE3};
pub use spinor::{Spinor3, SpinorE3};
pub use multivector::Geometric3;
pub use lock::LockToken;
pub use linalg::gauss;
pub use ga::{
    exterior_product, geometric_product, geometric_product_full, left_contraction,
    right_contraction, scalar_product,
};

pub use crate::ops::interpolation::slerp;

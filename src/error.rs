//! Error types for the algebra.
//!
//! Every failure is local and synchronous; nothing is retried internally.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = AlgebraError> = std::result::Result<T, E>;

/// Failures raised by rationals, dimensions, units and multivectors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlgebraError {
    /// Additive combination of quantities whose dimensions differ.
    ///
    /// Dimensionless operands render as `dimensionless`.
    #[error("Dimensions must be equal ({lhs}, {rhs})")]
    DimensionMismatch {
        /// Rendering of the left operand's dimensions
        lhs: String,
        /// Rendering of the right operand's dimensions
        rhs: String,
    },

    /// An operation that needs a pure number was given a dimensioned value.
    #[error("uom {uom} must be dimensionless.")]
    NotDimensionless {
        /// Rendering of the offending unit
        uom: String,
    },

    /// Inversion or division hit a non-invertible operand.
    #[error("Singular multivector: {reason}")]
    SingularMultivector {
        /// What the solver ran into
        reason: String,
    },

    /// Mutation through the in-place path on a locked value.
    #[error("Unable to {operation} a locked Geometric3")]
    TargetLocked {
        /// Name of the rejected operation
        operation: &'static str,
    },

    /// Unlock attempted without the matching token.
    #[error("Unlock denied: {reason}")]
    UnlockDenied {
        /// Why the token was refused
        reason: &'static str,
    },

    /// Malformed construction arguments.
    #[error("Invalid argument {name}: {reason}")]
    InvalidArgument {
        /// Parameter name
        name: &'static str,
        /// What was wrong with it
        reason: String,
    },
}

impl AlgebraError {
    pub(crate) fn locked(operation: &'static str) -> Self {
        Self::TargetLocked { operation }
    }

    pub(crate) fn singular(reason: impl Into<String>) -> Self {
        Self::SingularMultivector { reason: reason.into() }
    }
}

//! Absent-aware unit arithmetic.
//!
//! Quantities carry an `Option<Unit>`; `None` stands for the dimensionless
//! identity. Every helper treats `None` and [`Unit::ONE`] alike and normalises an
//! identity result back to `None`.

use crate::error::{AlgebraError, Result};
use crate::rational::Rational;
use crate::unit::Unit;

fn normalize(uom: Option<Unit>) -> Option<Unit> {
    uom.filter(|u| !u.is_one())
}

/// Owned copy with the identity collapsed to `None`.
pub fn normalized(uom: Option<&Unit>) -> Option<Unit> {
    normalize(uom.copied())
}

pub fn is_one(uom: Option<&Unit>) -> bool {
    uom.map_or(true, Unit::is_one)
}

/// Fails with `NotDimensionless` unless the unit is absent or the identity.
pub fn assert_dimensionless(uom: Option<&Unit>) -> Result<()> {
    match uom {
        Some(u) if !u.is_one() => Err(AlgebraError::NotDimensionless { uom: u.to_string() }),
        _ => Ok(()),
    }
}

/// Returns the left unit when both sides have the same dimensions.
pub fn compatible(lhs: Option<&Unit>, rhs: Option<&Unit>) -> Result<Option<Unit>> {
    let l = lhs.copied().unwrap_or(Unit::ONE);
    let r = rhs.copied().unwrap_or(Unit::ONE);
    l.compatible(&r)?;
    Ok(normalize(lhs.copied()))
}

pub fn is_compatible(lhs: Option<&Unit>, rhs: Option<&Unit>) -> bool {
    let l = lhs.copied().unwrap_or(Unit::ONE);
    let r = rhs.copied().unwrap_or(Unit::ONE);
    l.is_compatible(&r)
}

pub fn mul(lhs: Option<&Unit>, rhs: Option<&Unit>) -> Option<Unit> {
    match (lhs, rhs) {
        (Some(a), Some(b)) => normalize(Some(a.mul(b))),
        (Some(a), None) => normalize(Some(*a)),
        (None, b) => normalize(b.copied()),
    }
}

pub fn div(lhs: Option<&Unit>, rhs: Option<&Unit>) -> Option<Unit> {
    match (lhs, rhs) {
        (Some(a), Some(b)) => normalize(Some(a.div(b))),
        (Some(a), None) => normalize(Some(*a)),
        (None, Some(b)) => normalize(Some(b.inv())),
        (None, None) => None,
    }
}

pub fn inv(uom: Option<&Unit>) -> Option<Unit> {
    normalize(uom.map(Unit::inv))
}

pub fn pow(uom: Option<&Unit>, exponent: Rational) -> Option<Unit> {
    if exponent.is_zero() {
        return None;
    }
    normalize(uom.map(|u| u.pow(exponent)))
}

pub fn sqrt(uom: Option<&Unit>) -> Option<Unit> {
    normalize(uom.map(Unit::sqrt))
}

//! Exact rational numbers, used as the exponents of physical dimensions.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_integer::Integer;
use tracing::debug;

use crate::error::{AlgebraError, Result};

/// A fraction in lowest terms with a positive denominator.
///
/// Zero is always `0/1`. The undefined forms `1/0`, `-1/0` and `0/0` can only be
/// produced by [`Rational::value_of`] (and therefore by division); they behave
/// like NaN: they never compare equal to anything, themselves included.
///
/// Arithmetic is carried out in `i128`. A result whose lowest terms do not fit in
/// `i64` is the undefined `0/0` rather than a panic.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "(i64, i64)", into = "(i64, i64)")
)]
pub struct Rational {
    numer: i64,
    denom: i64,
}

impl Rational {
    pub const MINUS_THREE: Rational = Rational::raw(-3, 1);
    pub const MINUS_TWO: Rational = Rational::raw(-2, 1);
    pub const MINUS_ONE: Rational = Rational::raw(-1, 1);
    pub const MINUS_ONE_THIRD: Rational = Rational::raw(-1, 3);
    pub const ZERO: Rational = Rational::raw(0, 1);
    pub const ONE_FIFTH: Rational = Rational::raw(1, 5);
    pub const ONE_QUARTER: Rational = Rational::raw(1, 4);
    pub const ONE_THIRD: Rational = Rational::raw(1, 3);
    pub const ONE_HALF: Rational = Rational::raw(1, 2);
    pub const TWO_THIRDS: Rational = Rational::raw(2, 3);
    pub const ONE: Rational = Rational::raw(1, 1);
    pub const TWO: Rational = Rational::raw(2, 1);
    pub const THREE: Rational = Rational::raw(3, 1);
    pub const FOUR: Rational = Rational::raw(4, 1);
    pub const FIVE: Rational = Rational::raw(5, 1);
    pub const SIX: Rational = Rational::raw(6, 1);
    pub const SEVEN: Rational = Rational::raw(7, 1);
    pub const EIGHT: Rational = Rational::raw(8, 1);
    const UNDEFINED: Rational = Rational::raw(0, 0);

    const fn raw(numer: i64, denom: i64) -> Self {
        Self { numer, denom }
    }

    /// Builds `n/d` in lowest terms, rejecting a zero denominator.
    pub fn new(n: i64, d: i64) -> Result<Self> {
        if d == 0 {
            return Err(AlgebraError::InvalidArgument {
                name: "denom",
                reason: format!("denominator of {n}/{d} must not be zero"),
            });
        }
        Ok(Self::value_of(n, d))
    }

    /// Normalizing factory. A zero denominator passes through as an undefined value.
    pub fn value_of(n: i64, d: i64) -> Self {
        Self::reduce(i128::from(n), i128::from(d))
    }

    fn reduce(n: i128, d: i128) -> Self {
        if d == 0 {
            return Self::raw(n.signum() as i64, 0);
        }
        if n == 0 {
            return Self::ZERO;
        }
        let g = n.gcd(&d);
        let (n, d) = if d < 0 { (-n / g, -d / g) } else { (n / g, d / g) };
        match (i64::try_from(n), i64::try_from(d)) {
            (Ok(n), Ok(d)) => Self::raw(n, d),
            _ => {
                debug!(%n, %d, "rational out of i64 range");
                Self::UNDEFINED
            }
        }
    }

    fn wide(self) -> (i128, i128) {
        (i128::from(self.numer), i128::from(self.denom))
    }

    pub const fn numer(&self) -> i64 {
        self.numer
    }

    pub const fn denom(&self) -> i64 {
        self.denom
    }

    pub fn is_zero(&self) -> bool {
        self.numer == 0 && self.denom == 1
    }

    pub fn is_one(&self) -> bool {
        self.numer == 1 && self.denom == 1
    }

    /// True for the `n/0` results of dividing by zero.
    pub fn is_undefined(&self) -> bool {
        self.denom == 0
    }

    /// Reciprocal; the reciprocal of zero is undefined.
    pub fn inv(self) -> Self {
        Self::value_of(self.denom, self.numer)
    }

    pub fn to_f64(self) -> f64 {
        self.numer as f64 / self.denom as f64
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::raw(n, 1)
    }
}

impl TryFrom<(i64, i64)> for Rational {
    type Error = AlgebraError;

    fn try_from((n, d): (i64, i64)) -> Result<Self> {
        Self::new(n, d)
    }
}

impl From<Rational> for (i64, i64) {
    fn from(r: Rational) -> Self {
        (r.numer, r.denom)
    }
}

impl Add for Rational {
    type Output = Rational;
    fn add(self, rhs: Rational) -> Rational {
        let ((a, b), (c, d)) = (self.wide(), rhs.wide());
        Rational::reduce(a * d + c * b, b * d)
    }
}

impl Sub for Rational {
    type Output = Rational;
    fn sub(self, rhs: Rational) -> Rational {
        let ((a, b), (c, d)) = (self.wide(), rhs.wide());
        Rational::reduce(a * d - c * b, b * d)
    }
}

impl Mul for Rational {
    type Output = Rational;
    fn mul(self, rhs: Rational) -> Rational {
        let ((a, b), (c, d)) = (self.wide(), rhs.wide());
        Rational::reduce(a * c, b * d)
    }
}

impl Div for Rational {
    type Output = Rational;
    fn div(self, rhs: Rational) -> Rational {
        let ((a, b), (c, d)) = (self.wide(), rhs.wide());
        Rational::reduce(a * d, b * c)
    }
}

impl Neg for Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        let (n, d) = self.wide();
        Rational::reduce(-n, d)
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        if self.is_undefined() || other.is_undefined() {
            return false;
        }
        let ((a, b), (c, d)) = (self.wide(), other.wide());
        a * d == c * b
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}

//! Operator overloads on `&Geometric3`.
//!
//! Every result is locked: operands are left untouched and the result can be
//! shared as freely as they can. Additive operators and division can fail, so
//! their output is a `Result`.

use std::ops::{Add, BitOr, BitXor, Div, Mul, Neg, Not, Shl, Shr, Sub};

use crate::error::Result;
use crate::multivector::Geometric3;

impl Mul<&Geometric3> for &Geometric3 {
    type Output = Geometric3;
    fn mul(self, rhs: &Geometric3) -> Geometric3 {
        self.clone().mul(rhs).into_locked()
    }
}

impl Mul<f64> for &Geometric3 {
    type Output = Geometric3;
    fn mul(self, rhs: f64) -> Geometric3 {
        self.clone().mul_by_number(rhs).into_locked()
    }
}

impl Mul<&Geometric3> for f64 {
    type Output = Geometric3;
    fn mul(self, rhs: &Geometric3) -> Geometric3 {
        rhs.clone().mul_by_number(self).into_locked()
    }
}

/// Exterior product.
impl BitXor<&Geometric3> for &Geometric3 {
    type Output = Geometric3;
    fn bitxor(self, rhs: &Geometric3) -> Geometric3 {
        self.clone().ext(rhs).into_locked()
    }
}

/// Left contraction.
impl Shl<&Geometric3> for &Geometric3 {
    type Output = Geometric3;
    fn shl(self, rhs: &Geometric3) -> Geometric3 {
        self.clone().lco(rhs).into_locked()
    }
}

/// Right contraction.
impl Shr<&Geometric3> for &Geometric3 {
    type Output = Geometric3;
    fn shr(self, rhs: &Geometric3) -> Geometric3 {
        self.clone().rco(rhs).into_locked()
    }
}

/// Scalar product.
impl BitOr<&Geometric3> for &Geometric3 {
    type Output = Geometric3;
    fn bitor(self, rhs: &Geometric3) -> Geometric3 {
        self.clone().scp(rhs).into_locked()
    }
}

impl Neg for &Geometric3 {
    type Output = Geometric3;
    fn neg(self) -> Geometric3 {
        self.clone().neg().into_locked()
    }
}

impl Add<&Geometric3> for &Geometric3 {
    type Output = Result<Geometric3>;
    fn add(self, rhs: &Geometric3) -> Result<Geometric3> {
        Ok(self.clone().add(rhs, 1.0)?.into_locked())
    }
}

impl Sub<&Geometric3> for &Geometric3 {
    type Output = Result<Geometric3>;
    fn sub(self, rhs: &Geometric3) -> Result<Geometric3> {
        Ok(self.clone().sub(rhs, 1.0)?.into_locked())
    }
}

impl Div<&Geometric3> for &Geometric3 {
    type Output = Result<Geometric3>;
    fn div(self, rhs: &Geometric3) -> Result<Geometric3> {
        Ok(self.clone().div(rhs)?.into_locked())
    }
}

impl Div<f64> for &Geometric3 {
    type Output = Result<Geometric3>;
    fn div(self, rhs: f64) -> Result<Geometric3> {
        Ok(self.clone().div(&Geometric3::from_scalar(rhs))?.into_locked())
    }
}

/// Multiplicative inverse.
impl Not for &Geometric3 {
    type Output = Result<Geometric3>;
    fn not(self) -> Result<Geometric3> {
        Ok(self.clone().inv()?.into_locked())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::AlgebraError;
    use crate::multivector::Geometric3;
    use crate::unit::Unit;

    #[test]
    fn products_lock_their_result() {
        let p = &Geometric3::E1 * &Geometric3::E2;
        assert!(p.is_locked());
        assert_eq!(p.xy(), 1.0);
        let w = &Geometric3::E1 ^ &Geometric3::E1;
        assert!(w.is_zero());
        let s = &Geometric3::E1 | &Geometric3::E1;
        assert_eq!(s.a(), 1.0);
        let l = &Geometric3::E1 << &(&Geometric3::E1 * &Geometric3::E2);
        assert_eq!(l.y(), 1.0);
        let r = &(&Geometric3::E1 * &Geometric3::E2) >> &Geometric3::E2;
        assert_eq!(r.x(), 1.0);
    }

    #[test]
    fn scalar_operands() {
        let v = &Geometric3::E3 * 2.5;
        assert_eq!(v.z(), 2.5);
        let w = 2.0 * &Geometric3::E1;
        assert_eq!(w.x(), 2.0);
        let h = (&Geometric3::E2 / 4.0).unwrap();
        assert_eq!(h.y(), 0.25);
        assert!((&Geometric3::E2 / 0.0).is_err());
    }

    #[test]
    fn additive_operators_check_units() {
        let sum = (&Geometric3::E1 + &Geometric3::E2).unwrap();
        assert_eq!(sum.to_string(), "e1+e2");
        let err = (&Geometric3::METER + &Geometric3::SECOND).unwrap_err();
        assert!(matches!(err, AlgebraError::DimensionMismatch { .. }));
        let diff = (&Geometric3::METER - &Geometric3::METER).unwrap();
        assert!(diff.is_zero());
        assert_eq!(diff.uom(), Some(&Unit::METER));
    }

    #[test]
    fn inverse_and_negation() {
        let inv = (!&Geometric3::E1).unwrap();
        assert_eq!(inv, Geometric3::E1);
        let neg = -&Geometric3::I;
        assert_eq!(neg.b(), -1.0);
        assert!((!&Geometric3::ZERO).is_err());
    }
}

//! Even-subalgebra elements: scalar plus bivector.

use std::fmt;

use crate::bivector::BivectorE3;
use crate::format::{write_coordinates, NumberFormat};
use crate::unit::Unit;
use crate::uom;

/// A spinor additionally exposes its scalar part.
pub trait SpinorE3: BivectorE3 {
    fn a(&self) -> f64;
}

/// Scalar plus bivector, the natural carrier of rotors.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Spinor3 {
    pub a: f64,
    pub yz: f64,
    pub zx: f64,
    pub xy: f64,
    pub uom: Option<Unit>,
}

impl Spinor3 {
    pub fn new(a: f64, yz: f64, zx: f64, xy: f64) -> Self {
        Self { a, yz, zx, xy, uom: None }
    }

    pub fn with_uom(a: f64, yz: f64, zx: f64, xy: f64, uom: Option<&Unit>) -> Self {
        Self { a, yz, zx, xy, uom: uom::normalized(uom) }
    }

    pub fn one() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Reversion negates the bivector part.
    pub fn rev(&self) -> Self {
        Self { a: self.a, yz: -self.yz, zx: -self.zx, xy: -self.xy, uom: self.uom }
    }

    pub fn quaditude(&self) -> f64 {
        self.a * self.a + self.yz * self.yz + self.zx * self.zx + self.xy * self.xy
    }

    pub fn norm(&self) -> f64 {
        self.quaditude().sqrt()
    }
}

impl BivectorE3 for Spinor3 {
    fn yz(&self) -> f64 { self.yz }
    fn zx(&self) -> f64 { self.zx }
    fn xy(&self) -> f64 { self.xy }
    fn uom(&self) -> Option<&Unit> { self.uom.as_ref() }
}

impl SpinorE3 for Spinor3 {
    fn a(&self) -> f64 { self.a }
}

impl fmt::Display for Spinor3 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_coordinates(
            f,
            &[self.a, self.xy, self.yz, self.zx],
            &["1", "e12", "e23", "e31"],
            NumberFormat::Shortest,
            self.uom.as_ref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_and_norm() {
        let s = Spinor3::new(0.5, 0.5, 0.5, 0.5);
        assert_eq!(s.norm(), 1.0);
        assert_eq!(s.rev(), Spinor3::new(0.5, -0.5, -0.5, -0.5));
        assert_eq!(Spinor3::one().to_string(), "1");
        assert_eq!(s.rev().to_string(), "0.5-0.5*e12-0.5*e23-0.5*e31");
    }
}

// src/bivector.rs
use std::fmt;

use crate::format::{write_coordinates, NumberFormat};
use crate::unit::Unit;
use crate::uom;
use crate::vector::VectorE3;

/// Read access to the grade-2 part of a 3-D quantity.
pub trait BivectorE3 {
    fn yz(&self) -> f64;
    fn zx(&self) -> f64;
    fn xy(&self) -> f64;
    fn uom(&self) -> Option<&Unit>;
}

/// A grade-2 multivector in 3-D: e23, e31, e12.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Bivector3 {
    /// e23 component
    pub yz: f64,
    /// e31 component
    pub zx: f64,
    /// e12 component
    pub xy: f64,
    pub uom: Option<Unit>,
}

impl Bivector3 {
    pub fn new(yz: f64, zx: f64, xy: f64) -> Self {
        Self { yz, zx, xy, uom: None }
    }

    pub fn with_uom(yz: f64, zx: f64, xy: f64, uom: Option<&Unit>) -> Self {
        Self { yz, zx, xy, uom: uom::normalized(uom) }
    }

    /// a ∧ b
    pub fn from_wedge(a: &impl VectorE3, b: &impl VectorE3) -> Self {
        Self {
            yz: a.y() * b.z() - a.z() * b.y(),
            zx: a.z() * b.x() - a.x() * b.z(),
            xy: a.x() * b.y() - a.y() * b.x(),
            uom: uom::mul(a.uom(), b.uom()),
        }
    }

    pub fn quaditude(&self) -> f64 {
        self.yz * self.yz + self.zx * self.zx + self.xy * self.xy
    }

    pub fn norm(&self) -> f64 {
        self.quaditude().sqrt()
    }

    pub fn scale(&self, s: f64) -> Self {
        Self { yz: self.yz * s, zx: self.zx * s, xy: self.xy * s, uom: self.uom }
    }

    pub fn is_zero(&self) -> bool {
        self.yz == 0.0 && self.zx == 0.0 && self.xy == 0.0
    }
}

impl BivectorE3 for Bivector3 {
    fn yz(&self) -> f64 { self.yz }
    fn zx(&self) -> f64 { self.zx }
    fn xy(&self) -> f64 { self.xy }
    fn uom(&self) -> Option<&Unit> { self.uom.as_ref() }
}

impl fmt::Display for Bivector3 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_coordinates(
            f,
            &[self.xy, self.yz, self.zx],
            &["e12", "e23", "e31"],
            NumberFormat::Shortest,
            self.uom.as_ref(),
        )
    }
}

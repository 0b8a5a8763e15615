// src/vector.rs

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::Result;
use crate::format::{write_coordinates, NumberFormat};
use crate::unit::Unit;
use crate::uom;

/// Read access to the grade-1 part of a 3-D quantity.
pub trait VectorE3 {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn z(&self) -> f64;
    fn uom(&self) -> Option<&Unit>;
}

/// A 3-D Euclidean vector with an optional unit of measure.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub uom: Option<Unit>,
}

impl Vector3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self { Self { x, y, z, uom: None } }

    pub fn with_uom(x: f64, y: f64, z: f64, uom: Option<&Unit>) -> Self {
        Self { x, y, z, uom: uom::normalized(uom) }
    }

    /// Copies the vector part of any [`VectorE3`].
    pub fn from_vector(v: &impl VectorE3) -> Self {
        Self::with_uom(v.x(), v.y(), v.z(), v.uom())
    }

    pub fn dot(&self, other: &impl VectorE3) -> f64 {
        dot(self, other)
    }

    pub fn cross(&self, other: &impl VectorE3) -> Self {
        Self {
            x: self.y * other.z() - self.z * other.y(),
            y: self.z * other.x() - self.x * other.z(),
            z: self.x * other.y() - self.y * other.x(),
            uom: uom::mul(self.uom.as_ref(), other.uom()),
        }
    }

    pub fn norm(&self) -> f64 { self.quaditude().sqrt() }
    pub fn quaditude(&self) -> f64 { self.x * self.x + self.y * self.y + self.z * self.z }

    pub fn scale(&self, s: f64) -> Self {
        Self { x: self.x * s, y: self.y * s, z: self.z * s, uom: self.uom }
    }

    /// Unit-length copy with the unit dropped. The zero vector stays zero.
    pub fn direction(&self) -> Self {
        let n = self.norm();
        if n == 0.0 {
            Self::new(self.x, self.y, self.z)
        } else {
            Self::new(self.x / n, self.y / n, self.z / n)
        }
    }

    pub fn is_zero(&self) -> bool { self.x == 0.0 && self.y == 0.0 && self.z == 0.0 }
}

pub(crate) fn dot(a: &impl VectorE3, b: &impl VectorE3) -> f64 {
    a.x() * b.x() + a.y() * b.y() + a.z() * b.z()
}

/// Checked `lhs + alpha * rhs`; a zero operand adopts the other operand's unit.
fn combine(lhs: &Vector3, rhs: &impl VectorE3, alpha: f64) -> Result<Vector3> {
    let uom = if lhs.is_zero() {
        uom::normalized(rhs.uom())
    } else if rhs.x() == 0.0 && rhs.y() == 0.0 && rhs.z() == 0.0 {
        return Ok(*lhs);
    } else {
        uom::compatible(lhs.uom.as_ref(), rhs.uom())?
    };
    Ok(Vector3 {
        x: lhs.x + alpha * rhs.x(),
        y: lhs.y + alpha * rhs.y(),
        z: lhs.z + alpha * rhs.z(),
        uom,
    })
}

impl VectorE3 for Vector3 {
    fn x(&self) -> f64 { self.x }
    fn y(&self) -> f64 { self.y }
    fn z(&self) -> f64 { self.z }
    fn uom(&self) -> Option<&Unit> { self.uom.as_ref() }
}

impl Add for Vector3 {
    type Output = Result<Vector3>;
    fn add(self, rhs: Vector3) -> Result<Vector3> { combine(&self, &rhs, 1.0) }
}

impl Sub for Vector3 {
    type Output = Result<Vector3>;
    fn sub(self, rhs: Vector3) -> Result<Vector3> { combine(&self, &rhs, -1.0) }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;
    fn mul(self, rhs: f64) -> Vector3 { self.scale(rhs) }
}

impl Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 { self.scale(-1.0) }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_coordinates(
            f,
            &[self.x, self.y, self.z],
            &["e1", "e2", "e3"],
            NumberFormat::Shortest,
            self.uom.as_ref(),
        )
    }
}

/// A tiny wrapper for printing a Vector3 rounded to `decimals` places.
pub struct Rounded<'a>(pub &'a Vector3, pub usize);

impl<'a> fmt::Display for Rounded<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Rounded(v, dec) = *self;
        write_coordinates(
            f,
            &[v.x, v.y, v.z],
            &["e1", "e2", "e3"],
            NumberFormat::Fixed(dec),
            v.uom.as_ref(),
        )
    }
}

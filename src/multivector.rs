// src/multivector.rs
//! The general multivector of 3-D Euclidean geometric algebra, tagged with an
//! optional unit of measure.
//!
//! Values are either unlocked (owned and freely mutable) or locked (shared and
//! immutable). The by-value methods are copy-on-write: on a locked receiver they
//! work on an unlocked clone and hand back a locked result. The `&mut self`
//! methods are the in-place path and refuse to touch a locked value.

use std::fmt;

use crate::bivector::{Bivector3, BivectorE3};
use crate::error::{AlgebraError, Result};
use crate::format::{write_coordinates, NumberFormat};
use crate::ga::{self, BASIS_LABELS, GRADES};
use crate::ga::{COORD_PSEUDO, COORD_SCALAR, COORD_X, COORD_XY, COORD_Y, COORD_YZ, COORD_Z, COORD_ZX};
use crate::linalg;
use crate::lock::{LockState, LockToken};
use crate::ops::{exponential, reflection, rotor};
use crate::random;
use crate::spinor::{Spinor3, SpinorE3};
use crate::unit::Unit;
use crate::uom;
use crate::vector::{self, Vector3, VectorE3};

const fn basis(index: usize) -> [f64; 8] {
    let mut coords = [0.0; 8];
    coords[index] = 1.0;
    coords
}

fn scalar_coords(a: f64) -> [f64; 8] {
    [a, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]
}

/// Scalar, vector, bivector and pseudoscalar parts with an optional unit.
///
/// Coordinates are stored in the order `1, e1, e2, e3, e12, e23, e31, e123`.
#[derive(Debug)]
pub struct Geometric3 {
    coords: [f64; 8],
    uom: Option<Unit>,
    lock: LockState,
}

impl Geometric3 {
    pub const ZERO: Geometric3 = Geometric3::sealed([0.0; 8], None);
    pub const ONE: Geometric3 = Geometric3::sealed(basis(COORD_SCALAR), None);
    pub const E1: Geometric3 = Geometric3::sealed(basis(COORD_X), None);
    pub const E2: Geometric3 = Geometric3::sealed(basis(COORD_Y), None);
    pub const E3: Geometric3 = Geometric3::sealed(basis(COORD_Z), None);
    pub const I: Geometric3 = Geometric3::sealed(basis(COORD_PSEUDO), None);
    pub const METER: Geometric3 = Geometric3::sealed(basis(COORD_SCALAR), Some(Unit::METER));
    pub const KILOGRAM: Geometric3 = Geometric3::sealed(basis(COORD_SCALAR), Some(Unit::KILOGRAM));
    pub const SECOND: Geometric3 = Geometric3::sealed(basis(COORD_SCALAR), Some(Unit::SECOND));
    pub const AMPERE: Geometric3 = Geometric3::sealed(basis(COORD_SCALAR), Some(Unit::AMPERE));
    pub const KELVIN: Geometric3 = Geometric3::sealed(basis(COORD_SCALAR), Some(Unit::KELVIN));
    pub const MOLE: Geometric3 = Geometric3::sealed(basis(COORD_SCALAR), Some(Unit::MOLE));
    pub const CANDELA: Geometric3 = Geometric3::sealed(basis(COORD_SCALAR), Some(Unit::CANDELA));
    pub const COULOMB: Geometric3 = Geometric3::sealed(basis(COORD_SCALAR), Some(Unit::COULOMB));
    pub const NEWTON: Geometric3 = Geometric3::sealed(basis(COORD_SCALAR), Some(Unit::NEWTON));
    pub const JOULE: Geometric3 = Geometric3::sealed(basis(COORD_SCALAR), Some(Unit::JOULE));

    const fn sealed(coords: [f64; 8], uom: Option<Unit>) -> Self {
        Self { coords, uom, lock: LockState::SEALED }
    }

    // ---------------------------------------------------------------------
    // Construction. Every constructor returns an unlocked value.
    // ---------------------------------------------------------------------

    pub fn new(coords: [f64; 8], uom: Option<&Unit>) -> Self {
        Self { coords, uom: uom::normalized(uom), lock: LockState::Unlocked }
    }

    pub fn zero() -> Self {
        Self::new([0.0; 8], None)
    }

    pub fn scalar(a: f64, uom: Option<&Unit>) -> Self {
        Self::new([a, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], uom)
    }

    pub fn from_scalar(a: f64) -> Self {
        Self::scalar(a, None)
    }

    pub fn vector(x: f64, y: f64, z: f64, uom: Option<&Unit>) -> Self {
        Self::new([0.0, x, y, z, 0.0, 0.0, 0.0, 0.0], uom)
    }

    pub fn bivector(yz: f64, zx: f64, xy: f64, uom: Option<&Unit>) -> Self {
        Self::new([0.0, 0.0, 0.0, 0.0, xy, yz, zx, 0.0], uom)
    }

    pub fn spinor(a: f64, yz: f64, zx: f64, xy: f64, uom: Option<&Unit>) -> Self {
        Self::new([a, 0.0, 0.0, 0.0, xy, yz, zx, 0.0], uom)
    }

    pub fn pseudo(b: f64, uom: Option<&Unit>) -> Self {
        Self::new([0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, b], uom)
    }

    pub fn from_vector(v: &impl VectorE3) -> Self {
        Self::vector(v.x(), v.y(), v.z(), v.uom())
    }

    pub fn from_bivector(b: &impl BivectorE3) -> Self {
        Self::bivector(b.yz(), b.zx(), b.xy(), b.uom())
    }

    pub fn from_spinor(s: &impl SpinorE3) -> Self {
        Self::spinor(s.a(), s.yz(), s.zx(), s.xy(), s.uom())
    }

    /// `v * I`: the bivector whose plane is orthogonal to `v`.
    pub fn dual_of_vector(v: &impl VectorE3) -> Self {
        Self::bivector(v.x(), v.y(), v.z(), v.uom())
    }

    /// `B * I`: the normal vector of the plane `B`.
    pub fn dual_of_bivector(b: &impl BivectorE3) -> Self {
        Self::vector(-b.yz(), -b.zx(), -b.xy(), b.uom())
    }

    /// `a ∧ b` of two vectors.
    pub fn wedge(a: &impl VectorE3, b: &impl VectorE3) -> Self {
        Self::from_bivector(&Bivector3::from_wedge(a, b))
    }

    /// Coordinates drawn uniformly from `[-1, 1)`.
    pub fn random() -> Self {
        Self::new(random::gen_signed(), None)
    }

    /// `a + α * (b - a)`.
    pub fn lerp_between(a: &Geometric3, b: &Geometric3, alpha: f64) -> Result<Self> {
        a.clone().lerp(b, alpha)
    }

    pub fn rotor_from_directions(a: &impl VectorE3, b: &impl VectorE3) -> Result<Self> {
        rotor::from_vector_to_vector(a, b, None)
    }

    pub fn rotor_from_vector_to_vector(
        a: &impl VectorE3,
        b: &impl VectorE3,
        fallback: Option<&dyn BivectorE3>,
    ) -> Result<Self> {
        rotor::from_vector_to_vector(a, b, fallback)
    }

    pub fn rotor_from_generator_angle(generator: &impl BivectorE3, theta: f64) -> Result<Self> {
        rotor::from_generator_angle(generator, theta)
    }

    pub fn rotor_from_axis_angle(axis: &impl VectorE3, theta: f64) -> Result<Self> {
        rotor::from_axis_angle(axis, theta)
    }

    pub fn rotor_from_two_vectors(
        e1: &impl VectorE3,
        f1: &impl VectorE3,
        e2: &impl VectorE3,
        f2: &impl VectorE3,
    ) -> Result<Self> {
        rotor::from_two_vectors(e1, f1, e2, f2)
    }

    pub fn rotor_from_frame_to_frame<V: VectorE3>(es: &[V; 3], fs: &[V; 3]) -> Result<Self> {
        rotor::from_frame_to_frame(es, fs)
    }

    // ---------------------------------------------------------------------
    // Lock protocol
    // ---------------------------------------------------------------------

    pub fn is_locked(&self) -> bool {
        self.lock.is_locked()
    }

    /// Locks this value. Only the returned token can unlock it again.
    pub fn lock(&mut self) -> Result<LockToken> {
        self.lock.lock()
    }

    pub fn unlock(&mut self, token: &LockToken) -> Result<()> {
        self.lock.unlock(token)
    }

    /// Marks a freshly computed result as shared; nobody holds its token.
    pub(crate) fn into_locked(mut self) -> Self {
        self.lock = LockState::SEALED;
        self
    }

    fn map(self, op: impl FnOnce(&mut Self)) -> Self {
        if self.is_locked() {
            let mut copy = self.clone();
            op(&mut copy);
            copy.into_locked()
        } else {
            let mut this = self;
            op(&mut this);
            this
        }
    }

    fn try_map(self, op: impl FnOnce(&mut Self) -> Result<()>) -> Result<Self> {
        if self.is_locked() {
            let mut copy = self.clone();
            op(&mut copy)?;
            Ok(copy.into_locked())
        } else {
            let mut this = self;
            op(&mut this)?;
            Ok(this)
        }
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    pub fn a(&self) -> f64 { self.coords[COORD_SCALAR] }
    pub fn x(&self) -> f64 { self.coords[COORD_X] }
    pub fn y(&self) -> f64 { self.coords[COORD_Y] }
    pub fn z(&self) -> f64 { self.coords[COORD_Z] }
    pub fn xy(&self) -> f64 { self.coords[COORD_XY] }
    pub fn yz(&self) -> f64 { self.coords[COORD_YZ] }
    pub fn zx(&self) -> f64 { self.coords[COORD_ZX] }
    pub fn b(&self) -> f64 { self.coords[COORD_PSEUDO] }

    pub fn coords(&self) -> [f64; 8] {
        self.coords
    }

    pub fn coordinate(&self, index: usize) -> Option<f64> {
        self.coords.get(index).copied()
    }

    pub fn uom(&self) -> Option<&Unit> {
        self.uom.as_ref()
    }

    /// Exactly zero, whatever the unit.
    pub fn is_zero(&self) -> bool {
        self.coords.iter().all(|c| *c == 0.0)
    }

    pub fn is_one(&self) -> bool {
        uom::is_one(self.uom()) && self.coords == basis(COORD_SCALAR)
    }

    pub fn is_scalar(&self) -> bool {
        self.coords[1..].iter().all(|c| *c == 0.0)
    }

    pub fn is_vector(&self) -> bool {
        self.coords
            .iter()
            .enumerate()
            .all(|(i, c)| GRADES[i] == 1 || *c == 0.0)
    }

    /// Only scalar and bivector parts.
    pub fn is_spinor(&self) -> bool {
        self.coords
            .iter()
            .enumerate()
            .all(|(i, c)| GRADES[i] % 2 == 0 || *c == 0.0)
    }

    pub fn squared_norm_sans_units(&self) -> f64 {
        self.coords.iter().map(|c| c * c).sum()
    }

    pub fn magnitude_sans_units(&self) -> f64 {
        self.squared_norm_sans_units().sqrt()
    }

    /// Projects onto the vector part.
    pub fn write_vector(&self, v: &mut Vector3) {
        *v = Vector3::with_uom(self.x(), self.y(), self.z(), self.uom());
    }

    pub fn vector_part(&self) -> Vector3 {
        Vector3::from_vector(self)
    }

    pub fn spinor_part(&self) -> Spinor3 {
        Spinor3::with_uom(self.a(), self.yz(), self.zx(), self.xy(), self.uom())
    }

    pub fn bivector_part(&self) -> Bivector3 {
        Bivector3::with_uom(self.yz(), self.zx(), self.xy(), self.uom())
    }

    // ---------------------------------------------------------------------
    // In-place path. Each of these fails with `TargetLocked` on a locked value.
    // ---------------------------------------------------------------------

    pub fn set_coordinate(&mut self, index: usize, value: f64) -> Result<&mut Self> {
        self.lock.ensure_unlocked("set_coordinate")?;
        let slot = self.coords.get_mut(index).ok_or_else(|| AlgebraError::InvalidArgument {
            name: "index",
            reason: format!("{index} is not a coordinate index"),
        })?;
        *slot = value;
        Ok(self)
    }

    pub fn set_a(&mut self, a: f64) -> Result<&mut Self> {
        self.set_named(COORD_SCALAR, a, "set_a")
    }

    pub fn set_x(&mut self, x: f64) -> Result<&mut Self> {
        self.set_named(COORD_X, x, "set_x")
    }

    pub fn set_y(&mut self, y: f64) -> Result<&mut Self> {
        self.set_named(COORD_Y, y, "set_y")
    }

    pub fn set_z(&mut self, z: f64) -> Result<&mut Self> {
        self.set_named(COORD_Z, z, "set_z")
    }

    pub fn set_xy(&mut self, xy: f64) -> Result<&mut Self> {
        self.set_named(COORD_XY, xy, "set_xy")
    }

    pub fn set_yz(&mut self, yz: f64) -> Result<&mut Self> {
        self.set_named(COORD_YZ, yz, "set_yz")
    }

    pub fn set_zx(&mut self, zx: f64) -> Result<&mut Self> {
        self.set_named(COORD_ZX, zx, "set_zx")
    }

    pub fn set_b(&mut self, b: f64) -> Result<&mut Self> {
        self.set_named(COORD_PSEUDO, b, "set_b")
    }

    fn set_named(&mut self, index: usize, value: f64, operation: &'static str) -> Result<&mut Self> {
        self.lock.ensure_unlocked(operation)?;
        self.coords[index] = value;
        Ok(self)
    }

    pub fn set_uom(&mut self, uom: Option<&Unit>) -> Result<&mut Self> {
        self.lock.ensure_unlocked("set_uom")?;
        self.uom = uom::normalized(uom);
        Ok(self)
    }

    pub fn copy_from(&mut self, m: &Geometric3) -> Result<&mut Self> {
        self.lock.ensure_unlocked("copy")?;
        self.coords = m.coords;
        self.uom = m.uom;
        Ok(self)
    }

    pub fn copy_scalar(&mut self, a: f64, uom: Option<&Unit>) -> Result<&mut Self> {
        self.lock.ensure_unlocked("copy_scalar")?;
        *self = Self::scalar(a, uom);
        Ok(self)
    }

    pub fn copy_vector(&mut self, v: &impl VectorE3) -> Result<&mut Self> {
        self.lock.ensure_unlocked("copy_vector")?;
        *self = Self::from_vector(v);
        Ok(self)
    }

    pub fn copy_bivector(&mut self, b: &impl BivectorE3) -> Result<&mut Self> {
        self.lock.ensure_unlocked("copy_bivector")?;
        *self = Self::from_bivector(b);
        Ok(self)
    }

    pub fn copy_spinor(&mut self, s: &impl SpinorE3) -> Result<&mut Self> {
        self.lock.ensure_unlocked("copy_spinor")?;
        *self = Self::from_spinor(s);
        Ok(self)
    }

    pub fn set_zero(&mut self) -> Result<&mut Self> {
        self.lock.ensure_unlocked("zero")?;
        *self = Self::zero();
        Ok(self)
    }

    pub fn set_one(&mut self) -> Result<&mut Self> {
        self.lock.ensure_unlocked("one")?;
        *self = Self::new(basis(COORD_SCALAR), None);
        Ok(self)
    }

    /// `self = a * b`
    pub fn mul2(&mut self, a: &Geometric3, b: &Geometric3) -> Result<&mut Self> {
        self.lock.ensure_unlocked("mul2")?;
        self.coords = ga::geometric_product(&a.coords, &b.coords);
        self.uom = uom::mul(a.uom(), b.uom());
        Ok(self)
    }

    /// `self = a ^ b`
    pub fn ext2(&mut self, a: &Geometric3, b: &Geometric3) -> Result<&mut Self> {
        self.lock.ensure_unlocked("ext2")?;
        self.coords = ga::exterior_product(&a.coords, &b.coords);
        self.uom = uom::mul(a.uom(), b.uom());
        Ok(self)
    }

    /// `self = a << b`
    pub fn lco2(&mut self, a: &Geometric3, b: &Geometric3) -> Result<&mut Self> {
        self.lock.ensure_unlocked("lco2")?;
        self.coords = ga::left_contraction(&a.coords, &b.coords);
        self.uom = uom::mul(a.uom(), b.uom());
        Ok(self)
    }

    /// `self = a >> b`
    pub fn rco2(&mut self, a: &Geometric3, b: &Geometric3) -> Result<&mut Self> {
        self.lock.ensure_unlocked("rco2")?;
        self.coords = ga::right_contraction(&a.coords, &b.coords);
        self.uom = uom::mul(a.uom(), b.uom());
        Ok(self)
    }

    /// `self = a | b`
    pub fn scp2(&mut self, a: &Geometric3, b: &Geometric3) -> Result<&mut Self> {
        self.lock.ensure_unlocked("scp2")?;
        self.coords = scalar_coords(ga::scalar_product(&a.coords, &b.coords));
        self.uom = uom::mul(a.uom(), b.uom());
        Ok(self)
    }

    /// `self = a + b`
    pub fn add2(&mut self, a: &Geometric3, b: &Geometric3) -> Result<&mut Self> {
        self.lock.ensure_unlocked("add2")?;
        let mut sum = a.clone();
        sum.accumulate(&b.coords, b.uom(), 1.0)?;
        self.coords = sum.coords;
        self.uom = sum.uom;
        Ok(self)
    }

    /// `self = a - b`
    pub fn sub2(&mut self, a: &Geometric3, b: &Geometric3) -> Result<&mut Self> {
        self.lock.ensure_unlocked("sub2")?;
        let mut diff = a.clone();
        diff.accumulate(&b.coords, b.uom(), -1.0)?;
        self.coords = diff.coords;
        self.uom = diff.uom;
        Ok(self)
    }

    /// `self = a * b` for two vectors: scalar plus bivector.
    pub fn versor(&mut self, a: &impl VectorE3, b: &impl VectorE3) -> Result<&mut Self> {
        self.lock.ensure_unlocked("versor")?;
        let w = Bivector3::from_wedge(a, b);
        let uom = uom::mul(a.uom(), b.uom());
        *self = Self::new([vector::dot(a, b), 0.0, 0.0, 0.0, w.xy, w.yz, w.zx, 0.0], uom.as_ref());
        Ok(self)
    }

    /// `self = a + α * (b - a)`
    pub fn lerp2(&mut self, a: &Geometric3, b: &Geometric3, alpha: f64) -> Result<&mut Self> {
        self.lock.ensure_unlocked("lerp2")?;
        let mut out = a.clone();
        out.lerp_in_place(b, alpha)?;
        self.coords = out.coords;
        self.uom = out.uom;
        Ok(self)
    }

    /// `self += alpha * m`, resolving the unit first so a mismatch leaves `self` untouched.
    fn accumulate(&mut self, coords: &[f64; 8], uom: Option<&Unit>, alpha: f64) -> Result<()> {
        if self.is_zero() {
            self.uom = uom::normalized(uom);
            self.coords = coords.map(|c| c * alpha);
        } else if coords.iter().all(|c| *c == 0.0) {
            // Zero carries no unit of its own.
        } else {
            self.uom = uom::compatible(self.uom(), uom)?;
            for (c, d) in self.coords.iter_mut().zip(coords) {
                *c += alpha * d;
            }
        }
        Ok(())
    }

    fn lerp_in_place(&mut self, target: &Geometric3, alpha: f64) -> Result<()> {
        if self.is_zero() {
            self.uom = target.uom;
        } else if !target.is_zero() {
            self.uom = uom::compatible(self.uom(), target.uom())?;
        }
        for (c, t) in self.coords.iter_mut().zip(&target.coords) {
            *c += (t - *c) * alpha;
        }
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Additive arithmetic
    // ---------------------------------------------------------------------

    /// `self + α * m`
    pub fn add(self, m: &Geometric3, alpha: f64) -> Result<Self> {
        self.try_map(|g| g.accumulate(&m.coords, m.uom(), alpha))
    }

    /// `self - α * m`
    pub fn sub(self, m: &Geometric3, alpha: f64) -> Result<Self> {
        self.try_map(|g| g.accumulate(&m.coords, m.uom(), -alpha))
    }

    pub fn add_scalar(self, a: f64, uom: Option<&Unit>) -> Result<Self> {
        self.try_map(|g| g.accumulate(&scalar_coords(a), uom, 1.0))
    }

    pub fn sub_scalar(self, a: f64, uom: Option<&Unit>) -> Result<Self> {
        self.try_map(|g| g.accumulate(&scalar_coords(a), uom, -1.0))
    }

    pub fn add_pseudo(self, b: f64, uom: Option<&Unit>) -> Result<Self> {
        self.try_map(|g| g.accumulate(&Self::pseudo(b, None).coords, uom, 1.0))
    }

    /// `self + α * v`
    pub fn add_vector(self, v: &impl VectorE3, alpha: f64) -> Result<Self> {
        let m = Self::from_vector(v);
        self.try_map(|g| g.accumulate(&m.coords, m.uom(), alpha))
    }

    /// `self - α * v`
    pub fn sub_vector(self, v: &impl VectorE3, alpha: f64) -> Result<Self> {
        let m = Self::from_vector(v);
        self.try_map(|g| g.accumulate(&m.coords, m.uom(), -alpha))
    }

    /// `self + α * (target - self)`
    pub fn lerp(self, target: &Geometric3, alpha: f64) -> Result<Self> {
        self.try_map(|g| g.lerp_in_place(target, alpha))
    }

    // ---------------------------------------------------------------------
    // Multiplicative arithmetic
    // ---------------------------------------------------------------------

    /// Geometric product `self * m`.
    pub fn mul(self, m: &Geometric3) -> Self {
        self.map(|g| {
            g.coords = ga::geometric_product(&g.coords, &m.coords);
            g.uom = uom::mul(g.uom(), m.uom());
        })
    }

    /// Exterior product `self ^ m`.
    pub fn ext(self, m: &Geometric3) -> Self {
        self.map(|g| {
            g.coords = ga::exterior_product(&g.coords, &m.coords);
            g.uom = uom::mul(g.uom(), m.uom());
        })
    }

    /// Left contraction `self << m`.
    pub fn lco(self, m: &Geometric3) -> Self {
        self.map(|g| {
            g.coords = ga::left_contraction(&g.coords, &m.coords);
            g.uom = uom::mul(g.uom(), m.uom());
        })
    }

    /// Right contraction `self >> m`.
    pub fn rco(self, m: &Geometric3) -> Self {
        self.map(|g| {
            g.coords = ga::right_contraction(&g.coords, &m.coords);
            g.uom = uom::mul(g.uom(), m.uom());
        })
    }

    /// Scalar product `self | m`.
    pub fn scp(self, m: &Geometric3) -> Self {
        self.map(|g| {
            g.coords = scalar_coords(ga::scalar_product(&g.coords, &m.coords));
            g.uom = uom::mul(g.uom(), m.uom());
        })
    }

    pub fn mul_by_number(self, alpha: f64) -> Self {
        self.map(|g| g.coords = g.coords.map(|c| c * alpha))
    }

    pub fn mul_by_scalar(self, alpha: f64, uom: Option<&Unit>) -> Self {
        self.map(|g| {
            g.coords = g.coords.map(|c| c * alpha);
            g.uom = uom::mul(g.uom(), uom);
        })
    }

    pub fn mul_by_vector(self, v: &impl VectorE3) -> Self {
        let m = Self::from_vector(v);
        self.mul(&m)
    }

    pub fn mul_by_bivector(self, b: &impl BivectorE3) -> Self {
        let m = Self::from_bivector(b);
        self.mul(&m)
    }

    pub fn div_by_number(self, alpha: f64) -> Self {
        self.map(|g| g.coords = g.coords.map(|c| c / alpha))
    }

    pub fn div_by_scalar(self, alpha: f64, uom: Option<&Unit>) -> Self {
        self.map(|g| {
            g.coords = g.coords.map(|c| c / alpha);
            g.uom = uom::div(g.uom(), uom);
        })
    }

    /// `self * v / |v|²`
    pub fn div_by_vector(self, v: &impl VectorE3) -> Result<Self> {
        let m = Self::from_vector(v);
        self.try_map(|g| g.div_in_place(&m))
    }

    /// `self * m⁻¹`
    pub fn div(self, m: &Geometric3) -> Result<Self> {
        self.try_map(|g| g.div_in_place(m))
    }

    pub fn inv(self) -> Result<Self> {
        self.try_map(|g| {
            let x = g.inverse_coords()?;
            g.coords = x;
            g.uom = uom::inv(g.uom());
            Ok(())
        })
    }

    /// Solves `self * x = 1` through the left-multiplication matrix.
    fn inverse_coords(&self) -> Result<[f64; 8]> {
        linalg::gauss(ga::left_multiplication_matrix(&self.coords), basis(COORD_SCALAR))
    }

    fn div_in_place(&mut self, m: &Geometric3) -> Result<()> {
        if m.is_scalar() {
            if m.a() == 0.0 {
                return Err(AlgebraError::singular("division by zero"));
            }
            self.coords = self.coords.map(|c| c / m.a());
        } else if m.is_vector() {
            let q = m.squared_norm_sans_units();
            self.coords = ga::geometric_product(&self.coords, &m.coords).map(|c| c / q);
        } else {
            let x = m.inverse_coords()?;
            self.coords = ga::geometric_product(&self.coords, &x);
        }
        self.uom = uom::div(self.uom(), m.uom());
        Ok(())
    }

    /// `-dual(self ^ m)`, the cross product for vectors.
    pub fn cross(self, m: &Geometric3) -> Self {
        self.ext(m).dual().neg()
    }

    /// Scales the vector components component-wise by `sigma`.
    pub fn stress(self, sigma: &impl VectorE3) -> Self {
        self.map(|g| {
            g.coords[COORD_X] *= sigma.x();
            g.coords[COORD_Y] *= sigma.y();
            g.coords[COORD_Z] *= sigma.z();
            g.uom = uom::mul(sigma.uom(), g.uom());
        })
    }

    // ---------------------------------------------------------------------
    // Unary operations
    // ---------------------------------------------------------------------

    pub fn neg(self) -> Self {
        self.map(|g| g.coords = g.coords.map(|c| -c))
    }

    /// Reversion: grades 2 and 3 change sign.
    pub fn rev(self) -> Self {
        self.map(|g| g.flip_grades(|grade| grade >= 2))
    }

    /// Clifford conjugation: grades 1 and 2 change sign.
    pub fn conj(self) -> Self {
        self.map(|g| g.flip_grades(|grade| grade == 1 || grade == 2))
    }

    fn flip_grades(&mut self, flip: impl Fn(usize) -> bool) {
        for (i, c) in self.coords.iter_mut().enumerate() {
            if flip(GRADES[i]) {
                *c = -*c;
            }
        }
    }

    /// Right multiplication by the pseudoscalar `I`.
    pub fn dual(self) -> Self {
        self.map(|g| {
            let [a, x, y, z, xy, yz, zx, b] = g.coords;
            g.coords = [-b, -yz, -zx, -xy, z, x, y, a];
        })
    }

    /// Keeps only grade `n`; any `n > 3` yields zero.
    pub fn grade(self, n: usize) -> Self {
        self.map(|g| {
            for (i, c) in g.coords.iter_mut().enumerate() {
                if GRADES[i] != n {
                    *c = 0.0;
                }
            }
        })
    }

    pub fn exp(self) -> Result<Self> {
        self.try_map(|g| {
            uom::assert_dimensionless(g.uom())?;
            g.coords = exponential::exp(&g.coords);
            g.uom = None;
            Ok(())
        })
    }

    pub fn log(self) -> Result<Self> {
        self.try_map(|g| {
            uom::assert_dimensionless(g.uom())?;
            g.coords = exponential::log(&g.coords)?;
            g.uom = None;
            Ok(())
        })
    }

    /// Bivector part of the logarithm.
    pub fn angle(self) -> Result<Self> {
        Ok(self.log()?.grade(2))
    }

    /// Square root of the scalar part; everything else is dropped.
    pub fn sqrt(self) -> Self {
        self.map(|g| {
            g.coords = scalar_coords(g.a().sqrt());
            g.uom = uom::sqrt(g.uom());
        })
    }

    /// `√(Σ c²)` as a scalar, unit unchanged.
    pub fn norm(self) -> Self {
        self.map(|g| g.coords = scalar_coords(g.magnitude_sans_units()))
    }

    pub fn magnitude(self) -> Self {
        self.norm()
    }

    /// `Σ c²` as a scalar with the unit squared.
    pub fn quaditude(self) -> Self {
        self.map(|g| {
            g.coords = scalar_coords(g.squared_norm_sans_units());
            g.uom = uom::mul(g.uom(), g.uom());
        })
    }

    pub fn squared_norm(self) -> Self {
        self.quaditude()
    }

    /// `self / |self|` with the unit dropped. Zero stays zero.
    pub fn direction(self) -> Self {
        self.map(|g| {
            let norm = g.magnitude_sans_units();
            if norm != 0.0 {
                g.coords = g.coords.map(|c| c / norm);
            }
            g.uom = None;
        })
    }

    /// Zeroes every coordinate smaller than `10⁻ⁿ` times the largest one.
    pub fn approx(self, n: i32) -> Self {
        self.map(|g| {
            let max = g.coords.iter().fold(0.0_f64, |m, c| m.max(c.abs()));
            let threshold = max * 10f64.powi(-n);
            for c in g.coords.iter_mut() {
                if c.abs() < threshold {
                    *c = 0.0;
                }
            }
        })
    }

    /// Reflection in the plane orthogonal to `n`: `-n * self * n`.
    pub fn reflect(self, n: &impl VectorE3) -> Result<Self> {
        uom::assert_dimensionless(n.uom())?;
        let normal = [n.x(), n.y(), n.z()];
        Ok(self.map(|g| g.coords = reflection::reflect_coords(&g.coords, normal)))
    }

    /// `R * self * rev(R)`
    pub fn rotate(self, r: &Geometric3) -> Result<Self> {
        uom::assert_dimensionless(r.uom())?;
        let reverse = r.clone().rev();
        Ok(self.map(|g| {
            let left = ga::geometric_product(&r.coords, &g.coords);
            g.coords = ga::geometric_product(&left, &reverse.coords);
        }))
    }

    // ---------------------------------------------------------------------
    // Text rendering
    // ---------------------------------------------------------------------

    fn render(&self, style: NumberFormat) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = write_coordinates(&mut out, &self.coords, &BASIS_LABELS, style, self.uom());
        out
    }

    pub fn to_fixed(&self, digits: usize) -> String {
        self.render(NumberFormat::Fixed(digits))
    }

    pub fn to_precision(&self, precision: usize) -> String {
        self.render(NumberFormat::Precision(precision))
    }

    pub fn to_exponential(&self, digits: usize) -> String {
        self.render(NumberFormat::Exponential(digits))
    }
}

/// Cloning always yields an unlocked copy.
impl Clone for Geometric3 {
    fn clone(&self) -> Self {
        Self { coords: self.coords, uom: self.uom, lock: LockState::Unlocked }
    }
}

/// Equality of coordinates and unit; the lock state is not compared.
impl PartialEq for Geometric3 {
    fn eq(&self, other: &Self) -> bool {
        self.coords == other.coords && self.uom == other.uom
    }
}

impl Default for Geometric3 {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<f64> for Geometric3 {
    fn from(a: f64) -> Self {
        Self::from_scalar(a)
    }
}

impl fmt::Display for Geometric3 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_coordinates(f, &self.coords, &BASIS_LABELS, NumberFormat::Shortest, self.uom())
    }
}

impl VectorE3 for Geometric3 {
    fn x(&self) -> f64 { Geometric3::x(self) }
    fn y(&self) -> f64 { Geometric3::y(self) }
    fn z(&self) -> f64 { Geometric3::z(self) }
    fn uom(&self) -> Option<&Unit> { Geometric3::uom(self) }
}

impl BivectorE3 for Geometric3 {
    fn yz(&self) -> f64 { Geometric3::yz(self) }
    fn zx(&self) -> f64 { Geometric3::zx(self) }
    fn xy(&self) -> f64 { Geometric3::xy(self) }
    fn uom(&self) -> Option<&Unit> { Geometric3::uom(self) }
}

impl SpinorE3 for Geometric3 {
    fn a(&self) -> f64 { Geometric3::a(self) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const EPS: f64 = 1e-12;

    fn assert_close(a: &Geometric3, b: &Geometric3) {
        for (p, q) in a.coords().iter().zip(b.coords()) {
            assert!((p - q).abs() < EPS, "{a} vs {b}");
        }
        assert_eq!(a.uom(), b.uom());
    }

    #[test]
    fn e1_times_e2_is_e12() {
        let p = Geometric3::E1.mul(&Geometric3::E2);
        assert_eq!(p.coords(), [0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]);
        assert_eq!(p.xy(), 1.0);
        assert!(p.is_locked());
    }

    #[test]
    fn constants_are_locked() {
        assert!(Geometric3::ZERO.is_locked());
        assert!(Geometric3::JOULE.is_locked());
        assert_eq!(Geometric3::JOULE.uom(), Some(&Unit::JOULE));
        assert!(!Geometric3::E1.clone().is_locked());
    }

    #[test]
    fn in_place_path_rejects_locked() {
        let mut e1 = Geometric3::E1;
        let err = e1.mul2(&Geometric3::E2, &Geometric3::E3).unwrap_err();
        assert_eq!(err, AlgebraError::TargetLocked { operation: "mul2" });
        assert_eq!(e1.coords(), basis(COORD_X));
        assert!(e1.set_a(2.0).is_err());
    }

    #[test]
    fn chained_setters() {
        let mut m = Geometric3::zero();
        m.set_a(1.0).unwrap().set_b(2.0).unwrap().set_uom(Some(&Unit::METER)).unwrap();
        assert_eq!(m.to_string(), "1+2*e123 m");
        assert!(m.set_coordinate(8, 1.0).is_err());
    }

    #[test]
    fn zero_adopts_units() {
        let sum = Geometric3::zero().add(&Geometric3::METER, 2.0).unwrap();
        assert_eq!(sum.a(), 2.0);
        assert_eq!(sum.uom(), Some(&Unit::METER));
        let same = Geometric3::scalar(3.0, Some(&Unit::SECOND)).add(&Geometric3::ZERO, 1.0).unwrap();
        assert_eq!(same.uom(), Some(&Unit::SECOND));
    }

    #[test]
    fn mismatched_units_fail() {
        let err = Geometric3::METER.add(&Geometric3::SECOND, 1.0).unwrap_err();
        assert!(matches!(err, AlgebraError::DimensionMismatch { .. }));
        let err = Geometric3::METER.add_scalar(1.0, None).unwrap_err();
        assert_eq!(err.to_string(), "Dimensions must be equal (length, dimensionless)");
    }

    #[test]
    fn dual_is_right_multiplication_by_pseudoscalar() {
        let m = Geometric3::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0], None);
        assert_eq!(m.clone().dual(), m.clone().mul(&Geometric3::I));
    }

    #[test]
    fn cross_of_basis_vectors() {
        let c = Geometric3::E1.cross(&Geometric3::E2);
        assert_close(&c, &Geometric3::vector(0.0, 0.0, 1.0, None));
    }

    #[test]
    fn division_dispatch() {
        let m = Geometric3::new([1.0, 0.5, -0.25, 0.0, 0.3, 0.0, 0.2, 0.1], None);
        let one = m.clone().div(&m).unwrap();
        assert_close(&one, &Geometric3::from_scalar(1.0));

        let v = Geometric3::vector(2.0, 0.0, 0.0, Some(&Unit::METER));
        let q = Geometric3::vector(4.0, 2.0, 0.0, Some(&Unit::METER)).div(&v).unwrap();
        assert_close(&q, &Geometric3::spinor(2.0, 0.0, 0.0, -1.0, None));

        let half = Geometric3::E1.div(&Geometric3::from_scalar(2.0)).unwrap();
        assert_eq!(half.x(), 0.5);

        let err = Geometric3::E1.div(&Geometric3::ZERO).unwrap_err();
        assert!(matches!(err, AlgebraError::SingularMultivector { .. }));
    }

    #[test]
    fn inverse_times_self_is_one() {
        let m = Geometric3::new([2.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7], Some(&Unit::SECOND));
        let inv = m.clone().inv().unwrap();
        assert_eq!(inv.uom(), Some(&Unit::INV_SECOND));
        let product = m.mul(&inv);
        assert_close(&product, &Geometric3::from_scalar(1.0));
    }

    #[test]
    fn singular_inverse_is_reported() {
        // 1 + e1 is a zero divisor.
        let m = Geometric3::new([1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], None);
        assert!(matches!(m.inv(), Err(AlgebraError::SingularMultivector { .. })));
    }

    #[test]
    fn exp_requires_dimensionless() {
        let err = Geometric3::METER.exp().unwrap_err();
        assert_eq!(err.to_string(), "uom 1 m must be dimensionless.");
        let r = Geometric3::bivector(0.0, 0.0, FRAC_PI_2, None).exp().unwrap();
        assert_close(&r, &Geometric3::spinor(FRAC_PI_2.cos(), 0.0, 0.0, 1.0, None));
    }

    #[test]
    fn angle_is_bivector_part_of_log() {
        let r = Geometric3::spinor(0.6, 0.0, 0.0, 0.8, None);
        let angle = r.angle().unwrap();
        assert!(angle.is_spinor());
        assert!((angle.xy() - 0.8f64.atan2(0.6)).abs() < EPS);
        assert_eq!(angle.a(), 0.0);
    }

    #[test]
    fn angle_near_a_full_turn_stays_near_pi() {
        let plane = Bivector3::new(0.0, 0.0, 1.0);
        let r = Geometric3::rotor_from_generator_angle(&plane, std::f64::consts::TAU - 1e-9).unwrap();
        assert!(r.a() < 0.0);
        let angle = r.angle().unwrap();
        assert!((angle.xy().abs() - std::f64::consts::PI).abs() < 1e-6);
        assert_eq!(angle.b(), 0.0);
    }

    #[test]
    fn grade_selection() {
        let m = Geometric3::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0], None);
        assert_eq!(m.clone().grade(0).coords(), [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(m.clone().grade(2).coords(), [0.0, 0.0, 0.0, 0.0, 5.0, 6.0, 7.0, 0.0]);
        assert!(m.clone().grade(4).is_zero());
        assert!(m.clone().grade(1).is_vector());
    }

    #[test]
    fn norm_and_quaditude() {
        let v = Geometric3::vector(3.0, 4.0, 0.0, Some(&Unit::METER));
        let n = v.clone().norm();
        assert_eq!(n.a(), 5.0);
        assert_eq!(n.uom(), Some(&Unit::METER));
        let q = v.clone().quaditude();
        assert_eq!(q.a(), 25.0);
        assert_eq!(q.uom(), Some(&Unit::METER_SQUARED));
        let d = v.direction();
        assert!((d.magnitude_sans_units() - 1.0).abs() < EPS);
        assert_eq!(d.uom(), None);
    }

    #[test]
    fn approx_drops_noise() {
        let m = Geometric3::new([1.0, 1e-14, 0.5, 0.0, 0.0, 0.0, 0.0, -1e-13], None).approx(12);
        assert_eq!(m.coords(), [1.0, 0.0, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn reflect_requires_dimensionless_normal() {
        let n = Vector3::with_uom(0.0, 0.0, 1.0, Some(&Unit::METER));
        assert!(Geometric3::E3.reflect(&n).is_err());
        let mirrored = Geometric3::vector(1.0, 2.0, 3.0, None).reflect(&Vector3::new(0.0, 0.0, 1.0)).unwrap();
        assert_eq!(mirrored.vector_part(), Vector3::new(1.0, 2.0, -3.0));
    }

    #[test]
    fn rotate_by_quarter_turn() {
        let r = Geometric3::rotor_from_axis_angle(&Vector3::new(0.0, 0.0, 1.0), FRAC_PI_2).unwrap();
        let v = Geometric3::E1.rotate(&r).unwrap();
        assert_close(&v, &Geometric3::vector(0.0, 1.0, 0.0, None));
    }

    #[test]
    fn stress_scales_vector_components() {
        let s = Geometric3::vector(1.0, 1.0, 1.0, None).stress(&Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(s.vector_part(), Vector3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn rendering() {
        assert_eq!(Geometric3::ZERO.to_string(), "0");
        assert_eq!(Geometric3::E1.to_string(), "e1");
        let m = Geometric3::new([1.5, 0.0, -1.0, 0.0, 2.0, 0.0, 0.0, -0.25], None);
        assert_eq!(m.to_string(), "1.5-e2+2*e12-0.25*e123");
        assert_eq!(m.to_fixed(2), "1.50-e2+2.00*e12-0.25*e123");
        assert_eq!(m.to_exponential(1), "1.5e+0-e2+2.0e+0*e12-2.5e-1*e123");
        assert_eq!(m.to_precision(2), "1.5-e2+2.0*e12-0.25*e123");
        assert_eq!(Geometric3::NEWTON.mul_by_number(3.0).to_string(), "3 N");
    }
}

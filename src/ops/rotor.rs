//! src/ops/rotor.rs
//! Rotor builders: direction to direction, generator and angle, frame to frame.
//!
//! Rotors act by the sandwich `R * v * rev(R)`. The magnitudes and units of the
//! direction vectors are ignored. Generators, axes and fallback planes must be
//! dimensionless.

use std::f64::consts::{FRAC_1_SQRT_2, PI};

use tracing::debug;

use crate::bivector::{Bivector3, BivectorE3};
use crate::error::Result;
use crate::ga;
use crate::multivector::Geometric3;
use crate::random;
use crate::uom;
use crate::vector::{Vector3, VectorE3};

/// `|a||b| + a·b` below this fraction of `|a||b|` counts as anti-parallel.
///
/// This is a relative bound rather than an exact zero test: for directions off the
/// coordinate axes, `|a||b| + a·b` of an exactly reversed pair rounds to a few ulps
/// instead of `0`, and the general formula would then divide by its square root.
pub const ANTI_PARALLEL_TOLERANCE: f64 = 1e-14;

fn coords(v: &impl VectorE3) -> [f64; 3] {
    [v.x(), v.y(), v.z()]
}

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn norm(a: [f64; 3]) -> f64 {
    dot(a, a).sqrt()
}

/// `a ∧ b` as `(yz, zx, xy)`.
fn wedge(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn spinor(a: f64, [yz, zx, xy]: [f64; 3]) -> Geometric3 {
    Geometric3::spinor(a, yz, zx, xy, None)
}

/// `Some((axis, sign))` when `v` is exactly `±e_axis`.
fn cardinal(v: [f64; 3]) -> Option<(usize, f64)> {
    let axis = v.iter().position(|c| c.abs() == 1.0)?;
    let others_zero = v.iter().enumerate().all(|(i, c)| i == axis || *c == 0.0);
    others_zero.then_some((axis, v[axis]))
}

/// Rotor turning direction `a` onto direction `b`.
///
/// Anti-parallel inputs leave the rotation plane open: `fallback` picks it when
/// given, otherwise a random plane containing `a` is used. A dimensioned `fallback`
/// fails with `NotDimensionless`, checked whether or not it ends up being used.
pub fn from_vector_to_vector(
    a: &impl VectorE3,
    b: &impl VectorE3,
    fallback: Option<&dyn BivectorE3>,
) -> Result<Geometric3> {
    if let Some(plane) = fallback {
        uom::assert_dimensionless(plane.uom())?;
    }
    let a = coords(a);
    let b = coords(b);
    if a == b {
        return Ok(Geometric3::ONE.clone());
    }

    if let (Some((i, si)), Some((j, sj))) = (cardinal(a), cardinal(b)) {
        if i != j {
            // Quarter turn between axes: (1 + b∧a) / √2.
            return Ok(spinor(FRAC_1_SQRT_2, wedge(b, a).map(|c| c * FRAC_1_SQRT_2)));
        }
        if si != sj && fallback.is_none() {
            // Half turn about an axis orthogonal to the input.
            return Ok(if i == 2 {
                spinor(0.0, [0.0, -1.0, 0.0])
            } else {
                spinor(0.0, [0.0, 0.0, -1.0])
            });
        }
    }

    let ma = norm(a);
    let mb = norm(b);
    if ma == 0.0 || mb == 0.0 {
        return Ok(Geometric3::ONE.clone());
    }
    let ab = ma * mb;
    let sum = ab + dot(b, a);
    if sum <= ab * ANTI_PARALLEL_TOLERANCE {
        return match fallback {
            Some(plane) => from_generator_angle(plane, PI),
            None => Ok(half_turn_through_random_plane(a)),
        };
    }
    let denom = (2.0 * ab * sum).sqrt();
    Ok(spinor(sum / denom, wedge(b, a).map(|c| c / denom)))
}

fn half_turn_through_random_plane(a: [f64; 3]) -> Geometric3 {
    loop {
        let r: [f64; 3] = random::gen_signed();
        let w = wedge(r, a);
        let n = norm(w);
        if n > 0.0 {
            debug!(?a, "anti-parallel rotor: using a random rotation plane");
            return half_turn([w[0] / n, w[1] / n, w[2] / n]);
        }
    }
}

/// `exp(-B θ / 2)` for a unit plane `b` given as `(yz, zx, xy)`, with `θ = π`.
fn half_turn(b: [f64; 3]) -> Geometric3 {
    generator_angle(b, PI)
}

fn generator_angle(b: [f64; 3], theta: f64) -> Geometric3 {
    let magnitude = norm(b);
    if magnitude == 0.0 {
        return Geometric3::ONE.clone();
    }
    let phi = magnitude * theta / 2.0;
    let s = phi.sin() / magnitude;
    spinor(phi.cos(), b.map(|c| -c * s))
}

/// `exp(-B θ / 2)`: a rotation by `θ |B|` in the plane of `B`.
///
/// A zero generator yields the identity. A dimensioned generator fails with
/// `NotDimensionless`.
pub fn from_generator_angle(generator: &(impl BivectorE3 + ?Sized), theta: f64) -> Result<Geometric3> {
    uom::assert_dimensionless(generator.uom())?;
    Ok(generator_angle([generator.yz(), generator.zx(), generator.xy()], theta))
}

/// Right-handed rotation by `theta` about `axis`, which must be dimensionless.
pub fn from_axis_angle(axis: &impl VectorE3, theta: f64) -> Result<Geometric3> {
    uom::assert_dimensionless(axis.uom())?;
    let n = coords(axis);
    let m = norm(n);
    if m == 0.0 {
        return Ok(Geometric3::ONE.clone());
    }
    Ok(generator_angle(n.map(|c| c / m), theta))
}

/// Rotor taking `e1` to `f1` and, as closely as possible, `e2` to `f2`.
pub fn from_two_vectors(
    e1: &impl VectorE3,
    f1: &impl VectorE3,
    e2: &impl VectorE3,
    f2: &impl VectorE3,
) -> Result<Geometric3> {
    let r1 = from_vector_to_vector(e1, f1, None)?;
    let e2 = Geometric3::from_vector(e2);
    let r1_rev = r1.clone().rev();
    let f = ga::geometric_product(&ga::geometric_product(&r1.coords(), &e2.coords()), &r1_rev.coords());
    let f = Vector3::new(f[ga::COORD_X], f[ga::COORD_Y], f[ga::COORD_Z]);
    // Once f1 is reached, the only freedom left is a turn about f1.
    let plane = Bivector3::new(f1.x(), f1.y(), f1.z());
    let r2 = from_vector_to_vector(&f, f2, Some(&plane))?;
    Ok(r2.mul(&r1))
}

/// Rotor mapping frame `es` onto frame `fs`, pivoting on the best-aligned pair.
pub fn from_frame_to_frame<V: VectorE3>(es: &[V; 3], fs: &[V; 3]) -> Result<Geometric3> {
    let cosines: [f64; 3] = std::array::from_fn(|k| {
        let e = coords(&es[k]);
        let f = coords(&fs[k]);
        dot(e, f) / (norm(e) * norm(f))
    });
    let i = (0..3).fold(0, |best, k| if cosines[k] > cosines[best] { k } else { best });
    let j = (i + 1) % 3;
    from_two_vectors(&es[i], &fs[i], &es[j], &fs[j])
}

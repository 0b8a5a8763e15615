//! src/ops/exponential.rs
//! Exponential and logarithm of a full multivector.
//!
//! The scalar and pseudoscalar parts span the centre of the algebra, which is a
//! copy of ℂ with `i = e123`. Writing `M = c + V` with `c` central and `V` the
//! vector-plus-bivector part, `V²` is central too, so both functions reduce to
//! complex `cosh`/`sinh`/`ln` of `√(V²)`.

use std::f64::consts::TAU;

use num_complex::Complex64;

use crate::error::{AlgebraError, Result};

/// Below this `|√(V²)|` the series expansions are used.
pub const SERIES_CUTOFF: f64 = 1e-8;

struct Split {
    centre: Complex64,
    v: [f64; 3],
    w: [f64; 3],
    square: Complex64,
}

/// `w` holds the bivector as `(yz, zx, xy)`, the dual layout of a vector.
fn split(coords: &[f64; 8]) -> Split {
    let [a, x, y, z, xy, yz, zx, b] = *coords;
    let v = [x, y, z];
    let w = [yz, zx, xy];
    let vv = x * x + y * y + z * z;
    let ww = yz * yz + zx * zx + xy * xy;
    let vw = x * yz + y * zx + z * xy;
    Split {
        centre: Complex64::new(a, b),
        v,
        w,
        square: Complex64::new(vv - ww, 2.0 * vw),
    }
}

/// `centre + s·V` back into coordinates.
fn join(centre: Complex64, s: Complex64, v: &[f64; 3], w: &[f64; 3]) -> [f64; 8] {
    let vec = |k: usize| s.re * v[k] - s.im * w[k];
    let biv = |k: usize| s.re * w[k] + s.im * v[k];
    [centre.re, vec(0), vec(1), vec(2), biv(2), biv(0), biv(1), centre.im]
}

pub fn exp(coords: &[f64; 8]) -> [f64; 8] {
    let Split { centre, v, w, square } = split(coords);
    let root = square.sqrt();
    let (cosh, sinhc) = if root.norm() < SERIES_CUTOFF {
        (1.0 + square / 2.0, 1.0 + square / 6.0)
    } else {
        (root.cosh(), root.sinh() / root)
    };
    let scale = centre.exp();
    join(scale * cosh, scale * sinhc, &v, &w)
}

/// Principal logarithm. Fails when `c + √(V²)` or `c - √(V²)` vanishes.
///
/// With `r = √(V²)` the value splits as `(c + r)P + (c - r)P̄` over the idempotents
/// `P, P̄ = (1 ± V/r)/2`, so `log M = ln(c + r)P + ln(c - r)P̄`. For a spinor this
/// puts the angle `atan2(|B|, a)` in `[0, π]` on the bivector part.
pub fn log(coords: &[f64; 8]) -> Result<[f64; 8]> {
    let Split { centre, v, w, square } = split(coords);
    let root = square.sqrt();
    let plus = centre + root;
    let minus = centre - root;
    if plus.norm() == 0.0 || minus.norm() == 0.0 {
        return Err(AlgebraError::singular("logarithm of a null multivector"));
    }
    let (ln_plus, ln_minus) = (plus.ln(), minus.ln());
    let diff = ln_plus - ln_minus;
    let factor = if root.norm() < SERIES_CUTOFF && !crosses_branch_cut(diff, root / centre) {
        centre.inv()
    } else {
        diff / (2.0 * root)
    };
    let out = join((ln_plus + ln_minus) * 0.5, factor, &v, &w);
    if out.iter().any(|c| !c.is_finite()) {
        return Err(AlgebraError::singular("logarithm is not finite"));
    }
    Ok(out)
}

/// For small `r/c`, `ln(c + r) - ln(c - r)` is `2r/c` unless the two sit on
/// opposite sides of the negative real axis, which adds `±2πi`.
fn crosses_branch_cut(diff: Complex64, ratio: Complex64) -> bool {
    ((diff - 2.0 * ratio).im / TAU).round() != 0.0
}

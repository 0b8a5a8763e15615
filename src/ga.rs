//! src/ga.rs
//!
//! Bilinear product kernels of the 3-D Euclidean geometric algebra on raw
//! coordinate arrays `[1, e1, e2, e3, e12, e23, e31, e123]`.

pub const COORD_SCALAR: usize = 0;
pub const COORD_X: usize = 1;
pub const COORD_Y: usize = 2;
pub const COORD_Z: usize = 3;
pub const COORD_XY: usize = 4;
pub const COORD_YZ: usize = 5;
pub const COORD_ZX: usize = 6;
pub const COORD_PSEUDO: usize = 7;

/// Display labels in coordinate order.
pub const BASIS_LABELS: [&str; 8] = ["1", "e1", "e2", "e3", "e12", "e23", "e31", "e123"];

/// Grade of each coordinate.
pub const GRADES: [usize; 8] = [0, 1, 1, 1, 2, 2, 2, 3];

/// Full geometric product `a * b` written into `out`.
#[inline]
pub fn geometric_product_full(a: &[f64; 8], b: &[f64; 8], out: &mut [f64; 8]) {
    let [a0, a1, a2, a3, a4, a5, a6, a7] = *a;
    let [b0, b1, b2, b3, b4, b5, b6, b7] = *b;
    out[0] = a0 * b0 + a1 * b1 + a2 * b2 + a3 * b3 - a4 * b4 - a5 * b5 - a6 * b6 - a7 * b7;
    out[1] = a0 * b1 + a1 * b0 - a2 * b4 + a3 * b6 + a4 * b2 - a5 * b7 - a6 * b3 - a7 * b5;
    out[2] = a0 * b2 + a1 * b4 + a2 * b0 - a3 * b5 - a4 * b1 + a5 * b3 - a6 * b7 - a7 * b6;
    out[3] = a0 * b3 - a1 * b6 + a2 * b5 + a3 * b0 - a4 * b7 - a5 * b2 + a6 * b1 - a7 * b4;
    out[4] = a0 * b4 + a1 * b2 - a2 * b1 + a3 * b7 + a4 * b0 - a5 * b6 + a6 * b5 + a7 * b3;
    out[5] = a0 * b5 + a1 * b7 + a2 * b3 - a3 * b2 + a4 * b6 + a5 * b0 - a6 * b4 + a7 * b1;
    out[6] = a0 * b6 - a1 * b3 + a2 * b7 + a3 * b1 - a4 * b5 + a5 * b4 + a6 * b0 + a7 * b2;
    out[7] = a0 * b7 + a1 * b5 + a2 * b6 + a3 * b4 + a4 * b3 + a5 * b1 + a6 * b2 + a7 * b0;
}

/// Convenience wrapper returning the product.
#[inline]
pub fn geometric_product(a: &[f64; 8], b: &[f64; 8]) -> [f64; 8] {
    let mut out = [0.0; 8];
    geometric_product_full(a, b, &mut out);
    out
}

/// Exterior (grade-raising) product `a ^ b`.
pub fn exterior_product(a: &[f64; 8], b: &[f64; 8]) -> [f64; 8] {
    let [a0, a1, a2, a3, a4, a5, a6, a7] = *a;
    let [b0, b1, b2, b3, b4, b5, b6, b7] = *b;
    [
        a0 * b0,
        a0 * b1 + a1 * b0,
        a0 * b2 + a2 * b0,
        a0 * b3 + a3 * b0,
        a0 * b4 + a1 * b2 - a2 * b1 + a4 * b0,
        a0 * b5 + a2 * b3 - a3 * b2 + a5 * b0,
        a0 * b6 - a1 * b3 + a3 * b1 + a6 * b0,
        a0 * b7 + a1 * b5 + a2 * b6 + a3 * b4 + a4 * b3 + a5 * b1 + a6 * b2 + a7 * b0,
    ]
}

/// Left contraction `a << b`.
pub fn left_contraction(a: &[f64; 8], b: &[f64; 8]) -> [f64; 8] {
    let [a0, a1, a2, a3, a4, a5, a6, a7] = *a;
    let [b0, b1, b2, b3, b4, b5, b6, b7] = *b;
    [
        a0 * b0 + a1 * b1 + a2 * b2 + a3 * b3 - a4 * b4 - a5 * b5 - a6 * b6 - a7 * b7,
        a0 * b1 - a2 * b4 + a3 * b6 - a5 * b7,
        a0 * b2 + a1 * b4 - a3 * b5 - a6 * b7,
        a0 * b3 - a1 * b6 + a2 * b5 - a4 * b7,
        a0 * b4 + a3 * b7,
        a0 * b5 + a1 * b7,
        a0 * b6 + a2 * b7,
        a0 * b7,
    ]
}

/// Right contraction `a >> b`.
pub fn right_contraction(a: &[f64; 8], b: &[f64; 8]) -> [f64; 8] {
    let [a0, a1, a2, a3, a4, a5, a6, a7] = *a;
    let [b0, b1, b2, b3, b4, b5, b6, b7] = *b;
    [
        a0 * b0 + a1 * b1 + a2 * b2 + a3 * b3 - a4 * b4 - a5 * b5 - a6 * b6 - a7 * b7,
        a1 * b0 + a4 * b2 - a6 * b3 - a7 * b5,
        a2 * b0 - a4 * b1 + a5 * b3 - a7 * b6,
        a3 * b0 - a5 * b2 + a6 * b1 - a7 * b4,
        a4 * b0 + a7 * b3,
        a5 * b0 + a7 * b1,
        a6 * b0 + a7 * b2,
        a7 * b0,
    ]
}

/// Scalar product: grade-0 part of the geometric product.
#[inline]
pub fn scalar_product(a: &[f64; 8], b: &[f64; 8]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
        - a[4] * b[4]
        - a[5] * b[5]
        - a[6] * b[6]
        - a[7] * b[7]
}

/// Matrix of left multiplication by `m`: `M · x == m * x` for every coordinate vector `x`.
pub fn left_multiplication_matrix(m: &[f64; 8]) -> [[f64; 8]; 8] {
    let [a, x, y, z, xy, yz, zx, b] = *m;
    [
        [a, x, y, z, -xy, -yz, -zx, -b],
        [x, a, xy, -zx, -y, -b, z, -yz],
        [y, -xy, a, yz, x, -z, -b, -zx],
        [z, zx, -yz, a, -b, y, -x, -xy],
        [xy, -y, x, b, a, zx, -yz, z],
        [yz, b, -z, y, -zx, a, xy, x],
        [zx, z, b, -x, yz, -xy, a, y],
        [b, yz, zx, xy, z, x, y, a],
    ]
}

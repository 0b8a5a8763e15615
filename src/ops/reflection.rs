//! src/ops/reflection.rs
//! Reflection in the plane orthogonal to a vector.

/// `-n * m * n`, evaluated grade by grade.
///
/// For a unit `n` this is the mirror image of `m` in the plane with normal `n`;
/// otherwise the result is additionally scaled by `|n|²`.
pub fn reflect_coords(m: &[f64; 8], n: [f64; 3]) -> [f64; 8] {
    let [a, x, y, z, xy, yz, zx, b] = *m;
    let [n1, n2, n3] = n;
    let nn = n1 * n1 + n2 * n2 + n3 * n3;

    let f1 = 2.0 * n2 * n3;
    let f2 = 2.0 * n3 * n1;
    let f3 = 2.0 * n1 * n2;

    let t1 = n2 * n2 + n3 * n3 - n1 * n1;
    let t2 = n3 * n3 + n1 * n1 - n2 * n2;
    let t3 = n1 * n1 + n2 * n2 - n3 * n3;

    [
        -nn * a,
        x * t1 - y * f3 - z * f2,
        y * t2 - z * f1 - x * f3,
        z * t3 - x * f2 - y * f1,
        xy * t3 - yz * f2 - zx * f1,
        yz * t1 - zx * f3 - xy * f2,
        zx * t2 - xy * f1 - yz * f3,
        -nn * b,
    ]
}

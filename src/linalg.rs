//! src/linalg.rs
//! Dense Gauss elimination with partial pivoting.

use tracing::debug;

use crate::error::{AlgebraError, Result};

/// Solves `a · x = b`.
///
/// The row with the largest magnitude in the pivot column is swapped into place
/// before each elimination step. An exactly-zero pivot, or a solution that is not
/// finite, is reported as `SingularMultivector`.
pub fn gauss<const N: usize>(mut a: [[f64; N]; N], mut b: [f64; N]) -> Result<[f64; N]> {
    for col in 0..N {
        let mut pivot = col;
        for row in col + 1..N {
            if a[row][col].abs() > a[pivot][col].abs() {
                pivot = row;
            }
        }
        if a[pivot][col] == 0.0 {
            debug!(column = col, "zero pivot in linear solve");
            return Err(AlgebraError::singular(format!("zero pivot in column {col}")));
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in col + 1..N {
            let factor = a[row][col] / a[col][col];
            if factor == 0.0 {
                continue;
            }
            for k in col..N {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = [0.0; N];
    for row in (0..N).rev() {
        let tail: f64 = (row + 1..N).map(|k| a[row][k] * x[k]).sum();
        x[row] = (b[row] - tail) / a[row][row];
    }
    if x.iter().any(|v| !v.is_finite()) {
        debug!(?x, "non-finite solution in linear solve");
        return Err(AlgebraError::singular("non-finite solution"));
    }
    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn solves_with_row_swap() {
        // First pivot is zero; partial pivoting must swap.
        let a = [[0.0, 2.0, 1.0], [1.0, 1.0, 0.0], [3.0, 0.0, 1.0]];
        let b = [5.0, 3.0, 6.0];
        let x = gauss(a, b).unwrap();
        for r in 0..3 {
            let lhs: f64 = (0..3).map(|c| a[r][c] * x[c]).sum();
            assert!((lhs - b[r]).abs() < EPS);
        }
    }

    #[test]
    fn identity_returns_rhs() {
        let a = [[1.0, 0.0], [0.0, 1.0]];
        assert_eq!(gauss(a, [4.0, -2.0]).unwrap(), [4.0, -2.0]);
    }

    #[test]
    fn singular_system_is_reported() {
        let a = [[1.0, 2.0], [2.0, 4.0]];
        let err = gauss(a, [1.0, 0.0]).unwrap_err();
        assert!(matches!(err, AlgebraError::SingularMultivector { .. }));
    }

    #[test]
    fn zero_matrix_is_singular() {
        let err = gauss([[0.0; 4]; 4], [1.0, 0.0, 0.0, 0.0]).unwrap_err();
        assert!(err.to_string().contains("zero pivot"));
    }
}

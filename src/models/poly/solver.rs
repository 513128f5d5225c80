//! Dense linear solver for the (small) normal equations.

/// Replacement for a pivot that is exactly zero.
pub const PIVOT_EPSILON: f64 = 1e-12;

/// Solve `a · x = b` by Gauss-Jordan elimination with partial pivoting.
///
/// At column `i` the row with the largest `|a[k][i]|` (k ≥ i) is swapped into
/// place, the pivot row is normalised and column `i` is eliminated from every
/// other row, leaving the solution in the augmented column.
///
/// Never fails: a zero pivot is replaced by [`PIVOT_EPSILON`], trading accuracy
/// on singular systems for always returning a value. Returns an empty vector for
/// an empty system.
pub fn solve_linear_system(a: &[Vec<f64>], b: &[f64]) -> Vec<f64> {
    let n = a.len().min(b.len());
    if n == 0 {
        return Vec::new();
    }

    // Augmented n x (n+1) matrix
    let mut m: Vec<Vec<f64>> = (0..n)
        .map(|i| {
            let mut row: Vec<f64> = (0..n)
                .map(|j| a[i].get(j).copied().unwrap_or(0.0))
                .collect();
            row.push(b[i]);
            row
        })
        .collect();

    for i in 0..n {
        let mut max_row = i;
        for k in (i + 1)..n {
            if m[k][i].abs() > m[max_row][i].abs() {
                max_row = k;
            }
        }
        m.swap(i, max_row);

        let mut pivot = m[i][i];
        if pivot == 0.0 || pivot.is_nan() {
            tracing::debug!(column = i, "zero pivot, substituting epsilon");
            pivot = PIVOT_EPSILON;
        }
        for j in i..=n {
            m[i][j] /= pivot;
        }

        let pivot_row = m[i].clone();
        for (k, row) in m.iter_mut().enumerate() {
            if k == i {
                continue;
            }
            let factor = row[i];
            if factor == 0.0 {
                continue;
            }
            for j in i..=n {
                row[j] -= factor * pivot_row[j];
            }
        }
    }

    m.into_iter().map(|row| row[n]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &[f64], expected: &[f64], tol: f64) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < tol, "expected {expected:?}, got {actual:?}");
        }
    }

    #[test]
    fn test_solves_well_conditioned_system() {
        // 2x + y - z = 8, -3x - y + 2z = -11, -2x + y + 2z = -3  =>  (2, 3, -1)
        let a = vec![
            vec![2.0, 1.0, -1.0],
            vec![-3.0, -1.0, 2.0],
            vec![-2.0, 1.0, 2.0],
        ];
        let b = vec![8.0, -11.0, -3.0];
        assert_close(&solve_linear_system(&a, &b), &[2.0, 3.0, -1.0], 1e-10);
    }

    #[test]
    fn test_requires_pivoting() {
        // Leading zero forces a row swap
        let a = vec![vec![0.0, 1.0], vec![1.0, 1.0]];
        let b = vec![2.0, 5.0];
        assert_close(&solve_linear_system(&a, &b), &[3.0, 2.0], 1e-12);
    }

    #[test]
    fn test_singular_system_returns_finite_values() {
        let a = vec![vec![0.0, 0.0], vec![0.0, 0.0]];
        let b = vec![0.0, 0.0];
        let x = solve_linear_system(&a, &b);
        assert_eq!(x.len(), 2);
        assert!(x.iter().all(|v| v.is_finite()), "got {x:?}");
    }

    #[test]
    fn test_empty_system() {
        assert!(solve_linear_system(&[], &[]).is_empty());
    }
}

//! Deterministic series estimates of π, for comparison with the Monte Carlo
//! experiments.
//!
//! The Leibniz series `π = 4 Σ (-1)^k / (2k + 1)` converges very slowly.
//! Pairing consecutive terms gives a non-alternating variant, and Wynn's
//! epsilon algorithm accelerates the partial sums.
//!
//! ```
//! use mcpi_engine::series;
//!
//! let plain = series::leibniz(20);
//! let accelerated = series::wynn_leibniz(20, 3).unwrap();
//! let pi = std::f64::consts::PI;
//! assert!((accelerated - pi).abs() < (plain - pi).abs());
//! ```

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeriesError {
    #[display("at least one epsilon iteration is required")]
    ZeroIteration,
    #[display("order {order} is too small for {iteration} epsilon iterations")]
    OrderTooSmall { order: usize, iteration: usize },
    #[display("{terms} partial sums are too few for {iteration} epsilon iterations")]
    TooFewTerms { terms: usize, iteration: usize },
}

/// The `k`-th Leibniz term times 4.
#[expect(clippy::cast_precision_loss)]
fn leibniz_term(k: usize) -> f64 {
    let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
    4.0 * sign / (2.0 * k as f64 + 1.0)
}

/// Sum of the first `order + 1` Leibniz terms, times 4.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn leibniz(order: usize) -> f64 {
    let mut sum = 1.0;
    for k in 1..=order {
        let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
        sum += sign / (2.0 * k as f64 + 1.0);
    }
    4.0 * sum
}

/// Sum of the first `order + 1` paired terms `2 / ((4k + 1)(4k + 3))`, times 4.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn nonalternating_leibniz(order: usize) -> f64 {
    let sum = (0..=order)
        .map(|k| {
            let k = k as f64;
            2.0 / ((4.0 * k + 1.0) * (4.0 * k + 3.0))
        })
        .fold(0.0, |acc, term| acc + term);
    4.0 * sum
}

/// The first `order + 1` Leibniz terms, each times 4.
#[must_use]
pub fn leibniz_terms(order: usize) -> Vec<f64> {
    (0..=order).map(leibniz_term).collect()
}

/// Running partial sums of `terms`.
#[must_use]
pub fn partial_sums(terms: &[f64]) -> Vec<f64> {
    terms
        .iter()
        .scan(0.0, |acc, t| {
            *acc += t;
            Some(*acc)
        })
        .collect()
}

/// Wynn's epsilon table for `partial_sums`.
///
/// Returns the even-order columns `ε_0, ε_2, …, ε_{2·iteration}`, where
/// `ε_0` is the input sequence and each further column is one more Shanks
/// transformation of it. Column `ε_{2k}` (for `k >= 1`) has `len - 2k - 1`
/// entries; its last entry is the most accelerated estimate. Equal neighbouring entries produce infinite or NaN values, as
/// the recurrence divides by their difference.
///
/// # Errors
///
/// * [`SeriesError::ZeroIteration`] - if `iteration` is zero
/// * [`SeriesError::TooFewTerms`] - if `partial_sums` has fewer than
///   `2 * iteration + 2` entries
///
/// # Examples
///
/// ```
/// use mcpi_engine::series::wynn_epsilon;
///
/// // A geometric sequence is summed exactly by one Shanks transformation.
/// let table = wynn_epsilon(&[1.0, 2.0, 2.5, 2.75], 1).unwrap();
/// assert_eq!(table[0], vec![1.0, 2.0, 2.5, 2.75]);
/// assert_eq!(table[1], vec![3.0]);
/// ```
pub fn wynn_epsilon(partial_sums: &[f64], iteration: usize) -> Result<Vec<Vec<f64>>, SeriesError> {
    if iteration == 0 {
        return Err(SeriesError::ZeroIteration);
    }
    let len = partial_sums.len();
    let depth = table_depth(iteration)
        .filter(|&depth| depth < len)
        .ok_or(SeriesError::TooFewTerms {
            terms: len,
            iteration,
        })?;

    // eps[0] is ε_{-1} (all zeros), eps[c] is ε_{c-1}.
    let mut eps = vec![vec![0.0; len]; depth + 1];
    eps[1].copy_from_slice(partial_sums);
    for c in 2..=depth {
        for j in 0..len.saturating_sub(c) {
            eps[c][j] = eps[c - 2][j + 1] + 1.0 / (eps[c - 1][j + 1] - eps[c - 1][j]);
        }
    }

    let table = (0..=iteration)
        .map(|k| {
            let c = 2 * k + 1;
            let valid = if c == 1 { len } else { len - c };
            eps[c][..valid].to_vec()
        })
        .collect();
    Ok(table)
}

/// Number of ε columns past ε_{-1} needed for `iteration` transformations.
fn table_depth(iteration: usize) -> Option<usize> {
    iteration.checked_mul(2)?.checked_add(1)
}

/// Leibniz series of `order` accelerated by `iteration` Shanks transformations.
///
/// # Errors
///
/// * [`SeriesError::ZeroIteration`] - if `iteration` is zero
/// * [`SeriesError::OrderTooSmall`] - if `order + 1 < 2 * iteration + 2`
pub fn wynn_leibniz(order: usize, iteration: usize) -> Result<f64, SeriesError> {
    if iteration == 0 {
        return Err(SeriesError::ZeroIteration);
    }
    // The last even column needs `order + 1 > 2 * iteration + 1` terms.
    if table_depth(iteration).is_none_or(|depth| order < depth) {
        return Err(SeriesError::OrderTooSmall { order, iteration });
    }
    let sums = partial_sums(&leibniz_terms(order));
    let table = wynn_epsilon(&sums, iteration)?;
    table[iteration]
        .last()
        .copied()
        .ok_or(SeriesError::TooFewTerms {
            terms: sums.len(),
            iteration,
        })
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    #[test]
    fn test_leibniz_first_orders() {
        assert_eq!(leibniz(0), 4.0);
        assert!((leibniz(1) - 8.0 / 3.0).abs() < 1e-12);
        assert!((leibniz(2) - 4.0 * (1.0 - 1.0 / 3.0 + 1.0 / 5.0)).abs() < 1e-12);
    }

    #[test]
    fn test_leibniz_converges_slowly() {
        assert!((leibniz(20) - 3.189_184_782_277_596).abs() < 1e-12);
        assert!((leibniz(10_000) - PI).abs() < 1e-3);
    }

    #[test]
    fn test_nonalternating_leibniz() {
        assert!((nonalternating_leibniz(0) - 8.0 / 3.0).abs() < 1e-12);
        assert!((nonalternating_leibniz(20) - 3.117_786_501_758_877).abs() < 1e-12);
        // Pairing terms k = 2m, 2m+1 of the Leibniz series
        assert!((nonalternating_leibniz(9) - leibniz(19)).abs() < 1e-12);
    }

    #[test]
    fn test_leibniz_terms_and_sums() {
        let terms = leibniz_terms(3);
        assert_eq!(terms.len(), 4);
        assert_eq!(terms[0], 4.0);
        assert!((terms[1] + 4.0 / 3.0).abs() < 1e-15);
        let sums = partial_sums(&terms);
        assert_eq!(sums.len(), 4);
        assert!((sums[3] - leibniz(3)).abs() < 1e-12);
    }

    #[test]
    fn test_wynn_epsilon_zero_iteration() {
        assert_eq!(wynn_epsilon(&[1.0, 2.0], 0), Err(SeriesError::ZeroIteration));
        assert_eq!(wynn_leibniz(20, 0), Err(SeriesError::ZeroIteration));
    }

    #[test]
    fn test_wynn_epsilon_column_lengths() {
        let table = wynn_epsilon(&partial_sums(&leibniz_terms(9)), 3).unwrap();
        let lengths = table.iter().map(Vec::len).collect::<Vec<_>>();
        assert_eq!(lengths, vec![10, 7, 5, 3]);
    }

    #[test]
    fn test_wynn_leibniz_accelerates() {
        let e1 = wynn_leibniz(20, 1).unwrap();
        let e2 = wynn_leibniz(20, 2).unwrap();
        let e3 = wynn_leibniz(20, 3).unwrap();
        assert!((e1 - PI).abs() < 1e-4);
        assert!((e2 - PI).abs() < 1e-6);
        assert!((e3 - PI).abs() < 1e-8);
        assert!((e3 - PI).abs() < (e2 - PI).abs());
        assert!((e2 - PI).abs() < (e1 - PI).abs());
    }

    #[test]
    fn test_wynn_leibniz_minimum_order() {
        assert!((wynn_leibniz(9, 4).unwrap() - PI).abs() < 1e-5);
        assert_eq!(
            wynn_leibniz(8, 4),
            Err(SeriesError::OrderTooSmall {
                order: 8,
                iteration: 4
            })
        );
        assert!((wynn_leibniz(3, 1).unwrap() - 3.166_666_666_666_667).abs() < 1e-12);
    }

    #[test]
    fn test_wynn_leibniz_huge_iteration() {
        for iteration in [1_000_000_000, usize::MAX / 2, usize::MAX / 2 + 1, usize::MAX] {
            assert_eq!(
                wynn_leibniz(20, iteration),
                Err(SeriesError::OrderTooSmall {
                    order: 20,
                    iteration
                })
            );
        }
        for iteration in [2, 1_000_000_000, usize::MAX / 2, usize::MAX] {
            assert_eq!(
                wynn_epsilon(&[1.0, 2.0, 2.5, 2.75], iteration),
                Err(SeriesError::TooFewTerms {
                    terms: 4,
                    iteration
                })
            );
        }
    }
}

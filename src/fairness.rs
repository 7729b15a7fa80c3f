//! Inequality of the satisfied-preference counts across groups.

use itertools::Itertools;

use crate::model::condition::Gini;

/// Gini coefficient of a distribution of non-negative counts.
///
/// With the counts sorted ascending and ranked from 1:
/// `G = (2 * sum(i * x_i) - (n + 1) * S) / (n * S)`.
/// The numerator is evaluated exactly in integers, so equal counts give
/// exactly `0.0`. Returns [`Gini::Undefined`] when there are no counts or
/// they sum to zero.
pub fn gini_coefficient(counts: &[usize]) -> Gini {
    let n = counts.len() as u128;
    let total: u128 = counts.iter().map(|c| *c as u128).sum();
    if n == 0 || total == 0 {
        return Gini::Undefined;
    }
    let weighted: u128 = counts.iter()
        .copied()
        .sorted_unstable()
        .zip(1u128..)
        .map(|(x, rank)| rank * x as u128)
        .sum();
    // sorted ascending, so 2 * weighted >= (n + 1) * total
    let numerator = 2 * weighted - (n + 1) * total;
    Gini::Defined(numerator as f64 / (n * total) as f64)
}

pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn equal_counts_are_perfectly_fair() {
        assert_eq!(gini_coefficient(&[3, 3, 3, 3]), Gini::Defined(0.0));
        assert_eq!(gini_coefficient(&[7]), Gini::Defined(0.0));
    }

    #[test]
    fn all_zero_and_empty_are_undefined() {
        assert_eq!(gini_coefficient(&[0, 0, 0]), Gini::Undefined);
        assert_eq!(gini_coefficient(&[]), Gini::Undefined);
        assert_eq!(gini_coefficient(&[0, 0]).coefficient(), 0.0);
    }

    #[test]
    fn known_values() {
        assert_eq!(gini_coefficient(&[0, 2]), Gini::Defined(0.5));
        assert_eq!(gini_coefficient(&[0, 0, 0, 4]), Gini::Defined(0.75));
        // sorted [1, 2, 3]: (2 * 14 - 4 * 6) / (3 * 6)
        let g = gini_coefficient(&[3, 1, 2]).coefficient();
        assert!((g - 4.0 / 18.0).abs() < 1e-12);
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to_hundredths(3.333_333), 3.33);
        assert_eq!(round_to_hundredths(2.225_1), 2.23);
        assert_eq!(round_to_hundredths(5.0), 5.0);
    }

    proptest! {
        #[test]
        fn invariant_under_permutation(
            counts in prop::collection::vec(0usize..50, 1..12),
            seed in any::<u64>(),
        ) {
            use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
            let mut shuffled = counts.clone();
            shuffled.shuffle(&mut SmallRng::seed_from_u64(seed));
            prop_assert_eq!(gini_coefficient(&counts), gini_coefficient(&shuffled));
        }

        #[test]
        fn stays_within_unit_interval(counts in prop::collection::vec(0usize..50, 1..12)) {
            if let Gini::Defined(g) = gini_coefficient(&counts) {
                prop_assert!((0.0..=1.0).contains(&g));
            } else {
                prop_assert!(counts.iter().all(|c| *c == 0));
            }
        }

        #[test]
        fn uniform_distribution_is_zero(value in 1usize..100, n in 1usize..20) {
            prop_assert_eq!(gini_coefficient(&vec![value; n]), Gini::Defined(0.0));
        }
    }
}

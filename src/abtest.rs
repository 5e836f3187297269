//! A/B test comparison for script variants.

use serde::Serialize;

use crate::stats::rate;
use crate::types::AbTest;

/// Confidence never reports above this, whatever the spread.
const CONFIDENCE_CAP: f64 = 95.0;
const CONFIDENCE_BASE: f64 = 50.0;
const CONFIDENCE_PER_POINT: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Winner {
    VariantA,
    VariantB,
    Tie,
}

impl AbTest {
    /// Conversion rate of variant A, in percent.
    pub fn rate_a(&self) -> f64 {
        rate(self.conversion_a, self.sample_size)
    }

    /// Conversion rate of variant B, in percent.
    pub fn rate_b(&self) -> f64 {
        rate(self.conversion_b, self.sample_size)
    }

    pub fn winner(&self) -> Winner {
        if self.conversion_a > self.conversion_b {
            Winner::VariantA
        } else if self.conversion_b > self.conversion_a {
            Winner::VariantB
        } else {
            Winner::Tie
        }
    }

    /// Rough confidence heuristic: 50% baseline plus five points per
    /// percentage point of rate spread, capped at 95%.
    pub fn confidence(&self) -> f64 {
        let spread = (self.rate_a() - self.rate_b()).abs();
        (CONFIDENCE_BASE + spread * CONFIDENCE_PER_POINT).min(CONFIDENCE_CAP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn rates_and_winner_from_seed() {
        let tests = seed::seed_ab_tests();

        let first = &tests[0];
        assert!((first.rate_a() - 342.0 / 2500.0 * 100.0).abs() < 1e-9);
        assert_eq!(first.winner(), Winner::VariantA);

        let second = &tests[1];
        assert_eq!(second.winner(), Winner::VariantB);
    }

    #[test]
    fn confidence_scales_with_spread_and_caps() {
        let tests = seed::seed_ab_tests();
        let first = &tests[0];
        let spread = (first.rate_a() - first.rate_b()).abs();
        assert!((first.confidence() - (50.0 + spread * 5.0)).abs() < 1e-9);

        let lopsided = AbTest {
            conversion_a: 900,
            conversion_b: 0,
            sample_size: 1000,
            ..tests[0].clone()
        };
        assert_eq!(lopsided.confidence(), 95.0);
    }

    #[test]
    fn equal_conversions_tie() {
        let tests = seed::seed_ab_tests();
        let tied = AbTest {
            conversion_a: 100,
            conversion_b: 100,
            ..tests[0].clone()
        };
        assert_eq!(tied.winner(), Winner::Tie);
        assert_eq!(tied.confidence(), 50.0);
    }

    #[test]
    fn zero_sample_size_is_safe() {
        let tests = seed::seed_ab_tests();
        let empty = AbTest {
            sample_size: 0,
            ..tests[0].clone()
        };
        assert_eq!(empty.rate_a(), 0.0);
        assert_eq!(empty.confidence(), 50.0);
    }
}

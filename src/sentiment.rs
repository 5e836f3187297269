//! Canonical sentiment scale.
//!
//! The portal's pages historically mixed two scales: feedback sentiment was
//! signed `[-1, 1]` while call and customer sentiment was unsigned `[0, 1]`,
//! with `0.0` doubling as a "not yet measured" sentinel. This module fixes
//! one canonical representation: signed `[-1, 1]`, with "not measured"
//! expressed as `Option::None` at the field level. Unsigned values convert
//! at the seed boundary via `from_unsigned`.

use serde::{Deserialize, Serialize};

/// Bucket thresholds on the signed scale (feedback inbox filter).
const POSITIVE_ABOVE: f64 = 0.5;
const NEGATIVE_AT_OR_BELOW: f64 = -0.5;

/// Grade thresholds on the unsigned projection (call history view).
const HIGH_ABOVE_UNSIGNED: f64 = 0.7;
const MODERATE_ABOVE_UNSIGNED: f64 = 0.4;

/// A sentiment score on the canonical signed scale `[-1.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sentiment(f64);

impl Sentiment {
    /// Construct from a signed score, clamped into `[-1.0, 1.0]`.
    pub fn new(value: f64) -> Self {
        Sentiment(value.clamp(-1.0, 1.0))
    }

    /// Convert from the legacy unsigned `[0, 1]` scale: `2u - 1`.
    pub fn from_unsigned(value: f64) -> Self {
        Sentiment::new(2.0 * value - 1.0)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Project back onto the unsigned `[0, 1]` scale.
    pub fn as_unsigned(&self) -> f64 {
        (self.0 + 1.0) / 2.0
    }

    /// Signed percentage for display, e.g. `0.58` -> `58.0`.
    pub fn percent(&self) -> f64 {
        self.0 * 100.0
    }

    pub fn bucket(&self) -> SentimentBucket {
        if self.0 > POSITIVE_ABOVE {
            SentimentBucket::Positive
        } else if self.0 > NEGATIVE_AT_OR_BELOW {
            SentimentBucket::Neutral
        } else {
            SentimentBucket::Negative
        }
    }

    pub fn grade(&self) -> CallGrade {
        let unsigned = self.as_unsigned();
        if unsigned > HIGH_ABOVE_UNSIGNED {
            CallGrade::High
        } else if unsigned > MODERATE_ABOVE_UNSIGNED {
            CallGrade::Moderate
        } else {
            CallGrade::Low
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentBucket {
    Positive,
    Neutral,
    Negative,
}

impl SentimentBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentBucket::Positive => "positive",
            SentimentBucket::Neutral => "neutral",
            SentimentBucket::Negative => "negative",
        }
    }
}

/// Coarse quality band used by the call history view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallGrade {
    High,
    Moderate,
    Low,
}

impl CallGrade {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallGrade::High => "high",
            CallGrade::Moderate => "moderate",
            CallGrade::Low => "low",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range() {
        assert_eq!(Sentiment::new(3.0).value(), 1.0);
        assert_eq!(Sentiment::new(-3.0).value(), -1.0);
    }

    #[test]
    fn unsigned_round_trip() {
        let s = Sentiment::from_unsigned(0.92);
        assert!((s.value() - 0.84).abs() < 1e-9);
        assert!((s.as_unsigned() - 0.92).abs() < 1e-9);
    }

    #[test]
    fn bucket_boundaries() {
        assert_eq!(Sentiment::new(0.51).bucket(), SentimentBucket::Positive);
        assert_eq!(Sentiment::new(0.5).bucket(), SentimentBucket::Neutral);
        assert_eq!(Sentiment::new(-0.5).bucket(), SentimentBucket::Negative);
        assert_eq!(Sentiment::new(-0.49).bucket(), SentimentBucket::Neutral);
    }

    #[test]
    fn grade_uses_unsigned_thresholds() {
        // unsigned 0.92 -> high, 0.65 -> moderate, 0.3 -> low
        assert_eq!(Sentiment::from_unsigned(0.92).grade(), CallGrade::High);
        assert_eq!(Sentiment::from_unsigned(0.65).grade(), CallGrade::Moderate);
        assert_eq!(Sentiment::from_unsigned(0.3).grade(), CallGrade::Low);
    }
}

//! Aggregate-statistic primitives shared by the page summaries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PortalError;

/// Percentage rate with an explicit zero-total guard.
///
/// `rate(50, 200) == 25.0`; `rate(0, 0) == 0.0` rather than NaN, because the
/// campaign and call summaries are computed over possibly-empty record sets.
pub fn rate(value: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    f64::from(value) / f64::from(total) * 100.0
}

/// Arithmetic mean; `None` on empty input so callers decide how to render
/// "no data" instead of dividing by zero.
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0u32;
    for v in values {
        sum += v;
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(sum / f64::from(count))
    }
}

/// Call duration in whole seconds, displayed as `m:ss`.
///
/// The `m:ss` text form is the portal's canonical representation; parsing
/// then reformatting must not drift ("3:24" stays "3:24").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallDuration(u32);

impl CallDuration {
    pub fn from_secs(secs: u32) -> Self {
        CallDuration(secs)
    }

    pub fn zero() -> Self {
        CallDuration(0)
    }

    pub fn as_secs(&self) -> u32 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl FromStr for CallDuration {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (min_str, sec_str) = s
            .split_once(':')
            .ok_or_else(|| PortalError::InvalidDuration(s.to_string()))?;
        let min: u32 = min_str
            .parse()
            .map_err(|_| PortalError::InvalidDuration(s.to_string()))?;
        let sec: u32 = sec_str
            .parse()
            .map_err(|_| PortalError::InvalidDuration(s.to_string()))?;
        if sec >= 60 || sec_str.len() != 2 {
            return Err(PortalError::InvalidDuration(s.to_string()));
        }
        min.checked_mul(60)
            .and_then(|m| m.checked_add(sec))
            .map(CallDuration)
            .ok_or_else(|| PortalError::InvalidDuration(s.to_string()))
    }
}

impl fmt::Display for CallDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.0 / 60, self.0 % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_guards_zero_total() {
        assert_eq!(rate(0, 0), 0.0);
        assert_eq!(rate(50, 200), 25.0);
        assert_eq!(rate(834, 1247), 834.0 / 1247.0 * 100.0);
    }

    #[test]
    fn mean_of_empty_is_none() {
        assert_eq!(mean(std::iter::empty()), None);
        assert_eq!(mean([2.0, 4.0]), Some(3.0));
    }

    #[test]
    fn duration_round_trips() {
        let d: CallDuration = "3:24".parse().unwrap();
        assert_eq!(d.as_secs(), 204);
        assert_eq!(d.to_string(), "3:24");

        let d: CallDuration = "0:05".parse().unwrap();
        assert_eq!(d.to_string(), "0:05");
    }

    #[test]
    fn duration_rejects_malformed() {
        assert!("324".parse::<CallDuration>().is_err());
        assert!("3:61".parse::<CallDuration>().is_err());
        assert!("3:2".parse::<CallDuration>().is_err());
        assert!("a:bc".parse::<CallDuration>().is_err());
    }

    #[test]
    fn duration_rejects_minute_overflow() {
        // u32::MAX / 60 + 1 minutes would wrap the seconds count.
        assert!(matches!(
            "71582789:00".parse::<CallDuration>(),
            Err(PortalError::InvalidDuration(_))
        ));
        // Largest representable value still parses.
        let d: CallDuration = "71582788:15".parse().unwrap();
        assert_eq!(d.as_secs(), 71_582_788 * 60 + 15);
    }

    #[test]
    fn zero_duration() {
        let d: CallDuration = "0:00".parse().unwrap();
        assert!(d.is_zero());
        assert_eq!(CallDuration::zero(), d);
    }
}

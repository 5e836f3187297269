//! Alert rules and the triggered-event history.

use chrono::NaiveDate;

use crate::error::PortalError;
use crate::filter::matches_query;
use crate::roster;
use crate::types::{AlertEvent, AlertRule, Severity};

#[derive(Debug, Clone, Default)]
pub struct AlertRules {
    rules: Vec<AlertRule>,
}

impl AlertRules {
    pub fn new(rules: Vec<AlertRule>) -> Self {
        AlertRules { rules }
    }

    pub fn rules(&self) -> &[AlertRule] {
        &self.rules
    }

    pub fn toggle(&mut self, id: u64) -> Result<bool, PortalError> {
        roster::toggle_field(&mut self.rules, id, "alert rule", |r| &mut r.enabled)
    }

    pub fn enabled_count(&self) -> usize {
        self.rules.iter().filter(|r| r.enabled).count()
    }

    /// Rules whose most recent trigger fell on the given day.
    pub fn triggered_on(&self, day: NaiveDate) -> Vec<&AlertRule> {
        self.rules
            .iter()
            .filter(|r| r.last_triggered.map(|t| t.date()) == Some(day))
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct AlertHistory {
    events: Vec<AlertEvent>,
}

impl AlertHistory {
    pub fn new(events: Vec<AlertEvent>) -> Self {
        AlertHistory { events }
    }

    pub fn events(&self) -> &[AlertEvent] {
        &self.events
    }

    pub fn resolved_count(&self) -> usize {
        self.events.iter().filter(|e| e.resolved).count()
    }

    pub fn unresolved_count(&self) -> usize {
        self.events.len() - self.resolved_count()
    }

    /// Events matching an optional severity and a substring search over the
    /// alert name and message.
    pub fn filter(&self, severity: Option<Severity>, query: &str) -> Vec<&AlertEvent> {
        self.events
            .iter()
            .filter(|e| severity.map_or(true, |s| e.severity == s))
            .filter(|e| matches_query(&[e.alert.as_str(), e.message.as_str()], query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn toggle_flips_enabled() {
        let mut rules = AlertRules::new(seed::seed_alert_rules());
        assert_eq!(rules.enabled_count(), 4);
        assert!(!rules.toggle(1).unwrap());
        assert_eq!(rules.enabled_count(), 3);
        assert!(rules.toggle(5).unwrap());
        assert_eq!(rules.enabled_count(), 4);
    }

    #[test]
    fn triggered_on_matches_the_day_only() {
        let rules = AlertRules::new(seed::seed_alert_rules());
        let day = NaiveDate::from_ymd_opt(2025, 11, 9).unwrap();
        let hits = rules.triggered_on(day);
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|r| r.last_triggered.is_some()));

        // Never-triggered rules match no day.
        let empty = rules.triggered_on(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert!(empty.is_empty());
    }

    #[test]
    fn history_counts_resolution() {
        let history = AlertHistory::new(seed::seed_alert_history());
        assert_eq!(history.resolved_count() + history.unresolved_count(), 5);
    }

    #[test]
    fn history_filter_by_severity_and_search() {
        let history = AlertHistory::new(seed::seed_alert_history());
        let critical = history.filter(Some(Severity::Critical), "");
        assert!(critical.iter().all(|e| e.severity == Severity::Critical));
        assert!(!critical.is_empty());

        let none = history.filter(None, "zzz-no-match");
        assert!(none.is_empty());
    }
}

//! Consent rules and the compliance audit trail.

use serde::Serialize;

use crate::error::PortalError;
use crate::filter::matches_query;
use crate::roster;
use crate::types::{AuditEntry, AuditOutcome, ConsentRule};

#[derive(Debug, Clone, Default)]
pub struct ConsentRuleSet {
    rules: Vec<ConsentRule>,
}

impl ConsentRuleSet {
    pub fn new(rules: Vec<ConsentRule>) -> Self {
        ConsentRuleSet { rules }
    }

    pub fn rules(&self) -> &[ConsentRule] {
        &self.rules
    }

    /// Flip a rule's enabled flag, returning the new state.
    pub fn toggle(&mut self, id: u64) -> Result<bool, PortalError> {
        roster::toggle_field(&mut self.rules, id, "consent rule", |r| &mut r.enabled)
    }

    pub fn enabled_count(&self) -> usize {
        self.rules.iter().filter(|r| r.enabled).count()
    }
}

/// Counts of audit entries by outcome, for the compliance summary strip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditCounts {
    pub blocked: usize,
    pub allowed: usize,
    pub flagged: usize,
}

#[derive(Debug, Clone, Default)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
}

impl AuditLog {
    pub fn new(entries: Vec<AuditEntry>) -> Self {
        AuditLog { entries }
    }

    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    pub fn counts(&self) -> AuditCounts {
        let mut counts = AuditCounts::default();
        for entry in &self.entries {
            match entry.outcome {
                AuditOutcome::Blocked => counts.blocked += 1,
                AuditOutcome::Allowed => counts.allowed += 1,
                AuditOutcome::Flagged => counts.flagged += 1,
            }
        }
        counts
    }

    /// Entries matching an optional outcome and a substring search over the
    /// contact and action fields.
    pub fn filter(&self, outcome: Option<AuditOutcome>, query: &str) -> Vec<&AuditEntry> {
        self.entries
            .iter()
            .filter(|e| outcome.map_or(true, |o| e.outcome == o))
            .filter(|e| matches_query(&[e.contact.as_str(), e.action.as_str()], query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn toggle_is_an_involution() {
        let mut rules = ConsentRuleSet::new(seed::seed_consent_rules());
        let before = rules.enabled_count();
        assert!(!rules.toggle(1).unwrap());
        assert_eq!(rules.enabled_count(), before - 1);
        assert!(rules.toggle(1).unwrap());
        assert_eq!(rules.enabled_count(), before);
    }

    #[test]
    fn toggle_unknown_rule_errors() {
        let mut rules = ConsentRuleSet::new(seed::seed_consent_rules());
        assert!(rules.toggle(99).is_err());
    }

    #[test]
    fn audit_counts_by_outcome() {
        let log = AuditLog::new(seed::seed_audit_log());
        let counts = log.counts();
        assert_eq!(counts.blocked, 2);
        assert_eq!(counts.allowed, 2);
        assert_eq!(counts.flagged, 1);
    }

    #[test]
    fn audit_filter_combines_outcome_and_search() {
        let log = AuditLog::new(seed::seed_audit_log());
        let blocked = log.filter(Some(AuditOutcome::Blocked), "");
        assert_eq!(blocked.len(), 2);
        assert!(blocked.iter().all(|e| e.outcome == AuditOutcome::Blocked));

        let none = log.filter(Some(AuditOutcome::Flagged), "no-such-contact");
        assert!(none.is_empty());
    }
}

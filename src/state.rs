//! Shared application state: every dataset behind its own mutex so page
//! handlers can mutate independently.

use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;

use crate::alerts::{AlertHistory, AlertRules};
use crate::calls::CallLog;
use crate::campaigns::CampaignBoard;
use crate::config::PortalConfig;
use crate::consent::{AuditLog, ConsentRuleSet};
use crate::customers::CustomerBook;
use crate::dnc::DncList;
use crate::error::PortalError;
use crate::feedback::FeedbackInbox;
use crate::orchestrator::RoutingTable;
use crate::scripts::ScriptLibrary;
use crate::seed;
use crate::types::{AbTest, SystemComponent};

pub struct PortalState {
    pub customers: Mutex<CustomerBook>,
    pub calls: Mutex<CallLog>,
    pub feedback: Mutex<FeedbackInbox>,
    pub campaigns: Mutex<CampaignBoard>,
    pub consent_rules: Mutex<ConsentRuleSet>,
    pub audit_log: Mutex<AuditLog>,
    pub dnc: Mutex<DncList>,
    pub alert_rules: Mutex<AlertRules>,
    pub alert_history: Mutex<AlertHistory>,
    pub scripts: Mutex<ScriptLibrary>,
    pub ab_tests: Mutex<Vec<AbTest>>,
    pub routing: Mutex<RoutingTable>,
    pub system_components: Mutex<Vec<SystemComponent>>,
    pub config: Mutex<PortalConfig>,
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, PortalError> {
    mutex.lock().map_err(|_| PortalError::LockPoisoned)
}

impl PortalState {
    /// State pre-loaded with the demo datasets.
    pub fn with_seed_data() -> Self {
        PortalState {
            customers: Mutex::new(CustomerBook::new(seed::seed_customers())),
            calls: Mutex::new(CallLog::new(seed::seed_calls())),
            feedback: Mutex::new(FeedbackInbox::new(seed::seed_feedback())),
            campaigns: Mutex::new(CampaignBoard::new(seed::seed_campaigns())),
            consent_rules: Mutex::new(ConsentRuleSet::new(seed::seed_consent_rules())),
            audit_log: Mutex::new(AuditLog::new(seed::seed_audit_log())),
            dnc: Mutex::new(DncList::new(seed::seed_dnc())),
            alert_rules: Mutex::new(AlertRules::new(seed::seed_alert_rules())),
            alert_history: Mutex::new(AlertHistory::new(seed::seed_alert_history())),
            scripts: Mutex::new(ScriptLibrary::new(seed::seed_scripts())),
            ab_tests: Mutex::new(seed::seed_ab_tests()),
            routing: Mutex::new(RoutingTable::new(seed::seed_routing_rules())),
            system_components: Mutex::new(seed::seed_system_components()),
            config: Mutex::new(PortalConfig::default()),
        }
    }

    pub fn empty() -> Self {
        PortalState {
            customers: Mutex::new(CustomerBook::default()),
            calls: Mutex::new(CallLog::default()),
            feedback: Mutex::new(FeedbackInbox::default()),
            campaigns: Mutex::new(CampaignBoard::default()),
            consent_rules: Mutex::new(ConsentRuleSet::default()),
            audit_log: Mutex::new(AuditLog::default()),
            dnc: Mutex::new(DncList::default()),
            alert_rules: Mutex::new(AlertRules::default()),
            alert_history: Mutex::new(AlertHistory::default()),
            scripts: Mutex::new(ScriptLibrary::default()),
            ab_tests: Mutex::new(Vec::new()),
            routing: Mutex::new(RoutingTable::default()),
            system_components: Mutex::new(Vec::new()),
            config: Mutex::new(PortalConfig::default()),
        }
    }

    pub fn toggle_consent_rule(&self, id: u64) -> Result<bool, PortalError> {
        lock(&self.consent_rules)?.toggle(id)
    }

    pub fn toggle_alert(&self, id: u64) -> Result<bool, PortalError> {
        lock(&self.alert_rules)?.toggle(id)
    }

    pub fn toggle_routing_rule(&self, id: u64) -> Result<bool, PortalError> {
        lock(&self.routing)?.toggle(id)
    }

    pub fn add_dnc_contact(
        &self,
        contact: &str,
        reason: &str,
        today: NaiveDate,
    ) -> Result<u64, PortalError> {
        let mut dnc = lock(&self.dnc)?;
        let record = dnc.add_contact(contact, reason, today)?;
        Ok(record.id)
    }

    pub fn resolve_feedback(&self, id: u64) -> Result<(), PortalError> {
        lock(&self.feedback)?.resolve(id)
    }

    pub fn duplicate_campaign(&self, id: u64, today: NaiveDate) -> Result<u64, PortalError> {
        lock(&self.campaigns)?.duplicate(id, today)
    }

    pub fn delete_campaign(&self, id: u64) -> Result<(), PortalError> {
        lock(&self.campaigns)?.delete(id).map(|_| ())
    }

    pub fn duplicate_script(&self, id: u64) -> Result<u64, PortalError> {
        lock(&self.scripts)?.duplicate(id)
    }

    pub fn delete_script(&self, id: u64) -> Result<(), PortalError> {
        lock(&self.scripts)?.delete(id).map(|_| ())
    }

    pub fn archive_script(&self, id: u64) -> Result<(), PortalError> {
        lock(&self.scripts)?.archive(id)
    }

    pub fn update_config(
        &self,
        update: impl FnOnce(&mut PortalConfig),
    ) -> Result<PortalConfig, PortalError> {
        let mut config = lock(&self.config)?;
        update(&mut config);
        Ok(config.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_state_exposes_every_dataset() {
        let state = PortalState::with_seed_data();
        assert_eq!(state.customers.lock().unwrap().len(), 5);
        assert_eq!(state.calls.lock().unwrap().calls().len(), 6);
        assert_eq!(state.ab_tests.lock().unwrap().len(), 2);
    }

    #[test]
    fn mutations_go_through_the_state() {
        let state = PortalState::with_seed_data();
        assert!(!state.toggle_alert(1).unwrap());
        assert!(state.toggle_alert(1).unwrap());
        assert!(state.toggle_routing_rule(4).unwrap());

        let id = state
            .add_dnc_contact("blocked@example.com", "Customer request",
                NaiveDate::from_ymd_opt(2025, 11, 10).unwrap())
            .unwrap();
        assert_eq!(id, 4);

        state.resolve_feedback(4).unwrap();
        assert!(state.resolve_feedback(99).is_err());
    }

    #[test]
    fn empty_state_starts_blank() {
        let state = PortalState::empty();
        assert!(state.customers.lock().unwrap().is_empty());
        assert!(state.toggle_consent_rule(1).is_err());
    }
}

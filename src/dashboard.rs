//! Aggregated overview assembled from every dataset in one pass.

use serde::Serialize;

use crate::calls::CallLogSummary;
use crate::campaigns::CampaignTotals;
use crate::consent::AuditCounts;
use crate::customers::SegmentCounts;
use crate::error::PortalError;
use crate::feedback::FeedbackAnalytics;
use crate::orchestrator::{self, RoutingTotals, SystemHealth};
use crate::state::PortalState;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub total_customers: usize,
    pub segments: SegmentCounts,
    pub calls: CallLogSummary,
    pub campaigns: CampaignTotals,
    pub feedback: FeedbackAnalytics,
    pub audit: AuditCounts,
    pub routing: RoutingTotals,
    pub system: SystemHealth,
    pub active_dnc: usize,
    pub enabled_alerts: usize,
    pub unresolved_alerts: usize,
    pub enabled_consent_rules: usize,
}

/// Build the overview. Each dataset lock is taken briefly and released
/// before the next, so a poisoned or contended page cannot wedge the rest.
pub fn snapshot(state: &PortalState) -> Result<DashboardSnapshot, PortalError> {
    let (total_customers, segments) = {
        let customers = state.customers.lock().map_err(|_| PortalError::LockPoisoned)?;
        (customers.len(), customers.segment_counts())
    };
    let calls = state
        .calls
        .lock()
        .map_err(|_| PortalError::LockPoisoned)?
        .summary();
    let campaigns = state
        .campaigns
        .lock()
        .map_err(|_| PortalError::LockPoisoned)?
        .totals();
    let feedback = state
        .feedback
        .lock()
        .map_err(|_| PortalError::LockPoisoned)?
        .analytics();
    let audit = state
        .audit_log
        .lock()
        .map_err(|_| PortalError::LockPoisoned)?
        .counts();
    let routing = state
        .routing
        .lock()
        .map_err(|_| PortalError::LockPoisoned)?
        .totals();
    let system = orchestrator::system_health(
        &state
            .system_components
            .lock()
            .map_err(|_| PortalError::LockPoisoned)?,
    );
    let active_dnc = state
        .dnc
        .lock()
        .map_err(|_| PortalError::LockPoisoned)?
        .active_count();
    let enabled_alerts = state
        .alert_rules
        .lock()
        .map_err(|_| PortalError::LockPoisoned)?
        .enabled_count();
    let unresolved_alerts = state
        .alert_history
        .lock()
        .map_err(|_| PortalError::LockPoisoned)?
        .unresolved_count();
    let enabled_consent_rules = state
        .consent_rules
        .lock()
        .map_err(|_| PortalError::LockPoisoned)?
        .enabled_count();

    Ok(DashboardSnapshot {
        total_customers,
        segments,
        calls,
        campaigns,
        feedback,
        audit,
        routing,
        system,
        active_dnc,
        enabled_alerts,
        unresolved_alerts,
        enabled_consent_rules,
    })
}

//! Outreach orchestrator: channel-routing rules and the system component
//! health rollup.

use serde::Serialize;

use crate::error::PortalError;
use crate::roster;
use crate::stats::mean;
use crate::types::{ComponentStatus, RoutingRule, SystemComponent};

/// Summary strip over the routing table. The success-rate average is over
/// every rule, enabled or not, matching how the rules are reported.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingTotals {
    pub active: usize,
    pub total: usize,
    pub conversions: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_success_rate: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct RoutingTable {
    rules: Vec<RoutingRule>,
}

impl RoutingTable {
    pub fn new(rules: Vec<RoutingRule>) -> Self {
        RoutingTable { rules }
    }

    pub fn rules(&self) -> &[RoutingRule] {
        &self.rules
    }

    pub fn toggle(&mut self, id: u64) -> Result<bool, PortalError> {
        roster::toggle_field(&mut self.rules, id, "routing rule", |r| &mut r.enabled)
    }

    pub fn totals(&self) -> RoutingTotals {
        RoutingTotals {
            active: self.rules.iter().filter(|r| r.enabled).count(),
            total: self.rules.len(),
            conversions: self.rules.iter().map(|r| r.conversions).sum(),
            avg_success_rate: mean(self.rules.iter().map(|r| r.success_rate)),
        }
    }
}

/// Component health rollup for the status page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemHealth {
    pub healthy: usize,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_uptime: Option<f64>,
}

pub fn system_health(components: &[SystemComponent]) -> SystemHealth {
    SystemHealth {
        healthy: components
            .iter()
            .filter(|c| c.status == ComponentStatus::Healthy)
            .count(),
        total: components.len(),
        avg_uptime: mean(components.iter().map(|c| c.uptime)),
    }
}

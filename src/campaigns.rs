//! Email campaign board: funnel rates, cross-campaign totals, and the
//! clone-to-draft operation.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::PortalError;
use crate::roster;
use crate::stats::rate;
use crate::types::{Campaign, CampaignStatus};

/// Board-level totals across every campaign. Rates are computed over the
/// summed funnel, not averaged per campaign.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignTotals {
    pub campaigns: usize,
    pub active: usize,
    pub sent: u32,
    pub opened: u32,
    pub clicked: u32,
    pub responses: u32,
    pub open_rate: f64,
    pub click_rate: f64,
    pub response_rate: f64,
}

#[derive(Debug, Clone, Default)]
pub struct CampaignBoard {
    campaigns: Vec<Campaign>,
}

impl CampaignBoard {
    pub fn new(campaigns: Vec<Campaign>) -> Self {
        CampaignBoard { campaigns }
    }

    pub fn campaigns(&self) -> &[Campaign] {
        &self.campaigns
    }

    pub fn add(&mut self, mut campaign: Campaign) -> u64 {
        campaign.id = roster::next_id(&self.campaigns);
        let id = campaign.id;
        self.campaigns.push(campaign);
        id
    }

    /// Clone a campaign as a fresh Draft: zeroed funnel, no send history.
    /// A copy that kept live counters would misreport its rates.
    pub fn duplicate(&mut self, id: u64, today: NaiveDate) -> Result<u64, PortalError> {
        let source = roster::find(&self.campaigns, id).ok_or(PortalError::NotFound {
            entity: "campaign",
            id,
        })?;

        let copy = Campaign {
            id: roster::next_id(&self.campaigns),
            name: format!("{} (Copy)", source.name),
            status: CampaignStatus::Draft,
            sent: 0,
            opened: 0,
            clicked: 0,
            responses: 0,
            created: today,
            last_sent: None,
            scheduled_for: None,
            template: source.template.clone(),
        };
        let new_id = copy.id;
        self.campaigns.push(copy);
        Ok(new_id)
    }

    pub fn delete(&mut self, id: u64) -> Result<Campaign, PortalError> {
        roster::remove_record(&mut self.campaigns, id, "campaign")
    }

    pub fn totals(&self) -> CampaignTotals {
        let sent: u32 = self.campaigns.iter().map(|c| c.sent).sum();
        let opened: u32 = self.campaigns.iter().map(|c| c.opened).sum();
        let clicked: u32 = self.campaigns.iter().map(|c| c.clicked).sum();
        let responses: u32 = self.campaigns.iter().map(|c| c.responses).sum();

        CampaignTotals {
            campaigns: self.campaigns.len(),
            active: self
                .campaigns
                .iter()
                .filter(|c| c.status == CampaignStatus::Active)
                .count(),
            sent,
            opened,
            clicked,
            responses,
            open_rate: rate(opened, sent),
            click_rate: rate(clicked, sent),
            response_rate: rate(responses, sent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn board() -> CampaignBoard {
        CampaignBoard::new(seed::seed_campaigns())
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
    }

    #[test]
    fn totals_sum_the_funnel() {
        let totals = board().totals();
        assert_eq!(totals.campaigns, 4);
        assert_eq!(totals.active, 2);
        assert_eq!(totals.sent, 1247 + 423 + 89);
        assert!((totals.open_rate - rate(834 + 398 + 45, totals.sent)).abs() < 1e-9);
    }

    #[test]
    fn empty_board_rates_are_zero() {
        let totals = CampaignBoard::default().totals();
        assert_eq!(totals.open_rate, 0.0);
        assert_eq!(totals.response_rate, 0.0);
    }

    #[test]
    fn duplicate_resets_to_draft() {
        let mut board = board();
        let new_id = board.duplicate(1, today()).unwrap();
        assert_eq!(new_id, 5);

        let copy = roster::find(board.campaigns(), new_id).unwrap();
        assert_eq!(copy.status, CampaignStatus::Draft);
        assert_eq!(copy.sent, 0);
        assert_eq!(copy.opened, 0);
        assert!(copy.name.ends_with("(Copy)"));
        assert!(copy.last_sent.is_none());
    }

    #[test]
    fn duplicate_missing_campaign_errors() {
        let mut board = board();
        assert!(board.duplicate(42, today()).is_err());
        assert_eq!(board.campaigns().len(), 4);
    }

    #[test]
    fn add_assigns_max_plus_one() {
        let mut board = board();
        board.delete(2).unwrap();
        let id = board.add(Campaign {
            id: 0,
            name: "Winter Re-engagement".into(),
            status: CampaignStatus::Draft,
            sent: 0,
            opened: 0,
            clicked: 0,
            responses: 0,
            created: today(),
            last_sent: None,
            scheduled_for: None,
            template: String::new(),
        });
        // ids 1,3,4 remain; next is 5, not the freed 2
        assert_eq!(id, 5);
    }
}

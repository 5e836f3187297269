//! Feedback inbox: filtering, selection, and the analytics rollup.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::PortalError;
use crate::filter::{filter_records, FilterCriteria, HasSentiment, HasStatus, Searchable};
use crate::roster;
use crate::sentiment::Sentiment;
use crate::stats::{mean, rate};
use crate::types::{Channel, FeedbackItem, FeedbackStatus};

impl Searchable for FeedbackItem {
    fn search_text(&self) -> Vec<&str> {
        let mut fields = vec![self.buyer.as_str(), self.product.as_str()];
        if let Some(message) = &self.message {
            fields.push(message);
        }
        fields
    }
}

impl HasStatus<FeedbackStatus> for FeedbackItem {
    fn status(&self) -> FeedbackStatus {
        self.status
    }
}

impl HasSentiment for FeedbackItem {
    fn sentiment(&self) -> Option<Sentiment> {
        Some(self.sentiment)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
    /// Count scaled against the most frequent tag, 0..=100.
    pub share: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackAnalytics {
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    pub resolved_share: f64,
    pub escalated: usize,
    pub phone: usize,
    pub email: usize,
    pub sms: usize,
    pub top_tags: Vec<TagCount>,
}

#[derive(Debug, Clone, Default)]
pub struct FeedbackInbox {
    items: Vec<FeedbackItem>,
    selected: Option<u64>,
}

impl FeedbackInbox {
    pub fn new(items: Vec<FeedbackItem>) -> Self {
        FeedbackInbox {
            items,
            selected: None,
        }
    }

    pub fn items(&self) -> &[FeedbackItem] {
        &self.items
    }

    pub fn selected(&self) -> Option<&FeedbackItem> {
        self.selected.and_then(|id| roster::find(&self.items, id))
    }

    pub fn select(&mut self, id: u64) -> Result<(), PortalError> {
        roster::find(&self.items, id).ok_or(PortalError::NotFound {
            entity: "feedback item",
            id,
        })?;
        self.selected = Some(id);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn filter(&self, criteria: &FilterCriteria<FeedbackStatus>) -> Vec<&FeedbackItem> {
        filter_records(&self.items, criteria)
    }

    /// Mark an item resolved.
    pub fn resolve(&mut self, id: u64) -> Result<(), PortalError> {
        let item = roster::find_mut(&mut self.items, id).ok_or(PortalError::NotFound {
            entity: "feedback item",
            id,
        })?;
        item.status = FeedbackStatus::Resolved;
        Ok(())
    }

    pub fn analytics(&self) -> FeedbackAnalytics {
        let total = self.items.len();
        let resolved = self
            .items
            .iter()
            .filter(|i| i.status == FeedbackStatus::Resolved)
            .count();
        let escalated = self
            .items
            .iter()
            .filter(|i| i.status == FeedbackStatus::Escalated)
            .count();

        let mut phone = 0;
        let mut email = 0;
        let mut sms = 0;
        for item in &self.items {
            match item.channel {
                Channel::Phone => phone += 1,
                Channel::Email => email += 1,
                Channel::Sms => sms += 1,
            }
        }

        FeedbackAnalytics {
            total,
            average_rating: mean(self.items.iter().map(|i| f64::from(i.rating))),
            resolved_share: rate(resolved as u32, total as u32),
            escalated,
            phone,
            email,
            sms,
            top_tags: self.top_tags(),
        }
    }

    /// Tag frequency, descending, with each count scaled against the max.
    fn top_tags(&self) -> Vec<TagCount> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for item in &self.items {
            for tag in &item.tags {
                *counts.entry(tag.as_str()).or_default() += 1;
            }
        }

        let max = counts.values().copied().max().unwrap_or(0);
        let mut tags: Vec<TagCount> = counts
            .into_iter()
            .map(|(tag, count)| TagCount {
                tag: tag.to_string(),
                count,
                share: rate(count as u32, max as u32),
            })
            .collect();
        tags.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag)));
        tags
    }
}

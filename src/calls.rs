//! Call history: filtering with date-range presets and the completed-call
//! summary statistics (success rate, average duration, average sentiment).

use chrono::NaiveDate;
use serde::Serialize;

use crate::filter::{
    filter_records, DateRange, FilterCriteria, HasSentiment, HasStatus, Searchable,
};
use crate::sentiment::Sentiment;
use crate::stats::{mean, rate, CallDuration};
use crate::types::{CallOutcome, CallRecord};

impl Searchable for CallRecord {
    fn search_text(&self) -> Vec<&str> {
        vec![&self.customer, &self.phone]
    }
}

impl HasStatus<CallOutcome> for CallRecord {
    fn status(&self) -> CallOutcome {
        self.status
    }
}

impl HasSentiment for CallRecord {
    fn sentiment(&self) -> Option<Sentiment> {
        self.sentiment
    }
}

/// Headline numbers for the call history view. Duration and sentiment
/// averages cover completed calls only; with no completed calls they are
/// `None` rather than a division by zero.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallLogSummary {
    pub total: usize,
    pub completed: usize,
    pub success_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_duration: Option<CallDuration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_sentiment: Option<Sentiment>,
}

#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Vec<CallRecord>,
}

impl CallLog {
    pub fn new(calls: Vec<CallRecord>) -> Self {
        CallLog { calls }
    }

    pub fn calls(&self) -> &[CallRecord] {
        &self.calls
    }

    /// Apply search/status/sentiment criteria plus a relative date range.
    pub fn filter(
        &self,
        criteria: &FilterCriteria<CallOutcome>,
        range: DateRange,
        today: NaiveDate,
    ) -> Vec<&CallRecord> {
        filter_records(&self.calls, criteria)
            .into_iter()
            .filter(|c| range.contains(c.date.date(), today))
            .collect()
    }

    pub fn summary(&self) -> CallLogSummary {
        let completed: Vec<&CallRecord> = self
            .calls
            .iter()
            .filter(|c| c.status == CallOutcome::Completed)
            .collect();

        let avg_duration = mean(
            completed
                .iter()
                .map(|c| f64::from(c.duration.as_secs())),
        )
        .map(|secs| CallDuration::from_secs(secs.round() as u32));

        let avg_sentiment = mean(
            completed
                .iter()
                .filter_map(|c| c.sentiment.map(|s| s.value())),
        )
        .map(Sentiment::new);

        CallLogSummary {
            total: self.calls.len(),
            completed: completed.len(),
            success_rate: rate(completed.len() as u32, self.calls.len() as u32),
            avg_duration,
            avg_sentiment,
        }
    }
}

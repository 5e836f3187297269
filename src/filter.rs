//! Filter predicate evaluation over portal datasets.
//!
//! A criteria set combines free-text search, a status filter, and a
//! sentiment-bucket filter; active predicates are ANDed. Filtering borrows
//! from the input list — the output is always a subset, never fabricated
//! records — and the default criteria are the identity filter.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::sentiment::{Sentiment, SentimentBucket};

/// Fields a free-text query matches for this record type.
pub trait Searchable {
    fn search_text(&self) -> Vec<&str>;
}

/// The status dimension a page filters on (call outcome, feedback status,
/// customer segment, ...).
pub trait HasStatus<S> {
    fn status(&self) -> S;
}

pub trait HasSentiment {
    fn sentiment(&self) -> Option<Sentiment>;
}

/// Status dropdown: "all" or one selected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter<S> {
    Any,
    Only(S),
}

impl<S> Default for StatusFilter<S> {
    fn default() -> Self {
        StatusFilter::Any
    }
}

impl<S: PartialEq> StatusFilter<S> {
    pub fn matches(&self, status: &S) -> bool {
        match self {
            StatusFilter::Any => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }
}

/// Sentiment dropdown: "all" or one bucket. A record with no score fails
/// any bucket filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SentimentFilter {
    #[default]
    Any,
    Bucket(SentimentBucket),
}

impl SentimentFilter {
    pub fn matches(&self, sentiment: Option<Sentiment>) -> bool {
        match self {
            SentimentFilter::Any => true,
            SentimentFilter::Bucket(bucket) => {
                sentiment.map(|s| s.bucket() == *bucket).unwrap_or(false)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct FilterCriteria<S> {
    pub query: String,
    pub status: StatusFilter<S>,
    pub sentiment: SentimentFilter,
}

impl<S> Default for FilterCriteria<S> {
    fn default() -> Self {
        FilterCriteria {
            query: String::new(),
            status: StatusFilter::Any,
            sentiment: SentimentFilter::Any,
        }
    }
}

impl<S> FilterCriteria<S> {
    pub fn with_query(query: impl Into<String>) -> Self {
        FilterCriteria {
            query: query.into(),
            ..FilterCriteria::default()
        }
    }
}

/// Case-insensitive substring match; an empty query matches everything.
pub fn matches_query(fields: &[&str], query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    fields.iter().any(|f| f.to_lowercase().contains(&query))
}

/// Evaluate the criteria against every record, returning the matching subset.
pub fn filter_records<'a, T, S>(records: &'a [T], criteria: &FilterCriteria<S>) -> Vec<&'a T>
where
    T: Searchable + HasStatus<S> + HasSentiment,
    S: PartialEq,
{
    records
        .iter()
        .filter(|r| matches_query(&r.search_text(), &criteria.query))
        .filter(|r| criteria.status.matches(&r.status()))
        .filter(|r| criteria.sentiment.matches(r.sentiment()))
        .collect()
}

/// Relative date-range presets for history views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateRange {
    #[serde(rename = "today")]
    Today,
    #[default]
    #[serde(rename = "7days")]
    Last7Days,
    #[serde(rename = "30days")]
    Last30Days,
    #[serde(rename = "all")]
    AllTime,
}

impl DateRange {
    /// Whether `date` falls inside the range ending at `today` (inclusive).
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        if date > today {
            return false;
        }
        let days_back = match self {
            DateRange::Today => 0,
            DateRange::Last7Days => 6,
            DateRange::Last30Days => 29,
            DateRange::AllTime => return true,
        };
        match today.checked_sub_days(Days::new(days_back)) {
            Some(earliest) => date >= earliest,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        name: String,
        note: String,
        flag: char,
        score: Option<Sentiment>,
    }

    impl Searchable for Item {
        fn search_text(&self) -> Vec<&str> {
            vec![&self.name, &self.note]
        }
    }

    impl HasStatus<char> for Item {
        fn status(&self) -> char {
            self.flag
        }
    }

    impl HasSentiment for Item {
        fn sentiment(&self) -> Option<Sentiment> {
            self.score
        }
    }

    fn item(name: &str, note: &str, flag: char, score: Option<f64>) -> Item {
        Item {
            name: name.into(),
            note: note.into(),
            flag,
            score: score.map(Sentiment::new),
        }
    }

    fn dataset() -> Vec<Item> {
        vec![
            item("Fatima Rahman", "premium buyer", 'a', Some(0.9)),
            item("Ayesha Khan", "assembly issue", 'b', Some(0.1)),
            item("Nusrat Jahan", "new signup", 'a', None),
        ]
    }

    #[test]
    fn default_criteria_are_identity() {
        let data = dataset();
        let out = filter_records(&data, &FilterCriteria::<char>::default());
        assert_eq!(out.len(), data.len());
    }

    #[test]
    fn output_is_subset_of_input() {
        let data = dataset();
        let criteria = FilterCriteria {
            query: "a".into(),
            status: StatusFilter::Only('a'),
            sentiment: SentimentFilter::Any,
        };
        let out = filter_records(&data, &criteria);
        assert!(out.len() <= data.len());
        for matched in out {
            assert!(data.iter().any(|d| std::ptr::eq(d, matched)));
        }
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let data = dataset();
        let out = filter_records(&data, &FilterCriteria::<char>::with_query("PREMIUM"));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Fatima Rahman");
    }

    #[test]
    fn predicates_are_anded() {
        let data = dataset();
        let criteria = FilterCriteria {
            query: "a".into(),
            status: StatusFilter::Only('a'),
            sentiment: SentimentFilter::Bucket(SentimentBucket::Positive),
        };
        let out = filter_records(&data, &criteria);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Fatima Rahman");
    }

    #[test]
    fn unscored_records_fail_bucket_filters() {
        let data = dataset();
        let criteria = FilterCriteria {
            query: String::new(),
            status: StatusFilter::<char>::Any,
            sentiment: SentimentFilter::Bucket(SentimentBucket::Neutral),
        };
        let out = filter_records(&data, &criteria);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Ayesha Khan");
    }

    #[test]
    fn date_range_presets() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();

        assert!(DateRange::Today.contains(today, today));
        assert!(!DateRange::Today.contains(d(2025, 1, 9), today));
        assert!(DateRange::Last7Days.contains(d(2025, 1, 4), today));
        assert!(!DateRange::Last7Days.contains(d(2025, 1, 3), today));
        assert!(DateRange::Last30Days.contains(d(2024, 12, 12), today));
        assert!(DateRange::AllTime.contains(d(2020, 6, 1), today));
        // future dates never match
        assert!(!DateRange::AllTime.contains(d(2025, 2, 1), today));
    }
}

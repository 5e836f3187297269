//! Customer directory: search, segment filtering, and tier counts.

use serde::Serialize;

use crate::filter::{filter_records, FilterCriteria, HasSentiment, HasStatus, Searchable};
use crate::sentiment::Sentiment;
use crate::types::{Customer, Segment};

impl Searchable for Customer {
    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.email, &self.phone]
    }
}

impl HasStatus<Segment> for Customer {
    fn status(&self) -> Segment {
        self.segment
    }
}

impl HasSentiment for Customer {
    fn sentiment(&self) -> Option<Sentiment> {
        self.sentiment
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentCounts {
    pub vip: usize,
    pub regular: usize,
    pub new: usize,
}

#[derive(Debug, Clone, Default)]
pub struct CustomerBook {
    customers: Vec<Customer>,
}

impl CustomerBook {
    pub fn new(customers: Vec<Customer>) -> Self {
        CustomerBook { customers }
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn filter(&self, criteria: &FilterCriteria<Segment>) -> Vec<&Customer> {
        filter_records(&self.customers, criteria)
    }

    pub fn segment_counts(&self) -> SegmentCounts {
        let mut counts = SegmentCounts::default();
        for customer in &self.customers {
            match customer.segment {
                Segment::Vip => counts.vip += 1,
                Segment::Regular => counts.regular += 1,
                Segment::New => counts.new += 1,
            }
        }
        counts
    }
}

//! Do-not-contact registry. Entries are classified as phone or email from
//! the raw contact string; anything that matches neither is rejected.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::PortalError;
use crate::roster;
use crate::types::{ContactType, DncRecord, DncStatus};

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\+?1?[-.\s]?\d{3}[-.\s]?\d{3}[-.\s]?\d{4}$")
            .expect("phone pattern is valid")
    })
}

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

pub fn is_email(contact: &str) -> bool {
    email_re().is_match(contact)
}

/// Classify a raw contact string, or `None` if it is neither a phone
/// number nor an email address.
pub fn classify_contact(contact: &str) -> Option<ContactType> {
    if phone_re().is_match(contact) {
        Some(ContactType::Phone)
    } else if is_email(contact) {
        Some(ContactType::Email)
    } else {
        None
    }
}

#[derive(Debug, Clone, Default)]
pub struct DncList {
    records: Vec<DncRecord>,
}

impl DncList {
    pub fn new(records: Vec<DncRecord>) -> Self {
        DncList { records }
    }

    pub fn records(&self) -> &[DncRecord] {
        &self.records
    }

    pub fn active_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.status == DncStatus::Active)
            .count()
    }

    /// Validate and register a new do-not-contact entry.
    pub fn add_contact(
        &mut self,
        contact: &str,
        reason: &str,
        today: NaiveDate,
    ) -> Result<&DncRecord, PortalError> {
        let contact = contact.trim();
        let reason = reason.trim();
        if contact.is_empty() {
            return Err(PortalError::MissingField("contact"));
        }
        if reason.is_empty() {
            return Err(PortalError::MissingField("reason"));
        }
        let contact_type =
            classify_contact(contact).ok_or_else(|| PortalError::InvalidContact(contact.into()))?;

        log::info!("Adding {} to the do-not-contact list", contact);
        let record = DncRecord {
            id: roster::next_id(&self.records),
            contact: contact.to_string(),
            contact_type,
            status: DncStatus::Active,
            added_date: today,
            reason: reason.to_string(),
        };
        self.records.push(record);
        Ok(self.records.last().expect("record was just pushed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 10).unwrap()
    }

    #[test]
    fn classifies_phone_formats() {
        assert_eq!(classify_contact("+1-555-123-4567"), Some(ContactType::Phone));
        assert_eq!(classify_contact("555.123.4567"), Some(ContactType::Phone));
        assert_eq!(classify_contact("5551234567"), Some(ContactType::Phone));
    }

    #[test]
    fn classifies_email() {
        assert_eq!(
            classify_contact("someone@example.com"),
            Some(ContactType::Email)
        );
        assert_eq!(classify_contact("not a contact"), None);
        assert_eq!(classify_contact("missing@domain"), None);
    }

    #[test]
    fn add_contact_validates_and_assigns_id() {
        let mut list = DncList::new(seed::seed_dnc());
        let record = list
            .add_contact("  blocked@example.com ", "Customer request", today())
            .unwrap();
        assert_eq!(record.id, 4);
        assert_eq!(record.contact, "blocked@example.com");
        assert_eq!(record.contact_type, ContactType::Email);
        assert_eq!(record.status, DncStatus::Active);

        let phone = list
            .add_contact("+1-555-987-6543", "Wrong number", today())
            .unwrap();
        assert_eq!(phone.id, 5);
        assert_eq!(phone.contact_type, ContactType::Phone);
    }

    #[test]
    fn add_contact_rejects_bad_input() {
        let mut list = DncList::new(seed::seed_dnc());
        assert!(matches!(
            list.add_contact("", "reason", today()),
            Err(PortalError::MissingField("contact"))
        ));
        assert!(matches!(
            list.add_contact("x@y.com", "  ", today()),
            Err(PortalError::MissingField("reason"))
        ));
        assert!(matches!(
            list.add_contact("garbage", "reason", today()),
            Err(PortalError::InvalidContact(_))
        ));
        assert_eq!(list.records().len(), 3);
    }

    #[test]
    fn active_count_skips_expired() {
        let mut list = DncList::new(seed::seed_dnc());
        assert_eq!(list.active_count(), 2);
        list.records[0].status = DncStatus::Expired;
        assert_eq!(list.active_count(), 1);
    }
}

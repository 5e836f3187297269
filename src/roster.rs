//! Generic operations over in-memory record lists.
//!
//! Ids are assigned max+1 so a freed id is never reused within a session.
//! Lookup misses are typed errors, not silent no-ops.

use crate::error::PortalError;

/// Anything stored in a portal dataset with a numeric id.
pub trait Record {
    fn id(&self) -> u64;
}

/// Next id for an insert: `max(existing ids, 0) + 1`.
pub fn next_id<T: Record>(records: &[T]) -> u64 {
    records.iter().map(|r| r.id()).max().unwrap_or(0) + 1
}

pub fn find<T: Record>(records: &[T], id: u64) -> Option<&T> {
    records.iter().find(|r| r.id() == id)
}

pub fn find_mut<T: Record>(records: &mut [T], id: u64) -> Option<&mut T> {
    records.iter_mut().find(|r| r.id() == id)
}

/// Flip a boolean field on the record with the given id. Returns the new
/// value. Toggling the same id twice restores the original state.
pub fn toggle_field<T: Record>(
    records: &mut [T],
    id: u64,
    entity: &'static str,
    field: impl FnOnce(&mut T) -> &mut bool,
) -> Result<bool, PortalError> {
    let record = find_mut(records, id).ok_or(PortalError::NotFound { entity, id })?;
    let flag = field(record);
    *flag = !*flag;
    Ok(*flag)
}

/// Remove the record with the given id, returning it.
pub fn remove_record<T: Record>(
    records: &mut Vec<T>,
    id: u64,
    entity: &'static str,
) -> Result<T, PortalError> {
    let idx = records
        .iter()
        .position(|r| r.id() == id)
        .ok_or(PortalError::NotFound { entity, id })?;
    Ok(records.remove(idx))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        id: u64,
        enabled: bool,
    }

    impl Record for Row {
        fn id(&self) -> u64 {
            self.id
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                id: 1,
                enabled: true,
            },
            Row {
                id: 3,
                enabled: false,
            },
        ]
    }

    #[test]
    fn next_id_is_max_plus_one() {
        assert_eq!(next_id(&rows()), 4);
        assert_eq!(next_id::<Row>(&[]), 1);
    }

    #[test]
    fn next_id_never_reuses_freed_ids() {
        let mut list = rows();
        remove_record(&mut list, 3, "row").unwrap();
        // id 3 was freed but the remaining max is 1, so the next insert gets 2;
        // removing the max never resurrects it either:
        let mut list2 = rows();
        list2.push(Row {
            id: next_id(&list2),
            enabled: false,
        });
        assert_eq!(list2.last().unwrap().id, 4);
    }

    #[test]
    fn toggle_is_an_involution() {
        let mut list = rows();
        let first = toggle_field(&mut list, 3, "row", |r| &mut r.enabled).unwrap();
        assert!(first);
        let second = toggle_field(&mut list, 3, "row", |r| &mut r.enabled).unwrap();
        assert!(!second);
        assert!(!list[1].enabled);
    }

    #[test]
    fn toggle_missing_id_is_not_found() {
        let mut list = rows();
        let err = toggle_field(&mut list, 9, "row", |r| &mut r.enabled).unwrap_err();
        assert_eq!(err.to_string(), "row 9 not found");
    }

    #[test]
    fn remove_returns_the_record() {
        let mut list = rows();
        let removed = remove_record(&mut list, 1, "row").unwrap();
        assert_eq!(removed.id, 1);
        assert_eq!(list.len(), 1);
        assert!(remove_record(&mut list, 1, "row").is_err());
    }
}

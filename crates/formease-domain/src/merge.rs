//! Field Merge Reconciler
//!
//! Selectively merges an extracted record into a caller-owned form. Only
//! fields the extraction actually produced are written; an empty extracted
//! value never overwrites whatever the form already holds.

use crate::form::FormState;
use crate::record::DetailRecord;

/// Merge extracted values into a form, returning the count of fields written
///
/// For each of the six contract fields: a non-empty extracted value
/// overwrites the form field; an empty extracted value leaves the form
/// untouched. The returned count (0 to 6) exists purely for user feedback
/// ("N fields pre-filled") and carries no other semantic weight.
///
/// An entirely empty record performs no writes; the caller is expected to
/// surface an "extraction found nothing" outcome rather than a silent no-op.
pub fn merge(record: &DetailRecord, form: &mut FormState) -> usize {
    let mut fields_filled = 0;

    if !record.first_name.is_empty() {
        form.first_name = record.first_name.clone();
        fields_filled += 1;
    }
    if !record.surname.is_empty() {
        form.surname = record.surname.clone();
        fields_filled += 1;
    }
    if !record.address.is_empty() {
        form.address = record.address.clone();
        fields_filled += 1;
    }
    if !record.postcode.is_empty() {
        form.postcode = record.postcode.clone();
        fields_filled += 1;
    }
    if !record.email.is_empty() {
        form.email = record.email.clone();
        fields_filled += 1;
    }
    if !record.favorite_time_of_day.is_empty() {
        form.favorite_time_of_day = record.favorite_time_of_day.clone();
        fields_filled += 1;
    }

    fields_filled
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_record() -> DetailRecord {
        DetailRecord {
            first_name: "John".to_string(),
            surname: "Doe".to_string(),
            address: "10 Elm St, Anytown".to_string(),
            postcode: "AN1 1AA".to_string(),
            email: "john@x.com".to_string(),
            favorite_time_of_day: "Morning".to_string(),
        }
    }

    #[test]
    fn test_merge_full_record_into_empty_form() {
        let record = full_record();
        let mut form = FormState::default();

        let filled = merge(&record, &mut form);

        assert_eq!(filled, 6);
        assert_eq!(form.first_name, "John");
        assert_eq!(form.surname, "Doe");
        assert_eq!(form.address, "10 Elm St, Anytown");
        assert_eq!(form.postcode, "AN1 1AA");
        assert_eq!(form.email, "john@x.com");
        assert_eq!(form.favorite_time_of_day, "Morning");
    }

    #[test]
    fn test_merge_never_overwrites_with_emptiness() {
        let record = DetailRecord {
            address: "".to_string(),
            email: "new@x.com".to_string(),
            ..Default::default()
        };
        let mut form = FormState {
            address: "10 Elm St".to_string(),
            email: "old@x.com".to_string(),
            ..Default::default()
        };

        let filled = merge(&record, &mut form);

        assert_eq!(filled, 1);
        assert_eq!(form.address, "10 Elm St");
        assert_eq!(form.email, "new@x.com");
    }

    #[test]
    fn test_merge_empty_record_performs_no_writes() {
        let record = DetailRecord::default();
        let mut form = FormState {
            first_name: "Existing".to_string(),
            create_login: true,
            ..Default::default()
        };
        let before = form.clone();

        let filled = merge(&record, &mut form);

        assert_eq!(filled, 0);
        assert_eq!(form, before);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let record = full_record();
        let mut once = FormState {
            surname: "Prior".to_string(),
            ..Default::default()
        };
        let mut twice = once.clone();

        let first = merge(&record, &mut once);
        merge(&record, &mut twice);
        let second = merge(&record, &mut twice);

        assert_eq!(once, twice);
        assert_eq!(first, second);
    }

    #[test]
    fn test_merge_leaves_caller_state_alone() {
        let record = full_record();
        let mut form = FormState {
            create_login: true,
            ..Default::default()
        };

        merge(&record, &mut form);

        assert!(form.create_login);
    }

    #[test]
    fn test_merge_counts_only_written_fields() {
        let record = DetailRecord {
            first_name: "Jane".to_string(),
            postcode: "12345".to_string(),
            favorite_time_of_day: "Night".to_string(),
            ..Default::default()
        };
        let mut form = FormState::default();

        assert_eq!(merge(&record, &mut form), 3);
    }
}

//! DetailRecord module - the six-field extraction contract

use crate::timeofday::TimeOfDay;

/// A partial record of extracted personal details
///
/// An instance of the extraction contract: six string fields where the
/// empty string means "no detectable information". Every field is always
/// present; "absent" and "present but empty" are the same outcome, which
/// keeps the merge rule ("never overwrite with emptiness") simple and total.
///
/// A record is produced from exactly one uploaded document and consumed by
/// exactly one merge call; it carries no identity beyond the request that
/// created it and is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailRecord {
    /// The person's first name
    pub first_name: String,

    /// The person's surname or last name
    pub surname: String,

    /// Street address including city, excluding the postcode
    pub address: String,

    /// Postcode or ZIP code
    pub postcode: String,

    /// Email address
    pub email: String,

    /// Qualitative time-of-day preference - one of the four contract
    /// literals, or empty when no contextual cue exists
    pub favorite_time_of_day: String,
}

impl DetailRecord {
    /// The contract field names, in contract order
    pub const FIELDS: [&'static str; 6] = [
        "firstName",
        "surname",
        "address",
        "postcode",
        "email",
        "favoriteTimeOfDay",
    ];

    /// True when every field is empty (the "extraction found nothing" case)
    pub fn is_empty(&self) -> bool {
        self.filled_fields() == 0
    }

    /// Count of non-empty fields (0 to 6)
    pub fn filled_fields(&self) -> usize {
        [
            &self.first_name,
            &self.surname,
            &self.address,
            &self.postcode,
            &self.email,
            &self.favorite_time_of_day,
        ]
        .iter()
        .filter(|v| !v.is_empty())
        .count()
    }

    /// Validate the record against the contract's value constraints
    ///
    /// The only constrained value is the qualitative field: when non-empty
    /// it must be one of the four enumerated literals.
    pub fn validate(&self) -> Result<(), String> {
        if !self.favorite_time_of_day.is_empty()
            && TimeOfDay::parse(&self.favorite_time_of_day).is_none()
        {
            return Err(format!(
                "favoriteTimeOfDay '{}' is not one of the allowed values",
                self.favorite_time_of_day
            ));
        }
        Ok(())
    }
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
    fn test_default_record_is_empty() {
        let record = DetailRecord::default();
        assert!(record.is_empty());
        assert_eq!(record.filled_fields(), 0);
    }

    #[test]
    fn test_filled_fields_counts_non_empty() {
        let record = full_record();
        assert_eq!(record.filled_fields(), 6);
        assert!(!record.is_empty());

        let partial = DetailRecord {
            first_name: "John".to_string(),
            email: "john@x.com".to_string(),
            ..Default::default()
        };
        assert_eq!(partial.filled_fields(), 2);
    }

    #[test]
    fn test_validate_accepts_enumerated_time() {
        for literal in ["Morning", "Afternoon", "Evening", "Night", ""] {
            let record = DetailRecord {
                favorite_time_of_day: literal.to_string(),
                ..Default::default()
            };
            assert!(record.validate().is_ok(), "should accept '{}'", literal);
        }
    }

    #[test]
    fn test_validate_rejects_non_enumerated_time() {
        let record = DetailRecord {
            favorite_time_of_day: "Dawn".to_string(),
            ..Default::default()
        };
        assert!(record.validate().is_err());
    }
}

//! Sign-up field validators.
//!
//! Each validator is a pure function over the raw field text. None of them
//! touch the DOM; the form controller feeds them values and projects the
//! results.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::limits::{MAX_AGE, MIN_AGE, NAME_MIN_CHARS};
use crate::core::error::ValidationError;
use crate::models::Registration;

/// Area code plus number, digits only.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10,11}$").expect("phone pattern is valid"));

/// A control of the sign-up form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Phone,
    Age,
    Availability,
}

impl Field {
    /// All fields, in the order a submit pass validates them.
    pub const ALL: [Field; 4] = [Field::Name, Field::Phone, Field::Age, Field::Availability];

    /// Value of the control's `name` attribute.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Age => "age",
            Field::Availability => "availability",
        }
    }

    /// Look up a field by its `name` attribute.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    /// Run this field's rule against a raw value.
    pub fn check(self, raw: &str) -> Result<(), ValidationError> {
        match self {
            Field::Name => validate_name(raw),
            Field::Phone => validate_phone(raw),
            Field::Age => validate_age(raw).map(|_| ()),
            Field::Availability => validate_availability(raw),
        }
    }
}

/// Full name: at least five characters and two words.
pub fn validate_name(raw: &str) -> Result<(), ValidationError> {
    let name = raw.trim();
    if name.chars().count() < NAME_MIN_CHARS || !name.contains(' ') {
        return Err(ValidationError::NameIncomplete);
    }
    Ok(())
}

/// Phone: exactly 10 or 11 ASCII digits after trimming.
pub fn validate_phone(raw: &str) -> Result<(), ValidationError> {
    if !PHONE_PATTERN.is_match(raw.trim()) {
        return Err(ValidationError::PhoneInvalid);
    }
    Ok(())
}

/// Age: a positive integer within the accepted volunteer range.
///
/// Returns the parsed age so callers can build the payload without
/// parsing twice. Only the first failing condition is reported.
pub fn validate_age(raw: &str) -> Result<u32, ValidationError> {
    let age = parse_age(raw)
        .filter(|age| *age > 0)
        .ok_or(ValidationError::AgeInvalid)?;

    if age < i64::from(MIN_AGE) {
        return Err(ValidationError::AgeUnderMinimum);
    }
    if age > i64::from(MAX_AGE) {
        return Err(ValidationError::AgeOverMaximum);
    }
    // In range, so the cast cannot truncate.
    Ok(age as u32)
}

/// Availability: any non-empty selection.
pub fn validate_availability(raw: &str) -> Result<(), ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::AvailabilityMissing);
    }
    Ok(())
}

/// Parse an integer age, also accepting integral decimals like `"25.0"`.
fn parse_age(raw: &str) -> Option<i64> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(value) = text.parse::<i64>() {
        return Some(value);
    }
    let value = text.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

// ============================================================================
// Whole-form validation
// ============================================================================

/// Errors found in one validation pass, keyed by field.
pub type FieldErrors = BTreeMap<Field, ValidationError>;

/// Raw values read from the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub phone: String,
    pub age: String,
    pub availability: String,
}

impl FormValues {
    /// Raw value of a single field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Age => &self.age,
            Field::Availability => &self.availability,
        }
    }

    /// Validate every field and build the payload if all pass.
    pub fn validate(&self) -> ValidationResult {
        let errors: FieldErrors = Field::ALL
            .into_iter()
            .filter_map(|field| field.check(self.get(field)).err().map(|err| (field, err)))
            .collect();

        let registration = match (errors.is_empty(), validate_age(&self.age)) {
            (true, Ok(age)) => Some(Registration {
                name: self.name.trim().to_string(),
                phone: self.phone.trim().to_string(),
                age,
                availability: self.availability.clone(),
            }),
            _ => None,
        };

        ValidationResult {
            errors,
            registration,
        }
    }
}

/// Outcome of validating the whole form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub errors: FieldErrors,
    pub registration: Option<Registration>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_requires_length_and_surname() {
        assert_eq!(validate_name("Ana Lu"), Ok(()));
        assert_eq!(validate_name("  Maria Silva  "), Ok(()));
        assert_eq!(validate_name("A B C"), Ok(()));
        assert_eq!(validate_name("Mariana"), Err(ValidationError::NameIncomplete));
        assert_eq!(validate_name("Al B"), Err(ValidationError::NameIncomplete));
        assert_eq!(validate_name("   Joaquim   "), Err(ValidationError::NameIncomplete));
        assert_eq!(validate_name(""), Err(ValidationError::NameIncomplete));
    }

    #[test]
    fn test_phone_accepts_ten_or_eleven_digits() {
        assert_eq!(validate_phone("1133334444"), Ok(()));
        assert_eq!(validate_phone("11933334444"), Ok(()));
        assert_eq!(validate_phone(" 11933334444 "), Ok(()));

        for bad in [
            "",
            "113333444",
            "119333344445",
            "(11)33334444",
            "11 3333 4444",
            "11-933334444",
            "abcdefghij",
            "١١٣٣٣٣٤٤٤٤",
        ] {
            assert_eq!(validate_phone(bad), Err(ValidationError::PhoneInvalid), "{bad}");
        }
    }

    #[test]
    fn test_age_boundaries() {
        assert_eq!(validate_age("17"), Err(ValidationError::AgeUnderMinimum));
        assert_eq!(validate_age("18"), Ok(18));
        assert_eq!(validate_age("80"), Ok(80));
        assert_eq!(validate_age("81"), Err(ValidationError::AgeOverMaximum));
    }

    #[test]
    fn test_age_rejects_non_integers() {
        for bad in ["-5", "0", "abc", "", "   ", "25.5", "NaN", "inf"] {
            assert_eq!(validate_age(bad), Err(ValidationError::AgeInvalid), "{bad}");
        }
        assert_eq!(validate_age(" 42 "), Ok(42));
        assert_eq!(validate_age("30.0"), Ok(30));
    }

    #[test]
    fn test_availability_requires_selection() {
        assert_eq!(
            validate_availability(""),
            Err(ValidationError::AvailabilityMissing)
        );
        assert_eq!(validate_availability("weekends"), Ok(()));
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
        assert_eq!(Field::from_name("email"), None);
    }

    #[test]
    fn test_form_validation_collects_every_error() {
        let values = FormValues {
            name: "Ana".into(),
            phone: "123".into(),
            age: "15".into(),
            availability: String::new(),
        };
        let result = values.validate();

        assert!(!result.is_valid());
        assert!(result.registration.is_none());
        assert_eq!(result.errors.len(), 4);
        assert_eq!(
            result.errors.get(&Field::Age),
            Some(&ValidationError::AgeUnderMinimum)
        );
    }

    #[test]
    fn test_form_validation_builds_registration() {
        let values = FormValues {
            name: " Maria Silva ".into(),
            phone: "11933334444".into(),
            age: "34".into(),
            availability: "weekends".into(),
        };
        let result = values.validate();

        assert!(result.is_valid());
        let registration = result.registration.unwrap();
        assert_eq!(registration.name, "Maria Silva");
        assert_eq!(registration.age, 34);
    }
}

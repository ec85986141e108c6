//! Field validation for records.
//!
//! Every rule is evaluated independently so a single pass reports all failing
//! fields. Presence checks ignore surrounding whitespace. State and district
//! values must come from the region catalogue; a district is only checked
//! against a known state so an unknown state reports a single error.

use std::collections::BTreeMap;
use std::fmt;

use super::phone::{PHONE_DIGITS, mask_phone, phone_digits};
use super::record::{Record, RecordField};
use super::region::{is_district_of, is_known_state};

/// A failed field rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum FieldError {
    #[error("First name is required")]
    FirstNameRequired,
    #[error("Last name is required")]
    LastNameRequired,
    #[error("Phone is required")]
    PhoneRequired,
    #[error("Phone number must be 10 digits")]
    PhoneLength,
    #[error("Email is required")]
    EmailRequired,
    #[error("Invalid email format")]
    EmailFormat,
    #[error("Address is required")]
    AddressRequired,
    #[error("State is required")]
    StateRequired,
    /// The state is not in the region catalogue.
    #[error("Unknown state")]
    UnknownState,
    #[error("District is required")]
    DistrictRequired,
    /// The district is not one of the selected state's districts.
    #[error("District does not belong to the selected state")]
    DistrictOutsideState,
    #[error("City is required")]
    CityRequired,
    #[error("Zip code is required")]
    ZipCodeRequired,
}

impl FieldError {
    /// Field the rule belongs to.
    pub const fn field(self) -> RecordField {
        match self {
            Self::FirstNameRequired => RecordField::FirstName,
            Self::LastNameRequired => RecordField::LastName,
            Self::PhoneRequired | Self::PhoneLength => RecordField::Phone,
            Self::EmailRequired | Self::EmailFormat => RecordField::Email,
            Self::AddressRequired => RecordField::Address,
            Self::StateRequired | Self::UnknownState => RecordField::State,
            Self::DistrictRequired | Self::DistrictOutsideState => RecordField::District,
            Self::CityRequired => RecordField::City,
            Self::ZipCodeRequired => RecordField::ZipCode,
        }
    }

    /// Message shown next to the field. Matches the `Display` output.
    pub const fn message(self) -> &'static str {
        match self {
            Self::FirstNameRequired => "First name is required",
            Self::LastNameRequired => "Last name is required",
            Self::PhoneRequired => "Phone is required",
            Self::PhoneLength => "Phone number must be 10 digits",
            Self::EmailRequired => "Email is required",
            Self::EmailFormat => "Invalid email format",
            Self::AddressRequired => "Address is required",
            Self::StateRequired => "State is required",
            Self::UnknownState => "Unknown state",
            Self::DistrictRequired => "District is required",
            Self::DistrictOutsideState => "District does not belong to the selected state",
            Self::CityRequired => "City is required",
            Self::ZipCodeRequired => "Zip code is required",
        }
    }
}

/// Per-field validation outcome. Fields without an entry passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<RecordField, FieldError>);

impl FieldErrors {
    /// No errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether every field passed.
    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Same as [`FieldErrors::is_valid`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Error recorded for `field`, if any.
    pub fn get(&self, field: RecordField) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    /// Message for `field`; empty when the field passed.
    pub fn message(&self, field: RecordField) -> &'static str {
        self.get(field).map_or("", FieldError::message)
    }

    /// Message for every field in form order, empty for passing fields.
    pub fn messages(&self) -> impl Iterator<Item = (RecordField, &'static str)> + '_ {
        RecordField::ALL
            .into_iter()
            .map(move |field| (field, self.message(field)))
    }

    /// Failing fields and their errors.
    pub fn iter(&self) -> impl Iterator<Item = (RecordField, FieldError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }

    /// Forget the error for `field`, typically because the user edited it.
    pub fn clear(&mut self, field: RecordField) {
        self.0.remove(&field);
    }

    fn insert(&mut self, error: FieldError) {
        self.0.insert(error.field(), error);
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, error) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {error}")?;
            first = false;
        }
        Ok(())
    }
}

/// Check a single field of `record`.
pub fn check_field(record: &Record, field: RecordField) -> Option<FieldError> {
    let value = record.field(field);
    let blank = value.trim().is_empty();
    match field {
        RecordField::FirstName => blank.then_some(FieldError::FirstNameRequired),
        RecordField::LastName => blank.then_some(FieldError::LastNameRequired),
        RecordField::Phone if blank => Some(FieldError::PhoneRequired),
        RecordField::Phone => {
            (phone_digits(value).len() != PHONE_DIGITS).then_some(FieldError::PhoneLength)
        }
        RecordField::Email if blank => Some(FieldError::EmailRequired),
        RecordField::Email => {
            (!value.contains('@') || !value.contains('.')).then_some(FieldError::EmailFormat)
        }
        RecordField::Address => blank.then_some(FieldError::AddressRequired),
        RecordField::State if blank => Some(FieldError::StateRequired),
        RecordField::State => (!is_known_state(value.trim())).then_some(FieldError::UnknownState),
        RecordField::District if blank => Some(FieldError::DistrictRequired),
        RecordField::District => {
            let state = record.state.trim();
            (is_known_state(state) && !is_district_of(state, value.trim()))
                .then_some(FieldError::DistrictOutsideState)
        }
        RecordField::City => blank.then_some(FieldError::CityRequired),
        RecordField::ZipCode => blank.then_some(FieldError::ZipCodeRequired),
    }
}

/// Run every field rule against `record`.
///
/// # Examples
///
/// ```
/// use records::domain::{Record, RecordField, validate_record};
///
/// let record = Record {
///     email: "bad".to_owned(),
///     ..Record::empty()
/// };
/// let errors = validate_record(&record);
///
/// assert!(!errors.is_valid());
/// assert_eq!(errors.message(RecordField::Email), "Invalid email format");
/// assert_eq!(errors.message(RecordField::FirstName), "First name is required");
/// ```
pub fn validate_record(record: &Record) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for error in RecordField::ALL
        .into_iter()
        .filter_map(|field| check_field(record, field))
    {
        errors.insert(error);
    }
    errors
}

/// A record that passed validation and was normalised for persistence.
///
/// ## Invariants
/// - Every field rule passes.
/// - Text fields carry no surrounding whitespace.
/// - `phone` is in masked form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRecord(Record);

impl ValidatedRecord {
    /// Validate `record`, then trim its text fields and re-mask its phone.
    ///
    /// # Errors
    ///
    /// Returns the per-field errors when any rule fails.
    pub fn try_new(record: Record) -> Result<Self, FieldErrors> {
        let errors = validate_record(&record);
        if !errors.is_valid() {
            return Err(errors);
        }
        Ok(Self(normalise(record)))
    }

    /// The normalised record.
    pub fn record(&self) -> &Record {
        &self.0
    }

    /// Unwrap into the normalised record.
    pub fn into_record(self) -> Record {
        self.0
    }
}

impl AsRef<Record> for ValidatedRecord {
    fn as_ref(&self) -> &Record {
        &self.0
    }
}

impl TryFrom<Record> for ValidatedRecord {
    type Error = FieldErrors;

    fn try_from(value: Record) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

fn normalise(mut record: Record) -> Record {
    for field in RecordField::ALL {
        let value = record.field_mut(field);
        let trimmed = value.trim();
        if trimmed.len() != value.len() {
            *value = trimmed.to_owned();
        }
    }
    record.phone = mask_phone(&record.phone);
    record
}

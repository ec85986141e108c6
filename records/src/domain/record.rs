//! Record data model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier assigned to a record by the remote store.
///
/// The remote resource may hand out textual or numeric ids; both are carried
/// as their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Wrap a server-assigned identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Returned when a field name does not match any [`RecordField`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown record field: {name}")]
pub struct UnknownRecordField {
    /// The rejected field name.
    pub name: String,
}

/// The nine editable fields of a [`Record`].
///
/// Serialises using the camelCase names the remote resource uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordField {
    FirstName,
    LastName,
    Phone,
    Email,
    Address,
    State,
    District,
    City,
    ZipCode,
}

impl RecordField {
    /// Every field in form order.
    pub const ALL: [Self; 9] = [
        Self::FirstName,
        Self::LastName,
        Self::Phone,
        Self::Email,
        Self::Address,
        Self::State,
        Self::District,
        Self::City,
        Self::ZipCode,
    ];

    /// Columns the records table lets users sort by.
    pub const TABLE_COLUMNS: [Self; 7] = [
        Self::FirstName,
        Self::LastName,
        Self::Phone,
        Self::Email,
        Self::Address,
        Self::City,
        Self::ZipCode,
    ];

    /// Wire name of the field.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Address => "address",
            Self::State => "state",
            Self::District => "district",
            Self::City => "city",
            Self::ZipCode => "zipCode",
        }
    }

    /// Column heading shown in the records table.
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Phone => "Phone",
            Self::Email => "Email",
            Self::Address => "Address",
            Self::State => "State",
            Self::District => "District",
            Self::City => "City",
            Self::ZipCode => "Zip",
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordField {
    type Err = UnknownRecordField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownRecordField { name: s.to_owned() })
    }
}

/// A person's contact entry.
///
/// ## Invariants
/// - `id` is `None` until the remote store has accepted the record.
/// - `phone` holds the masked display form; see [`crate::domain::mask_phone`].
/// - `district` belongs to the district list of `state` whenever it was set
///   through [`crate::domain::RecordForm`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Record {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub state: String,
    pub district: String,
    pub city: String,
    pub zip_code: String,
}

impl Record {
    /// Blank record used when a create form is opened or reset.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Text of one field.
    pub fn field(&self, field: RecordField) -> &str {
        match field {
            RecordField::FirstName => &self.first_name,
            RecordField::LastName => &self.last_name,
            RecordField::Phone => &self.phone,
            RecordField::Email => &self.email,
            RecordField::Address => &self.address,
            RecordField::State => &self.state,
            RecordField::District => &self.district,
            RecordField::City => &self.city,
            RecordField::ZipCode => &self.zip_code,
        }
    }

    pub(crate) fn field_mut(&mut self, field: RecordField) -> &mut String {
        match field {
            RecordField::FirstName => &mut self.first_name,
            RecordField::LastName => &mut self.last_name,
            RecordField::Phone => &mut self.phone,
            RecordField::Email => &mut self.email,
            RecordField::Address => &mut self.address,
            RecordField::State => &mut self.state,
            RecordField::District => &mut self.district,
            RecordField::City => &mut self.city,
            RecordField::ZipCode => &mut self.zip_code,
        }
    }

    /// Same record carrying a server-assigned id.
    #[must_use]
    pub fn with_id(mut self, id: RecordId) -> Self {
        self.id = Some(id);
        self
    }

    /// Address cell text: `address, state`, or just the address when no state
    /// is set. Empty when there is no address.
    pub fn display_address(&self) -> String {
        match (self.address.is_empty(), self.state.is_empty()) {
            (true, _) => String::new(),
            (false, true) => self.address.clone(),
            (false, false) => format!("{}, {}", self.address, self.state),
        }
    }

    /// Text of the id (when present) followed by every field, as matched by
    /// table search.
    pub fn searchable_values(&self) -> impl Iterator<Item = &str> + '_ {
        self.id
            .as_ref()
            .map(AsRef::<str>::as_ref)
            .into_iter()
            .chain(RecordField::ALL.into_iter().map(move |field| self.field(field)))
    }
}

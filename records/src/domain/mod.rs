//! Records domain: types, rules and the services sequencing them.
//!
//! Purpose: keep validation, masking and the table query pipeline pure and
//! framework independent, and reach the remote store only through
//! [`ports::RecordGateway`].
//!
//! Public surface:
//! - Record (alias to `record::Record`) with RecordId and RecordField.
//! - validate_record / ValidatedRecord: field rules and normalisation.
//! - mask_phone: phone input mask.
//! - RecordStore: filter, sort and paginate over the loaded list.
//! - RecordForm / EditSession: editable form state.
//! - RecordsDashboard: orchestration over a RecordGateway.

pub mod ports;

mod dashboard;
mod error;
mod form;
mod phone;
mod query;
mod record;
mod region;
mod store;
mod validation;

pub use self::dashboard::RecordsDashboard;
pub use self::error::DashboardError;
pub use self::form::{EditSession, FormError, RecordForm};
pub use self::phone::{MASKED_PHONE_LEN, PHONE_DIGITS, mask_phone, phone_digits};
pub use self::query::{SortConfig, SortDirection, search, sort_rows};
pub use self::record::{Record, RecordField, RecordId, UnknownRecordField};
pub use self::region::{districts_for, is_district_of, is_known_state, state_names};
pub use self::store::RecordStore;
pub use self::validation::{
    FieldError, FieldErrors, ValidatedRecord, check_field, validate_record,
};

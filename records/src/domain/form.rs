//! Editable form state shared by the create form and the edit dialog.
//!
//! A [`RecordForm`] owns a draft [`Record`], the error map from the last
//! validation pass and a submitting flag. Field edits go through
//! [`RecordForm::update_field`], which applies the phone mask and keeps the
//! state/district pair consistent with the region catalogue.

use super::phone::mask_phone;
use super::record::{Record, RecordField, RecordId};
use super::region::{districts_for, is_district_of, is_known_state};
use super::validation::{FieldErrors, ValidatedRecord, validate_record};

/// Rejected form interaction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// The state is not in the region catalogue.
    #[error("unknown state: {state}")]
    UnknownState { state: String },
    /// The district does not belong to the selected state.
    #[error("district {district} is not part of {state:?}")]
    UnknownDistrict { state: String, district: String },
    /// A submission is pending; the form is read-only until it finishes.
    #[error("a submission is already in flight")]
    SubmissionInFlight,
    /// At least one field rule failed.
    #[error("record is invalid: {0}")]
    Invalid(FieldErrors),
}

/// Draft record plus validation and submission state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordForm {
    draft: Record,
    errors: FieldErrors,
    submitting: bool,
}

impl RecordForm {
    /// Empty form with no errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled with a copy of `record`.
    pub fn editing(record: &Record) -> Self {
        Self {
            draft: record.clone(),
            ..Self::default()
        }
    }

    /// Current draft.
    pub fn draft(&self) -> &Record {
        &self.draft
    }

    /// Errors from the last validation pass, minus fields edited since.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Whether a submission is pending.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Districts selectable for the draft's state.
    pub fn available_districts(&self) -> &'static [&'static str] {
        districts_for(&self.draft.state)
    }

    /// Set one field of the draft and clear its error.
    ///
    /// # Errors
    ///
    /// Fails while a submission is in flight, and for a state or district the
    /// region catalogue does not know. Empty values are always accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use records::domain::{RecordField, RecordForm};
    ///
    /// let mut form = RecordForm::new();
    /// form.update_field(RecordField::Phone, "5551234567")?;
    /// form.update_field(RecordField::State, "Texas")?;
    /// form.update_field(RecordField::District, "Austin")?;
    /// form.update_field(RecordField::State, "Florida")?;
    ///
    /// assert_eq!(form.draft().phone, "(555)-123-4567");
    /// assert_eq!(form.draft().district, "");
    /// # Ok::<(), records::domain::FormError>(())
    /// ```
    pub fn update_field(
        &mut self,
        field: RecordField,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        if self.submitting {
            return Err(FormError::SubmissionInFlight);
        }
        let value = value.into();
        match field {
            RecordField::Phone => self.draft.phone = mask_phone(&value),
            RecordField::State => self.set_state(value)?,
            RecordField::District => self.set_district(value)?,
            other => *self.draft.field_mut(other) = value,
        }
        self.errors.clear(field);
        Ok(())
    }

    /// Validate the draft and keep the resulting error map.
    pub fn validate(&mut self) -> bool {
        self.errors = validate_record(&self.draft);
        self.errors.is_valid()
    }

    /// Validate the draft and mark the form as submitting.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::SubmissionInFlight`] when already submitting and
    /// [`FormError::Invalid`] when a field rule fails.
    pub fn begin_submit(&mut self) -> Result<ValidatedRecord, FormError> {
        if self.submitting {
            return Err(FormError::SubmissionInFlight);
        }
        match ValidatedRecord::try_new(self.draft.clone()) {
            Ok(validated) => {
                self.errors = FieldErrors::new();
                self.submitting = true;
                Ok(validated)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(FormError::Invalid(errors))
            }
        }
    }

    /// Re-enable the form after the remote call finished.
    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    /// Back to an empty draft with no errors.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn set_state(&mut self, state: String) -> Result<(), FormError> {
        if !state.is_empty() && !is_known_state(&state) {
            return Err(FormError::UnknownState { state });
        }
        self.draft.state = state;
        self.draft.district.clear();
        self.errors.clear(RecordField::District);
        Ok(())
    }

    fn set_district(&mut self, district: String) -> Result<(), FormError> {
        if !district.is_empty() && !is_district_of(&self.draft.state, &district) {
            return Err(FormError::UnknownDistrict {
                state: self.draft.state.clone(),
                district,
            });
        }
        self.draft.district = district;
        Ok(())
    }
}

/// Edit dialog bound to one stored record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    target: RecordId,
    form: RecordForm,
}

impl EditSession {
    /// Open a session editing a copy of `record`, stored under `target`.
    pub fn open(target: RecordId, record: &Record) -> Self {
        Self {
            target,
            form: RecordForm::editing(record),
        }
    }

    /// Id of the record being edited.
    pub fn target(&self) -> &RecordId {
        &self.target
    }

    /// Dialog form.
    pub fn form(&self) -> &RecordForm {
        &self.form
    }

    /// Mutable dialog form.
    pub fn form_mut(&mut self) -> &mut RecordForm {
        &mut self.form
    }

    /// Whether the dialog may be dismissed.
    pub fn can_close(&self) -> bool {
        !self.form.is_submitting()
    }
}

//! Errors returned by the records dashboard.
//!
//! Field-level failures keep their per-field map so the caller can render each
//! message next to its input; remote failures carry the single message to show
//! in an alert.

use super::form::FormError;
use super::ports::RecordGatewayError;
use super::record::RecordId;
use super::validation::FieldErrors;

/// Failure of a dashboard operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashboardError {
    /// At least one field rule failed; nothing was sent.
    #[error("record is invalid: {0}")]
    Validation(FieldErrors),
    /// A submission is pending on the same form.
    #[error("a submission is already in flight")]
    SubmissionInFlight,
    /// A form edit was refused.
    #[error(transparent)]
    Form(FormError),
    /// The remote store call failed; the local list is unchanged.
    #[error("{message}")]
    Transport {
        message: String,
        #[source]
        source: RecordGatewayError,
    },
    /// No loaded record carries the requested id.
    #[error("record {id} is not loaded")]
    RecordNotFound { id: RecordId },
    /// An edit operation was requested with no dialog open.
    #[error("no edit is in progress")]
    NoEditInProgress,
}

impl DashboardError {
    /// Per-field errors, for validation failures.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<FormError> for DashboardError {
    fn from(value: FormError) -> Self {
        match value {
            FormError::Invalid(errors) => Self::Validation(errors),
            FormError::SubmissionInFlight => Self::SubmissionInFlight,
            other => Self::Form(other),
        }
    }
}

impl From<RecordGatewayError> for DashboardError {
    fn from(source: RecordGatewayError) -> Self {
        Self::Transport {
            message: source.user_message().to_owned(),
            source,
        }
    }
}

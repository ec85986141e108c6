//! Records dashboard service.
//!
//! Sequences the create form, the edit dialog and the record list around the
//! [`RecordGateway`] port. The local list only changes after the remote store
//! confirmed a write, and the latest successful answer wins.

use std::sync::Arc;

use tracing::{info, warn};

use super::error::DashboardError;
use super::form::{EditSession, RecordForm};
use super::ports::RecordGateway;
use super::record::{Record, RecordId};
use super::store::RecordStore;

/// Service owning the record list, the create form and the edit dialog.
pub struct RecordsDashboard<G: ?Sized> {
    gateway: Arc<G>,
    store: RecordStore,
    create_form: RecordForm,
    edit: Option<EditSession>,
}

impl<G: ?Sized> RecordsDashboard<G> {
    /// Dashboard with an empty list at the default page size.
    pub fn new(gateway: Arc<G>) -> Self {
        Self::with_store(gateway, RecordStore::new())
    }

    /// Dashboard starting from an existing store, e.g. one sized from settings.
    pub fn with_store(gateway: Arc<G>, store: RecordStore) -> Self {
        Self {
            gateway,
            store,
            create_form: RecordForm::new(),
            edit: None,
        }
    }

    /// Record list and its table projection.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Query knobs of the table (search, sort, paging).
    pub fn store_mut(&mut self) -> &mut RecordStore {
        &mut self.store
    }

    /// Create form.
    pub fn create_form(&self) -> &RecordForm {
        &self.create_form
    }

    /// Create form, for field edits.
    pub fn create_form_mut(&mut self) -> &mut RecordForm {
        &mut self.create_form
    }

    /// Open edit dialog, if any.
    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    /// Open edit dialog, for field edits.
    pub fn edit_session_mut(&mut self) -> Option<&mut EditSession> {
        self.edit.as_mut()
    }

    /// Open the edit dialog on the loaded record carrying `id`.
    ///
    /// Replaces any idle dialog.
    ///
    /// # Errors
    ///
    /// [`DashboardError::SubmissionInFlight`] while the current dialog is
    /// submitting, [`DashboardError::RecordNotFound`] when no loaded record
    /// has that id.
    pub fn open_edit(&mut self, id: &RecordId) -> Result<&mut EditSession, DashboardError> {
        if self.edit.as_ref().is_some_and(|session| !session.can_close()) {
            return Err(DashboardError::SubmissionInFlight);
        }
        let record = self
            .store
            .get(id)
            .ok_or_else(|| DashboardError::RecordNotFound { id: id.clone() })?;
        let session = EditSession::open(id.clone(), record);
        Ok(self.edit.insert(session))
    }

    /// Dismiss the edit dialog without saving.
    ///
    /// # Errors
    ///
    /// [`DashboardError::NoEditInProgress`] when no dialog is open and
    /// [`DashboardError::SubmissionInFlight`] while it is submitting.
    pub fn close_edit(&mut self) -> Result<(), DashboardError> {
        let session = self.edit.as_ref().ok_or(DashboardError::NoEditInProgress)?;
        if !session.can_close() {
            return Err(DashboardError::SubmissionInFlight);
        }
        self.edit = None;
        Ok(())
    }
}

impl<G> RecordsDashboard<G>
where
    G: RecordGateway + ?Sized,
{
    /// Replace the list with the remote store's records.
    ///
    /// Returns the number of records loaded. On failure the previously loaded
    /// rows stay visible.
    ///
    /// # Errors
    ///
    /// [`DashboardError::Transport`] when the list call fails.
    pub async fn load(&mut self) -> Result<usize, DashboardError> {
        match self.gateway.list().await {
            Ok(records) => {
                let count = records.len();
                self.store.replace_all(records);
                info!(count, "records loaded");
                Ok(count)
            }
            Err(error) => {
                warn!(%error, "record list failed");
                Err(error.into())
            }
        }
    }

    /// Validate the create form and persist it as a new record.
    ///
    /// On success the returned record is appended to the list and the form is
    /// reset. On failure the form keeps its contents and is re-enabled.
    ///
    /// # Errors
    ///
    /// [`DashboardError::Validation`] without any remote call when a field
    /// rule fails, [`DashboardError::SubmissionInFlight`] when the form is
    /// already submitting, [`DashboardError::Transport`] when the create call
    /// fails.
    pub async fn submit_create(&mut self) -> Result<Record, DashboardError> {
        let validated = self.create_form.begin_submit()?;
        let outcome = self.gateway.create(&validated).await;
        self.create_form.finish_submit();
        match outcome {
            Ok(created) => {
                info!(id = ?created.id, "record created");
                self.store.add(created.clone());
                self.create_form.reset();
                Ok(created)
            }
            Err(error) => {
                warn!(%error, "record create failed");
                Err(error.into())
            }
        }
    }

    /// Validate the edit dialog and persist it over its target record.
    ///
    /// On success the stored row is replaced in place and the dialog closes.
    /// On failure the dialog stays open and is re-enabled.
    ///
    /// # Errors
    ///
    /// [`DashboardError::NoEditInProgress`] when no dialog is open, otherwise
    /// the same failures as [`RecordsDashboard::submit_create`].
    pub async fn submit_edit(&mut self) -> Result<Record, DashboardError> {
        let session = self.edit.as_mut().ok_or(DashboardError::NoEditInProgress)?;
        let validated = session.form_mut().begin_submit()?;
        let target = session.target().clone();

        let outcome = self.gateway.update(&target, &validated).await;
        if let Some(session) = self.edit.as_mut() {
            session.form_mut().finish_submit();
        }

        match outcome {
            Ok(updated) => {
                if self.store.replace_by_id(&target, updated.clone()) {
                    info!(id = %target, "record updated");
                } else {
                    warn!(id = %target, "updated record is no longer loaded");
                }
                self.edit = None;
                Ok(updated)
            }
            Err(error) => {
                warn!(id = %target, %error, "record update failed");
                Err(error.into())
            }
        }
    }
}

#[cfg(test)]
#[path = "dashboard_tests.rs"]
mod tests;

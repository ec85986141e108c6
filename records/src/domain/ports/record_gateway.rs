//! Driven port for the remote record resource.
//!
//! The dashboard only talks to the remote store through [`RecordGateway`], so
//! the HTTP adapter and the in-memory fixture are interchangeable.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::{Record, RecordId, ValidatedRecord};

use super::define_port_error;

/// Message shown to users when the remote store gave no usable explanation.
pub const FALLBACK_USER_MESSAGE: &str = "Something went wrong while saving user!";

define_port_error! {
    /// Errors surfaced while calling the remote record store.
    pub enum RecordGatewayError {
        /// Network transport failed before receiving a response.
        Transport { message: String } =>
            "record gateway transport failed: {message}",
        /// The call exceeded the client timeout.
        Timeout { message: String } =>
            "record gateway timeout: {message}",
        /// The remote store refused the request and explained why.
        Rejected { status: u16, message: String } =>
            "record gateway rejected request with status {status}: {message}",
        /// The remote store answered with a non-success status and no
        /// explanation.
        UnexpectedStatus { status: u16, message: String } =>
            "record gateway returned status {status}: {message}",
        /// The response body could not be decoded.
        Decode { message: String } =>
            "record gateway response decode failed: {message}",
        /// The adapter refused to build the request.
        InvalidRequest { message: String } =>
            "record gateway request invalid: {message}",
    }
}

impl RecordGatewayError {
    /// Text suitable for an alert next to the form.
    ///
    /// Rejections carrying a server message surface it verbatim; everything
    /// else uses [`FALLBACK_USER_MESSAGE`].
    pub fn user_message(&self) -> &str {
        match self {
            Self::Rejected { message, .. } if !message.trim().is_empty() => message,
            _ => FALLBACK_USER_MESSAGE,
        }
    }
}

/// Port for listing, creating and updating remote records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordGateway: Send + Sync {
    /// Every record held by the remote store.
    async fn list(&self) -> Result<Vec<Record>, RecordGatewayError>;

    /// Persist a new record and return it with its assigned id.
    ///
    /// # Examples
    ///
    /// ```
    /// use records::domain::ports::{InMemoryRecordGateway, RecordGateway};
    /// use records::domain::{Record, ValidatedRecord};
    ///
    /// # tokio::runtime::Builder::new_current_thread()
    /// #     .build()
    /// #     .expect("runtime")
    /// #     .block_on(async {
    /// let gateway = InMemoryRecordGateway::default();
    /// let record = Record {
    ///     first_name: "Ann".to_owned(),
    ///     last_name: "Lee".to_owned(),
    ///     phone: "5551234567".to_owned(),
    ///     email: "ann@example.com".to_owned(),
    ///     address: "1 Main St".to_owned(),
    ///     state: "Texas".to_owned(),
    ///     district: "Austin".to_owned(),
    ///     city: "Austin".to_owned(),
    ///     zip_code: "73301".to_owned(),
    ///     id: None,
    /// };
    /// let validated = ValidatedRecord::try_new(record).expect("valid record");
    /// let created = gateway.create(&validated).await.expect("fixture accepts");
    /// assert_eq!(created.id.map(|id| id.to_string()).as_deref(), Some("1"));
    /// # });
    /// ```
    async fn create(&self, record: &ValidatedRecord) -> Result<Record, RecordGatewayError>;

    /// Replace the record stored under `id` and return the stored version.
    async fn update(
        &self,
        id: &RecordId,
        record: &ValidatedRecord,
    ) -> Result<Record, RecordGatewayError>;
}

#[derive(Debug, Default)]
struct InMemoryState {
    records: Vec<Record>,
    next_id: u64,
}

/// In-memory gateway assigning sequential numeric ids.
#[derive(Debug, Default)]
pub struct InMemoryRecordGateway {
    state: Mutex<InMemoryState>,
}

impl InMemoryRecordGateway {
    /// Gateway pre-loaded with `records`. Records without an id get one that
    /// no pre-loaded record uses.
    pub fn with_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut state = InMemoryState {
            records: records.into_iter().collect(),
            next_id: 0,
        };
        let missing: Vec<usize> = state
            .records
            .iter()
            .enumerate()
            .filter_map(|(index, record)| record.id.is_none().then_some(index))
            .collect();
        for index in missing {
            let id = state.allocate_id();
            if let Some(record) = state.records.get_mut(index) {
                record.id = Some(id);
            }
        }
        Self {
            state: Mutex::new(state),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, InMemoryState>, RecordGatewayError> {
        self.state
            .lock()
            .map_err(|_| RecordGatewayError::transport("in-memory record store poisoned"))
    }
}

impl InMemoryState {
    fn allocate_id(&mut self) -> RecordId {
        loop {
            self.next_id = self.next_id.saturating_add(1);
            let id = RecordId::new(self.next_id.to_string());
            if !self.records.iter().any(|record| record.id.as_ref() == Some(&id)) {
                return id;
            }
        }
    }
}

#[async_trait]
impl RecordGateway for InMemoryRecordGateway {
    async fn list(&self) -> Result<Vec<Record>, RecordGatewayError> {
        Ok(self.lock()?.records.clone())
    }

    async fn create(&self, record: &ValidatedRecord) -> Result<Record, RecordGatewayError> {
        let mut state = self.lock()?;
        let id = state.allocate_id();
        let stored = record.record().clone().with_id(id);
        state.records.push(stored.clone());
        Ok(stored)
    }

    async fn update(
        &self,
        id: &RecordId,
        record: &ValidatedRecord,
    ) -> Result<Record, RecordGatewayError> {
        let mut state = self.lock()?;
        let Some(slot) = state
            .records
            .iter_mut()
            .find(|existing| existing.id.as_ref() == Some(id))
        else {
            return Err(RecordGatewayError::rejected(
                404_u16,
                format!("employee {id} not found"),
            ));
        };
        *slot = record.record().clone().with_id(id.clone());
        Ok(slot.clone())
    }
}

//! Reqwest-backed `employee` resource adapter.
//!
//! This adapter owns transport details only: URL building, timeout and HTTP
//! error mapping, and JSON decoding into domain records.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use tracing::debug;
use url::Url;

use super::dto::{ErrorBodyDto, RecordDto, decode_envelope};
use crate::domain::ports::{RecordGateway, RecordGatewayError};
use crate::domain::{Record, RecordId, ValidatedRecord};

const EMPLOYEE_SEGMENT: &str = "employee";

/// Errors raised while building the adapter.
#[derive(Debug, thiserror::Error)]
pub enum HttpGatewayBuildError {
    /// The base URL cannot carry path segments (e.g. `mailto:`).
    #[error("base url {url} cannot be used as an HTTP base")]
    BaseUrl { url: String },
    /// The reqwest client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Gateway calling the `employee` REST resource below one base URL.
#[derive(Debug, Clone)]
pub struct EmployeeHttpGateway {
    client: Client,
    collection: Url,
}

impl EmployeeHttpGateway {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// Requests go to `{base_url}/employee` and `{base_url}/employee/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an error when `base_url` cannot carry a path or when the
    /// reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, HttpGatewayBuildError> {
        let collection = collection_url(base_url)?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, collection })
    }

    /// URL of the `employee` collection.
    pub fn collection_url(&self) -> &Url {
        &self.collection
    }

    fn member_url(&self, id: &RecordId) -> Result<Url, RecordGatewayError> {
        let mut url = self.collection.clone();
        url.path_segments_mut()
            .map_err(|()| RecordGatewayError::invalid_request("collection url cannot be a base"))?
            .push(id.as_ref());
        Ok(url)
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<&Record>,
    ) -> Result<Vec<u8>, RecordGatewayError> {
        debug!(%method, %url, "calling employee resource");
        let mut request = self
            .client
            .request(method, url)
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(record) = body {
            request = request.json(record);
        }
        let response = request.send().await.map_err(map_transport_error)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, bytes.as_ref()));
        }
        Ok(bytes.to_vec())
    }
}

fn collection_url(base_url: Url) -> Result<Url, HttpGatewayBuildError> {
    let mut url = base_url;
    let url_text = url.to_string();
    url.path_segments_mut()
        .map_err(|()| HttpGatewayBuildError::BaseUrl { url: url_text })?
        .pop_if_empty()
        .push(EMPLOYEE_SEGMENT);
    Ok(url)
}

#[async_trait]
impl RecordGateway for EmployeeHttpGateway {
    async fn list(&self) -> Result<Vec<Record>, RecordGatewayError> {
        let body = self
            .send(Method::GET, self.collection.clone(), None)
            .await?;
        parse_list(&body)
    }

    async fn create(&self, record: &ValidatedRecord) -> Result<Record, RecordGatewayError> {
        let submitted = record.record();
        let body = self
            .send(Method::POST, self.collection.clone(), Some(submitted))
            .await?;
        parse_created(&body, submitted)
    }

    async fn update(
        &self,
        id: &RecordId,
        record: &ValidatedRecord,
    ) -> Result<Record, RecordGatewayError> {
        let url = self.member_url(id)?;
        let body = self.send(Method::PATCH, url, Some(record.record())).await?;
        Ok(parse_updated(&body, id, record.record()))
    }
}

fn parse_list(body: &[u8]) -> Result<Vec<Record>, RecordGatewayError> {
    let decoded: Vec<RecordDto> = decode_envelope(body).map_err(|error| {
        RecordGatewayError::decode(format!("invalid employee list payload: {error}"))
    })?;
    let empty = Record::empty();
    Ok(decoded
        .into_iter()
        .map(|dto| dto.into_domain(&empty))
        .collect())
}

fn parse_created(body: &[u8], submitted: &Record) -> Result<Record, RecordGatewayError> {
    let decoded: RecordDto = decode_envelope(body).map_err(|error| {
        RecordGatewayError::decode(format!("invalid created employee payload: {error}"))
    })?;
    let created = decoded.into_domain(submitted);
    if created.id.is_none() {
        return Err(RecordGatewayError::decode(
            "created employee payload carries no id",
        ));
    }
    Ok(created)
}

fn parse_updated(body: &[u8], id: &RecordId, submitted: &Record) -> Record {
    let decoded = decode_envelope::<RecordDto>(body).unwrap_or_else(|error| {
        debug!(%error, "update answer is not a record; keeping submitted data");
        RecordDto::default()
    });
    let mut updated = decoded.into_domain(submitted);
    updated.id = Some(id.clone());
    updated
}

fn map_transport_error(error: reqwest::Error) -> RecordGatewayError {
    if error.is_timeout() {
        RecordGatewayError::timeout(error.to_string())
    } else {
        RecordGatewayError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> RecordGatewayError {
    let server_message = serde_json::from_slice::<ErrorBodyDto>(body)
        .ok()
        .and_then(|decoded| decoded.message)
        .filter(|message| !message.trim().is_empty());
    let code = status.as_u16();

    match (status, server_message) {
        (StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT, message) => {
            let detail = message.unwrap_or_else(|| body_preview(body));
            RecordGatewayError::timeout(format!("status {code}: {detail}"))
        }
        (_, Some(message)) => RecordGatewayError::rejected(code, message),
        (_, None) => RecordGatewayError::unexpected_status(code, body_preview(body)),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

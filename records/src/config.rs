//! Records console settings loaded via OrthoConfig.

use std::num::NonZeroUsize;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::domain::RecordStore;
use crate::outbound::employee::{EmployeeHttpGateway, HttpGatewayBuildError};

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Errors raised while turning settings into runtime values.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// `base_url` is not an absolute URL.
    #[error("invalid base url {value:?}: {source}")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    /// `request_timeout_secs` was set to zero.
    #[error("request timeout must be greater than zero seconds")]
    ZeroTimeout,
    /// `page_size` was set to zero.
    #[error("page size must be greater than zero")]
    ZeroPageSize,
    /// The HTTP adapter could not be built from valid settings.
    #[error(transparent)]
    Gateway(#[from] HttpGatewayBuildError),
}

/// Configuration values for reaching the `employee` resource and sizing the
/// table.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "RECORDS")]
pub struct RecordsSettings {
    /// Base URL the `employee` resource lives under.
    pub base_url: Option<String>,
    /// Client timeout for each remote call, in seconds.
    pub request_timeout_secs: Option<u64>,
    /// Initial table page size.
    #[ortho_config(default = 10)]
    pub page_size: usize,
}

impl RecordsSettings {
    /// Return the configured base URL, falling back to the local default.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBaseUrl`] when the value does not parse.
    pub fn base_url(&self) -> Result<Url, SettingsError> {
        let value = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        Url::parse(value).map_err(|source| SettingsError::InvalidBaseUrl {
            value: value.to_owned(),
            source,
        })
    }

    /// Return the configured request timeout, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::ZeroTimeout`] for a zero timeout.
    pub fn request_timeout(&self) -> Result<Duration, SettingsError> {
        match self
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
        {
            0 => Err(SettingsError::ZeroTimeout),
            secs => Ok(Duration::from_secs(secs)),
        }
    }

    /// Return the configured page size.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::ZeroPageSize`] for a zero page size.
    pub fn page_size(&self) -> Result<NonZeroUsize, SettingsError> {
        NonZeroUsize::new(self.page_size).ok_or(SettingsError::ZeroPageSize)
    }

    /// Build the HTTP gateway described by these settings.
    ///
    /// # Errors
    ///
    /// Returns an error when a setting is invalid or the client cannot be
    /// constructed.
    pub fn http_gateway(&self) -> Result<EmployeeHttpGateway, SettingsError> {
        Ok(EmployeeHttpGateway::new(
            self.base_url()?,
            self.request_timeout()?,
        )?)
    }

    /// Empty record store sized from these settings.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::ZeroPageSize`] for a zero page size.
    pub fn record_store(&self) -> Result<RecordStore, SettingsError> {
        Ok(RecordStore::with_page_size(self.page_size()?))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing and defaults.

    use super::*;
    use std::ffi::OsString;

    use pagination::DEFAULT_PAGE_SIZE;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> RecordsSettings {
        RecordsSettings::load_from_iter([OsString::from("records")]).expect("config should load")
    }

    fn settings_with(
        base_url: Option<&str>,
        timeout: Option<u64>,
        page_size: usize,
    ) -> RecordsSettings {
        RecordsSettings {
            base_url: base_url.map(str::to_owned),
            request_timeout_secs: timeout,
            page_size,
        }
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("RECORDS_BASE_URL", None::<String>),
            ("RECORDS_REQUEST_TIMEOUT_SECS", None::<String>),
            ("RECORDS_PAGE_SIZE", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.base_url().expect("default parses").as_str(),
            "http://localhost:8000/"
        );
        assert_eq!(
            settings.request_timeout().expect("default timeout"),
            Duration::from_secs(30)
        );
        assert_eq!(settings.page_size, 10);
        assert_eq!(
            settings.page_size().expect("default size"),
            DEFAULT_PAGE_SIZE
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("RECORDS_BASE_URL", Some("https://hr.example.com/api".to_owned())),
            ("RECORDS_REQUEST_TIMEOUT_SECS", Some("5".to_owned())),
            ("RECORDS_PAGE_SIZE", Some("16".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.base_url().expect("override parses").as_str(),
            "https://hr.example.com/api"
        );
        assert_eq!(
            settings.request_timeout().expect("override timeout"),
            Duration::from_secs(5)
        );
        assert_eq!(settings.page_size().expect("override size").get(), 16);
        assert_eq!(
            settings
                .http_gateway()
                .expect("gateway builds")
                .collection_url()
                .as_str(),
            "https://hr.example.com/api/employee"
        );
    }

    #[rstest]
    #[case(settings_with(Some("not a url"), None, DEFAULT_PAGE_SIZE.get()))]
    #[case(settings_with(Some("/relative/path"), None, DEFAULT_PAGE_SIZE.get()))]
    fn invalid_base_url_is_reported(#[case] settings: RecordsSettings) {
        assert!(matches!(
            settings.http_gateway(),
            Err(SettingsError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn zero_values_are_rejected() {
        assert!(matches!(
            settings_with(None, Some(0), DEFAULT_PAGE_SIZE.get()).request_timeout(),
            Err(SettingsError::ZeroTimeout)
        ));
        assert!(matches!(
            settings_with(None, None, 0).record_store(),
            Err(SettingsError::ZeroPageSize)
        ));
    }

    #[test]
    fn record_store_uses_configured_page_size() {
        let store = settings_with(None, None, 32)
            .record_store()
            .expect("store builds");
        assert_eq!(store.page_request().page_size().get(), 32);
    }
}

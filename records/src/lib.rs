//! Records console engine.
//!
//! Validation, phone masking and the filter/sort/paginate pipeline behind a
//! records admin page, plus the gateway to the remote `employee` resource.
//!
//! - [`domain`]: record types, rules, table store, forms and the dashboard.
//! - [`outbound`]: reqwest adapter for the `employee` resource.
//! - [`config`]: OrthoConfig settings.
//! - [`telemetry`]: tracing bootstrap.

pub mod config;
pub mod domain;
pub mod outbound;
pub mod telemetry;

pub use config::{RecordsSettings, SettingsError};
pub use pagination::{PAGE_SIZE_PRESETS, Page, PageRequest};

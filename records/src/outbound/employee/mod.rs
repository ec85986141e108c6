//! `employee` REST resource adapter.
//!
//! Thin HTTP implementation of the `RecordGateway` port.

mod dto;
mod http_gateway;

pub use http_gateway::{EmployeeHttpGateway, HttpGatewayBuildError};

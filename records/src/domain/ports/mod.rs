//! Driven ports of the records domain.

mod macros;
pub(crate) use macros::define_port_error;

mod record_gateway;

#[cfg(test)]
pub use record_gateway::MockRecordGateway;
pub use record_gateway::{
    FALLBACK_USER_MESSAGE, InMemoryRecordGateway, RecordGateway, RecordGatewayError,
};

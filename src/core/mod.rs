// src/core/mod.rs
//! HTTP plumbing and the analysis service client

pub mod response;
pub mod service_client;
pub mod transport;

#[cfg(test)]
pub(crate) mod test_support;

pub use service_client::{ApiClient, RequestOptions};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport, TransportError};

pub type Result<T> = std::result::Result<T, crate::error::ApiError>;

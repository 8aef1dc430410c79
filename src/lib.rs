//! Client library for the company research analysis service.
//!
//! [`ApiClient`] wraps every remote capability behind typed, validated calls.
//! [`insights`] derives presentation-ready aggregates from a raw
//! [`CompanyRecord`] when the service does not supply them.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod insights;
pub mod types;
pub mod utils;

pub use config::ClientConfig;
pub use core::{ApiClient, RequestOptions, Transport};
pub use error::ApiError;
pub use types::{CompanyRecord, CompetitorRecord, InsightBundle};

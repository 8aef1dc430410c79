// src/types/response.rs
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::null_as_default;
use crate::error::ApiError;

// ===== Service Response Types =====

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyBasicInfo {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub industry: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub size: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub headquarters: String,
    #[serde(default, alias = "employeeCount")]
    pub employee_count: Option<u64>,
    #[serde(default, alias = "followerCount")]
    pub follower_count: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentBreakdown {
    #[serde(default, deserialize_with = "null_as_default")]
    pub departments: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub department_counts: HashMap<String, u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub service: String,
    #[serde(default)]
    pub version: Option<String>,
}

// ===== Export =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// File extension to use when saving the payload
    pub fn extension(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Only the exact lowercase names are accepted
impl FromStr for ExportFormat {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pdf" => Ok(Self::Pdf),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(ApiError::validation(format!(
                "Unsupported export format: '{}'. Use pdf, csv, or json.",
                other
            ))),
        }
    }
}

/// Export result: parsed JSON, or raw bytes ready to be written to a file
#[derive(Debug, Clone, PartialEq)]
pub enum ExportPayload {
    Json(serde_json::Value),
    Binary(Vec<u8>),
}

impl ExportPayload {
    /// Bytes suitable for saving to disk
    pub fn into_bytes(self) -> serde_json::Result<Vec<u8>> {
        match self {
            Self::Json(value) => serde_json::to_vec_pretty(&value),
            Self::Binary(bytes) => Ok(bytes),
        }
    }
}

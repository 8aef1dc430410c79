// src/core/service_client.rs
//! Typed client for the company analysis service.
//!
//! Every operation validates its inputs before touching the network, then
//! either resolves with a decoded payload or fails with exactly one
//! [`ApiError`].

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, trace, warn};

use super::response::{check_status, decode};
use super::transport::{merge_headers, HttpRequest, HttpResponse, ReqwestTransport, Transport};
use super::Result;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::types::{
    CompanyBasicInfo, CompanyRecord, CompetitorRecord, DepartmentBreakdown, ExportFormat,
    ExportPayload, HealthStatus, InsightBundle, JobPosting, Post,
};
use crate::utils::{clean_names, encode_component, require_company_name, require_in_range};

const ANALYZE_ENDPOINT: &str = "/companies/analyze";
const COMPANIES_ENDPOINT: &str = "/companies";
const EMPLOYEES_ENDPOINT: &str = "/employees";
const INSIGHTS_ENDPOINT: &str = "/insights";
const COMPARE_ENDPOINT: &str = "/competitors/compare";
const HEALTH_ENDPOINT: &str = "/health";

/// Path segment the data endpoints are mounted under. Health lives outside it.
const API_PREFIX: &str = "/api";

const JSON_CONTENT_TYPE: &str = "application/json";

const MAX_EMPLOYEES: u32 = 100;
const DAYS_BACK: u32 = 30;
const MAX_POSTS_LIMIT: u32 = 50;
const MAX_EMPLOYEES_LIMIT: u32 = 200;

/// Request body for `POST /companies/analyze`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub company_name: String,
    pub competitors: Vec<String>,
    pub include_employees: bool,
    pub include_posts: bool,
    pub include_jobs: bool,
    pub max_employees: u32,
    pub days_back: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CompareRequest {
    companies: Vec<String>,
}

/// The comparison endpoint answers either with a bare list or with the list
/// wrapped next to a summary.
#[derive(Deserialize)]
#[serde(untagged)]
enum ComparisonPayload {
    List(Vec<CompetitorRecord>),
    Wrapped { data: Vec<CompetitorRecord> },
}

/// Optional pieces of a request
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub body: Option<Value>,
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn json(body: impl Serialize) -> Result<Self> {
        let body = serde_json::to_value(body)
            .map_err(|e| ApiError::validation(format!("Invalid request body: {}", e)))?;
        Ok(Self {
            body: Some(body),
            headers: Vec::new(),
        })
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    timeout: Duration,
}

impl ApiClient {
    /// Create a client that talks to the network through `reqwest`
    pub fn new(config: ClientConfig) -> anyhow::Result<Self> {
        let transport = ReqwestTransport::new()?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client over any transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            base_url: config.base_url,
            timeout: config.timeout,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Server root: the base URL without its trailing `/api` segment
    pub fn service_root(&self) -> &str {
        self.base_url
            .strip_suffix(API_PREFIX)
            .unwrap_or(&self.base_url)
    }

    // ===== Service operations =====

    /// Run a full analysis of one company
    pub async fn analyze_company<S: AsRef<str>>(
        &self,
        company_name: &str,
        competitors: &[S],
    ) -> Result<CompanyRecord> {
        let company_name = require_company_name(company_name)?;
        let payload = AnalyzeRequest {
            company_name,
            competitors: clean_names(competitors),
            include_employees: true,
            include_posts: true,
            include_jobs: true,
            max_employees: MAX_EMPLOYEES,
            days_back: DAYS_BACK,
        };

        info!(
            "Starting analysis for {} ({} competitors)",
            payload.company_name,
            payload.competitors.len()
        );
        self.post_json(ANALYZE_ENDPOINT, &payload).await
    }

    pub async fn get_insights(&self, company_name: &str) -> Result<InsightBundle> {
        let company_name = require_company_name(company_name)?;
        self.get(&format!(
            "{}/{}",
            INSIGHTS_ENDPOINT,
            encode_component(&company_name)
        ))
        .await
    }

    /// Compare companies; the service decides the order of the result
    pub async fn get_competitor_comparison<S: AsRef<str>>(
        &self,
        companies: &[S],
    ) -> Result<Vec<CompetitorRecord>> {
        let companies = clean_names(companies);
        if companies.is_empty() {
            return Err(ApiError::validation(
                "At least one company name is required for comparison",
            ));
        }

        info!("Comparing {} companies", companies.len());
        let payload: ComparisonPayload = self
            .post_json(COMPARE_ENDPOINT, &CompareRequest { companies })
            .await?;

        Ok(match payload {
            ComparisonPayload::List(records) => records,
            ComparisonPayload::Wrapped { data } => data,
        })
    }

    /// Export company data. `format` must be one of pdf, csv or json.
    pub async fn export_data(&self, company_name: &str, format: &str) -> Result<ExportPayload> {
        let company_name = require_company_name(company_name)?;
        let format: ExportFormat = format.parse()?;

        let endpoint = format!(
            "{}/{}/export?format={}",
            COMPANIES_ENDPOINT,
            encode_component(&company_name),
            format
        );
        let response = self
            .send(Method::GET, &endpoint, RequestOptions::default())
            .await?;

        match format {
            ExportFormat::Json => decode(&response).map(ExportPayload::Json),
            ExportFormat::Pdf | ExportFormat::Csv => {
                info!(
                    "Received {} export for {} ({} bytes)",
                    format,
                    company_name,
                    response.body.len()
                );
                Ok(ExportPayload::Binary(response.body))
            }
        }
    }

    pub async fn get_company_basic_info(&self, company_name: &str) -> Result<CompanyBasicInfo> {
        let company_name = require_company_name(company_name)?;
        self.get(&format!(
            "{}/{}/basic-info",
            COMPANIES_ENDPOINT,
            encode_component(&company_name)
        ))
        .await
    }

    /// Most recent posts, `limit` in 1..=50
    pub async fn get_company_posts(&self, company_name: &str, limit: u32) -> Result<Vec<Post>> {
        let company_name = require_company_name(company_name)?;
        let limit = require_in_range("limit", limit, 1, MAX_POSTS_LIMIT)?;
        self.get(&format!(
            "{}/{}/posts?limit={}",
            COMPANIES_ENDPOINT,
            encode_component(&company_name),
            limit
        ))
        .await
    }

    /// Open job postings, optionally restricted to one department
    pub async fn get_company_jobs(
        &self,
        company_name: &str,
        department: Option<&str>,
    ) -> Result<Vec<JobPosting>> {
        let company_name = require_company_name(company_name)?;
        let mut endpoint = format!(
            "{}/{}/jobs",
            COMPANIES_ENDPOINT,
            encode_component(&company_name)
        );
        if let Some(department) = department.map(str::trim).filter(|d| !d.is_empty()) {
            endpoint.push_str(&format!("?department={}", encode_component(department)));
        }
        self.get(&endpoint).await
    }

    /// Employee profiles, `limit` in 1..=200
    pub async fn get_company_employees(
        &self,
        company_name: &str,
        department: Option<&str>,
        limit: u32,
    ) -> Result<Vec<Value>> {
        let company_name = require_company_name(company_name)?;
        let limit = require_in_range("limit", limit, 1, MAX_EMPLOYEES_LIMIT)?;
        let mut endpoint = format!(
            "{}/{}?limit={}",
            EMPLOYEES_ENDPOINT,
            encode_component(&company_name),
            limit
        );
        if let Some(department) = department.map(str::trim).filter(|d| !d.is_empty()) {
            endpoint.push_str(&format!("&department={}", encode_component(department)));
        }
        self.get(&endpoint).await
    }

    pub async fn get_company_departments(&self, company_name: &str) -> Result<DepartmentBreakdown> {
        let company_name = require_company_name(company_name)?;
        self.get(&format!(
            "{}/{}/departments",
            EMPLOYEES_ENDPOINT,
            encode_component(&company_name)
        ))
        .await
    }

    pub async fn get_company_skills(&self, company_name: &str, top_n: u32) -> Result<Value> {
        let company_name = require_company_name(company_name)?;
        if top_n == 0 {
            return Err(ApiError::validation("top_n must be at least 1"));
        }
        self.get(&format!(
            "{}/{}/skills?top_n={}",
            EMPLOYEES_ENDPOINT,
            encode_component(&company_name),
            top_n
        ))
        .await
    }

    pub async fn get_hiring_predictions(&self, company_name: &str) -> Result<Value> {
        let company_name = require_company_name(company_name)?;
        self.get(&format!(
            "{}/{}/hiring-predictions",
            INSIGHTS_ENDPOINT,
            encode_component(&company_name)
        ))
        .await
    }

    /// `GET /health` on the server root, not under the API prefix
    pub async fn health_check(&self) -> Result<HealthStatus> {
        let url = format!("{}{}", self.service_root(), HEALTH_ENDPOINT);
        let response = self
            .send_to(Method::GET, url, RequestOptions::default())
            .await?;
        decode(&response)
    }

    /// Liveness probe: any failure collapses to `false`
    pub async fn test_connection(&self) -> bool {
        match self.health_check().await {
            Ok(status) => {
                trace!("Health check: {} ({})", status.status, status.service);
                true
            }
            Err(e) => {
                warn!("Connection test failed: {}", e);
                false
            }
        }
    }

    // ===== Generic requests =====

    /// Generic POST request with JSON
    pub async fn post_json<T, R>(&self, endpoint: &str, payload: &T) -> Result<R>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        self.request(Method::POST, endpoint, RequestOptions::json(payload)?)
            .await
    }

    /// Generic GET request
    pub async fn get<R>(&self, endpoint: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.request(Method::GET, endpoint, RequestOptions::default())
            .await
    }

    /// Issue a request and decode the JSON payload
    pub async fn request<R>(&self, method: Method, endpoint: &str, options: RequestOptions) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let response = self.send(method, endpoint, options).await?;
        decode(&response)
    }

    /// Issue a request under the configured timeout and reject non-success
    /// statuses. Returns the raw response.
    pub async fn send(
        &self,
        method: Method,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<HttpResponse> {
        let url = format!("{}{}", self.base_url, endpoint);
        self.send_to(method, url, options).await
    }

    async fn send_to(
        &self,
        method: Method,
        url: String,
        options: RequestOptions,
    ) -> Result<HttpResponse> {
        let body = match options.body {
            Some(value) => Some(
                serde_json::to_vec(&value)
                    .map_err(|e| ApiError::validation(format!("Invalid request body: {}", e)))?,
            ),
            None => None,
        };
        let request = HttpRequest {
            method,
            url: url.clone(),
            headers: merge_headers(&[("Content-Type", JSON_CONTENT_TYPE)], &options.headers),
            body,
        };

        info!("Calling analysis service: {} {}", request.method, request.url);

        // Dropping the transport future on expiry aborts the in-flight request
        let response = match tokio::time::timeout(self.timeout, self.transport.send(request)).await
        {
            Err(_) => {
                warn!("Request to {} timed out after {:?}", url, self.timeout);
                return Err(ApiError::Timeout);
            }
            Ok(Err(e)) => {
                warn!("Request to {} failed: {}", url, e);
                return Err(ApiError::Network);
            }
            Ok(Ok(response)) => response,
        };

        trace!("Response status: {}", response.status);
        check_status(response)
    }
}

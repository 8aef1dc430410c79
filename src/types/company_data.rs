// src/types/company_data.rs
//! Raw company dataset returned by an analysis request

use serde::{Deserialize, Serialize};

use super::insights::PartialInsightBundle;
use super::null_as_default;

// ===== Company Record =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRecord {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub industry: String,
    /// Free-text size bucket such as "51-200"
    #[serde(default, deserialize_with = "null_as_default")]
    pub size: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub headquarters: String,
    #[serde(default)]
    pub founded: Option<i32>,
    #[serde(default, alias = "recent_posts", deserialize_with = "null_as_default")]
    pub recent_posts: Vec<Post>,
    #[serde(default, alias = "job_postings", deserialize_with = "null_as_default")]
    pub job_postings: Vec<JobPosting>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub employees: Vec<Employee>,
    /// Insights computed by the service, possibly partial
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insights: Option<PartialInsightBundle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

// ===== Posts =====

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostCategory {
    Hiring,
    Expansion,
    Milestone,
    #[default]
    #[serde(other)]
    General,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    /// ISO-8601 date as sent by the service
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub engagement: u64,
    #[serde(rename = "type", alias = "category", default, deserialize_with = "null_as_default")]
    pub category: PostCategory,
}

// ===== Job Postings =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub department: String,
    #[serde(default, alias = "date_posted", deserialize_with = "null_as_default")]
    pub date_posted: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub requirements: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, alias = "salary_range", skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
    #[serde(default, alias = "employment_type", skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<String>,
}

// ===== Employees =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub department: String,
    /// Free-text duration like "2 years", not a structured interval
    #[serde(default, deserialize_with = "null_as_default")]
    pub tenure: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, alias = "recent_activity", deserialize_with = "null_as_default")]
    pub recent_activity: Vec<String>,
}

// src/types/mod.rs
//! Typed records exchanged with the analysis service

pub mod company_data;
pub mod insights;
pub mod response;

pub use company_data::{CompanyRecord, Employee, JobPosting, Post, PostCategory};
pub use insights::{
    BranchExpansion, ChangeType, CompetitorRecord, CompetitorSummary, DepartmentGrowth,
    ExpansionType, HiringTrend, InsightBundle, LeadershipChange, PartialInsightBundle, SkillTrend,
    TrendDirection,
};
pub use response::{CompanyBasicInfo, DepartmentBreakdown, ExportFormat, ExportPayload, HealthStatus};

use serde::{Deserialize, Deserializer};

/// Deserialize a missing or `null` field as the type's default, so collections
/// can always be iterated.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// src/types/insights.rs
//! Aggregated analytics shown in the insights view.
//!
//! Values produced locally by [`crate::insights`] are heuristics: trend
//! direction, growth figures and synthesized dates are placeholders standing in
//! for historical data the service does not expose. Only values received from
//! the service should be read as measurements.

use serde::{Deserialize, Serialize};

use super::null_as_default;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    #[default]
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Hire,
    Promotion,
    Departure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpansionType {
    Office,
    Branch,
    Facility,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiringTrend {
    pub department: String,
    pub count: u32,
    #[serde(default)]
    pub trend: TrendDirection,
    /// At most three distinct titles
    #[serde(default, alias = "key_roles", deserialize_with = "null_as_default")]
    pub key_roles: Vec<String>,
    #[serde(default, alias = "growth_rate", skip_serializing_if = "Option::is_none")]
    pub growth_rate: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadershipChange {
    pub name: String,
    #[serde(default, alias = "previous_role")]
    pub previous_role: Option<String>,
    #[serde(alias = "new_role")]
    pub new_role: String,
    pub date: String,
    #[serde(rename = "type")]
    pub change_type: ChangeType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchExpansion {
    pub location: String,
    pub date: String,
    #[serde(rename = "type")]
    pub expansion_type: ExpansionType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillTrend {
    pub skill: String,
    /// Share of postings requiring the skill, 0..=100
    pub demand: u32,
    pub growth: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentGrowth {
    pub name: String,
    pub value: f64,
    pub color: String,
}

// ===== Competitors =====

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorRecord {
    pub name: String,
    #[serde(default, alias = "hiring_activity")]
    pub hiring_activity: u32,
    #[serde(default, alias = "leadership_changes")]
    pub leadership_changes: u32,
    #[serde(default, alias = "market_activity")]
    pub market_activity: u32,
    #[serde(default, alias = "employee_count", skip_serializing_if = "Option::is_none")]
    pub employee_count: Option<u64>,
    #[serde(default, alias = "recent_expansions", skip_serializing_if = "Option::is_none")]
    pub recent_expansions: Option<u32>,
    #[serde(default, alias = "social_engagement", skip_serializing_if = "Option::is_none")]
    pub social_engagement: Option<u64>,
    #[serde(default, alias = "key_strengths", deserialize_with = "null_as_default")]
    pub key_strengths: Vec<String>,
    #[serde(default, alias = "recent_milestones", deserialize_with = "null_as_default")]
    pub recent_milestones: Vec<String>,
}

/// Leaders across a competitor comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorSummary {
    pub highest_hiring_activity: String,
    pub most_leadership_changes: String,
    pub highest_market_activity: String,
}

// ===== Bundles =====

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightBundle {
    #[serde(default, alias = "hiring_trends", deserialize_with = "null_as_default")]
    pub hiring_trends: Vec<HiringTrend>,
    #[serde(default, alias = "leadership_changes", deserialize_with = "null_as_default")]
    pub leadership_changes: Vec<LeadershipChange>,
    #[serde(default, alias = "branch_expansions", deserialize_with = "null_as_default")]
    pub branch_expansions: Vec<BranchExpansion>,
    #[serde(default, alias = "skills_trends", deserialize_with = "null_as_default")]
    pub skills_trends: Vec<SkillTrend>,
    #[serde(default, alias = "department_growth", deserialize_with = "null_as_default")]
    pub department_growth: Vec<DepartmentGrowth>,
    #[serde(default, alias = "competitor_comparison", deserialize_with = "null_as_default")]
    pub competitor_comparison: Vec<CompetitorRecord>,
}

/// Service-supplied insights where any field may be missing. A field counts as
/// present when its key exists with a non-null value, even an empty list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialInsightBundle {
    #[serde(default, alias = "hiring_trends", skip_serializing_if = "Option::is_none")]
    pub hiring_trends: Option<Vec<HiringTrend>>,
    #[serde(default, alias = "leadership_changes", skip_serializing_if = "Option::is_none")]
    pub leadership_changes: Option<Vec<LeadershipChange>>,
    #[serde(default, alias = "branch_expansions", skip_serializing_if = "Option::is_none")]
    pub branch_expansions: Option<Vec<BranchExpansion>>,
    #[serde(default, alias = "skills_trends", skip_serializing_if = "Option::is_none")]
    pub skills_trends: Option<Vec<SkillTrend>>,
    #[serde(default, alias = "department_growth", skip_serializing_if = "Option::is_none")]
    pub department_growth: Option<Vec<DepartmentGrowth>>,
    #[serde(
        default,
        alias = "competitor_comparison",
        skip_serializing_if = "Option::is_none"
    )]
    pub competitor_comparison: Option<Vec<CompetitorRecord>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_bundle_tracks_present_keys() {
        let partial: PartialInsightBundle = serde_json::from_value(json!({
            "hiringTrends": [],
            "skillsTrends": null
        }))
        .unwrap();

        assert_eq!(partial.hiring_trends, Some(vec![]));
        assert!(partial.skills_trends.is_none());
        assert!(partial.leadership_changes.is_none());
    }

    #[test]
    fn test_backend_snake_case_bundle() {
        let bundle: InsightBundle = serde_json::from_value(json!({
            "hiring_trends": [
                {"department": "Engineering", "count": 4, "trend": "stable", "key_roles": ["SRE"]}
            ],
            "leadership_changes": [
                {"name": "Ada", "new_role": "CTO", "date": "2024-01-10", "type": "hire"}
            ]
        }))
        .unwrap();

        assert_eq!(bundle.hiring_trends[0].trend, TrendDirection::Stable);
        assert_eq!(bundle.hiring_trends[0].key_roles, vec!["SRE"]);
        assert_eq!(bundle.leadership_changes[0].previous_role, None);
        assert!(bundle.skills_trends.is_empty());
    }
}

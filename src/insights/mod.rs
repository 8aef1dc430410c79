// src/insights/mod.rs
//! Insight derivation and reconciliation with service-provided insights

pub mod derive;
pub mod placeholders;

pub use derive::{
    generate_branch_expansions, generate_department_growth, generate_hiring_trends,
    generate_leadership_changes, generate_skills_trends, DEPARTMENT_PALETTE,
};
pub use placeholders::{FixedPlaceholders, PlaceholderSource, RandomPlaceholders};

use tracing::debug;

use crate::types::{
    CompanyRecord, CompetitorRecord, CompetitorSummary, InsightBundle, PartialInsightBundle,
};

/// Compute every derivable insight slice from `record`. Competitor comparison
/// only comes from the service and is left empty.
pub fn derive_insights(record: &CompanyRecord, source: &dyn PlaceholderSource) -> InsightBundle {
    InsightBundle {
        hiring_trends: generate_hiring_trends(&record.job_postings),
        leadership_changes: generate_leadership_changes(&record.employees, source),
        branch_expansions: generate_branch_expansions(&record.recent_posts),
        skills_trends: generate_skills_trends(&record.job_postings, source),
        department_growth: generate_department_growth(&record.job_postings),
        competitor_comparison: Vec::new(),
    }
}

/// Merge service insights over derived ones, field by field.
///
/// A field the service sent (non-null, even an empty list) is taken as is;
/// only absent fields fall back to the derived value.
pub fn reconcile(service: Option<PartialInsightBundle>, derived: InsightBundle) -> InsightBundle {
    let Some(service) = service else {
        return derived;
    };

    InsightBundle {
        hiring_trends: service.hiring_trends.unwrap_or(derived.hiring_trends),
        leadership_changes: service
            .leadership_changes
            .unwrap_or(derived.leadership_changes),
        branch_expansions: service
            .branch_expansions
            .unwrap_or(derived.branch_expansions),
        skills_trends: service.skills_trends.unwrap_or(derived.skills_trends),
        department_growth: service
            .department_growth
            .unwrap_or(derived.department_growth),
        competitor_comparison: service
            .competitor_comparison
            .unwrap_or(derived.competitor_comparison),
    }
}

/// Insights for display: whatever the service supplied inside `record`,
/// completed with locally derived values.
pub fn insights_for(record: &CompanyRecord, source: &dyn PlaceholderSource) -> InsightBundle {
    if record.insights.is_none() {
        debug!("No service insights for {}, deriving locally", record.name);
    }
    reconcile(record.insights.clone(), derive_insights(record, source))
}

/// Leaders of a comparison. The earliest record wins a tie.
pub fn summarize_competitors(records: &[CompetitorRecord]) -> Option<CompetitorSummary> {
    fn leader<F: Fn(&CompetitorRecord) -> u32>(records: &[CompetitorRecord], metric: F) -> String {
        let mut best = &records[0];
        for record in &records[1..] {
            if metric(record) > metric(best) {
                best = record;
            }
        }
        best.name.clone()
    }

    if records.is_empty() {
        return None;
    }

    Some(CompetitorSummary {
        highest_hiring_activity: leader(records, |r| r.hiring_activity),
        most_leadership_changes: leader(records, |r| r.leadership_changes),
        highest_market_activity: leader(records, |r| r.market_activity),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HiringTrend, TrendDirection};
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn fixed() -> FixedPlaceholders {
        FixedPlaceholders {
            now: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
            growth: 7,
        }
    }

    fn record() -> CompanyRecord {
        serde_json::from_value(json!({
            "name": "Acme",
            "industry": "technology",
            "size": "201-1000",
            "headquarters": "Austin, TX",
            "recentPosts": [
                {"id": "p1", "content": "Opening our Denver office", "date": "2024-04-01", "engagement": 5, "type": "general"}
            ],
            "jobPostings": [
                {"id": "j1", "title": "Engineer", "location": "Remote", "department": "Engineering",
                 "datePosted": "2024-04-02", "requirements": ["Rust", "AWS"]},
                {"id": "j2", "title": "AE", "location": "NYC", "department": "Sales",
                 "datePosted": "2024-04-03", "requirements": ["Rust"]}
            ],
            "employees": [
                {"id": "e1", "name": "Ada", "title": "VP Engineering", "department": "Engineering",
                 "tenure": "3 years", "skills": [], "recentActivity": []}
            ]
        }))
        .unwrap()
    }

    fn competitor(name: &str, hiring: u32, leadership: u32, market: u32) -> CompetitorRecord {
        CompetitorRecord {
            name: name.to_string(),
            hiring_activity: hiring,
            leadership_changes: leadership,
            market_activity: market,
            employee_count: None,
            recent_expansions: None,
            social_engagement: None,
            key_strengths: Vec::new(),
            recent_milestones: Vec::new(),
        }
    }

    #[test]
    fn test_derive_insights_fills_every_slice() {
        let bundle = derive_insights(&record(), &fixed());

        assert_eq!(bundle.hiring_trends.len(), 2);
        assert_eq!(bundle.leadership_changes.len(), 1);
        assert_eq!(bundle.branch_expansions.len(), 1);
        assert_eq!(bundle.skills_trends[0].skill, "Rust");
        assert_eq!(bundle.skills_trends[0].demand, 100);
        assert_eq!(bundle.department_growth.len(), 2);
        assert!(bundle.competitor_comparison.is_empty());
    }

    #[test]
    fn test_derive_insights_on_empty_record() {
        let empty: CompanyRecord = serde_json::from_value(json!({"name": "Ghost"})).unwrap();
        assert_eq!(derive_insights(&empty, &fixed()), InsightBundle::default());
    }

    #[test]
    fn test_reconcile_service_wins_on_present_fields() {
        let derived = derive_insights(&record(), &fixed());
        let service_trend = HiringTrend {
            department: "Research".to_string(),
            count: 9,
            trend: TrendDirection::Stable,
            key_roles: vec!["Scientist".to_string()],
            growth_rate: Some(4.5),
        };
        let service = PartialInsightBundle {
            hiring_trends: Some(vec![service_trend.clone()]),
            skills_trends: Some(Vec::new()),
            ..Default::default()
        };

        let merged = reconcile(Some(service), derived.clone());
        assert_eq!(merged.hiring_trends, vec![service_trend]);
        // present but empty still wins
        assert!(merged.skills_trends.is_empty());
        assert_eq!(merged.leadership_changes, derived.leadership_changes);
        assert_eq!(merged.department_growth, derived.department_growth);
    }

    #[test]
    fn test_reconcile_without_service() {
        let derived = derive_insights(&record(), &fixed());
        assert_eq!(reconcile(None, derived.clone()), derived);
    }

    #[test]
    fn test_insights_for_uses_embedded_service_bundle() {
        let mut record = record();
        record.insights = Some(
            serde_json::from_value(json!({"departmentGrowth": [
                {"name": "Engineering", "value": 35, "color": "#000000"}
            ]}))
            .unwrap(),
        );

        let bundle = insights_for(&record, &fixed());
        assert_eq!(bundle.department_growth.len(), 1);
        assert_eq!(bundle.department_growth[0].color, "#000000");
        assert_eq!(bundle.hiring_trends.len(), 2);
    }

    #[test]
    fn test_summarize_competitors() {
        assert!(summarize_competitors(&[]).is_none());

        let records = vec![
            competitor("Acme", 80, 2, 60),
            competitor("Globex", 80, 5, 40),
            competitor("Initech", 20, 5, 90),
        ];
        let summary = summarize_competitors(&records).unwrap();
        assert_eq!(summary.highest_hiring_activity, "Acme");
        assert_eq!(summary.most_leadership_changes, "Globex");
        assert_eq!(summary.highest_market_activity, "Initech");
    }
}

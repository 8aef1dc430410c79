// src/insights/derive.rs
//! Best-effort insight slices computed from a raw company record.
//!
//! Groupings keep first-seen order; ties in rankings keep it too.

use chrono::Duration;
use std::collections::HashMap;

use super::placeholders::PlaceholderSource;
use crate::types::{
    BranchExpansion, ChangeType, DepartmentGrowth, Employee, ExpansionType, HiringTrend,
    JobPosting, LeadershipChange, Post, PostCategory, SkillTrend, TrendDirection,
};
use crate::utils::{contains_any_ignore_case, truncate_with_ellipsis};

pub const DEPARTMENT_PALETTE: [&str; 6] = [
    "#3b82f6", "#10b981", "#8b5cf6", "#f59e0b", "#ef4444", "#06b6d4",
];

const LEADERSHIP_KEYWORDS: [&str; 4] = ["manager", "director", "vp", "chief"];
const EXPANSION_KEYWORDS: [&str; 2] = ["office", "location"];

const MAX_KEY_ROLES: usize = 3;
const MAX_LEADERSHIP_CHANGES: usize = 3;
const MAX_BRANCH_EXPANSIONS: usize = 2;
const MAX_SKILLS: usize = 8;
const DETAILS_MAX_CHARS: usize = 100;
const LEADERSHIP_STEP_DAYS: i64 = 10;

pub const PLACEHOLDER_PREVIOUS_ROLE: &str = "Previous Role";
pub const PLACEHOLDER_LOCATION: &str = "New Location";

/// Group items by key, preserving the order in which keys first appear
fn group_in_order<'a, T, F>(items: &'a [T], key: F) -> Vec<(&'a str, Vec<&'a T>)>
where
    F: Fn(&'a T) -> &'a str,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&T>)> = Vec::new();

    for item in items {
        let k = key(item);
        match index.get(k).copied() {
            Some(i) => groups[i].1.push(item),
            None => {
                index.insert(k, groups.len());
                groups.push((k, vec![item]));
            }
        }
    }
    groups
}

/// Postings per department. The trend is always `Up`: without a historical
/// baseline no real direction can be computed.
pub fn generate_hiring_trends(jobs: &[JobPosting]) -> Vec<HiringTrend> {
    group_in_order(jobs, |job| job.department.as_str())
        .into_iter()
        .map(|(department, postings)| {
            let mut key_roles: Vec<String> = Vec::new();
            for job in &postings {
                if key_roles.len() == MAX_KEY_ROLES {
                    break;
                }
                if !key_roles.contains(&job.title) {
                    key_roles.push(job.title.clone());
                }
            }

            HiringTrend {
                department: department.to_string(),
                count: postings.len() as u32,
                trend: TrendDirection::Up,
                key_roles,
                growth_rate: None,
            }
        })
        .collect()
}

/// Leadership entries synthesized from current titles. The first match is
/// presented as a promotion and the rest as hires, dated 10 days apart going
/// back from now. None of this reflects real events.
pub fn generate_leadership_changes(
    employees: &[Employee],
    source: &dyn PlaceholderSource,
) -> Vec<LeadershipChange> {
    let now = source.now();

    employees
        .iter()
        .filter(|e| contains_any_ignore_case(&e.title, &LEADERSHIP_KEYWORDS))
        .take(MAX_LEADERSHIP_CHANGES)
        .enumerate()
        .map(|(i, employee)| {
            let date = now - Duration::days(LEADERSHIP_STEP_DAYS * i as i64);
            let (change_type, previous_role) = if i == 0 {
                (
                    ChangeType::Promotion,
                    Some(PLACEHOLDER_PREVIOUS_ROLE.to_string()),
                )
            } else {
                (ChangeType::Hire, None)
            };

            LeadershipChange {
                name: employee.name.clone(),
                previous_role,
                new_role: employee.title.clone(),
                date: date.format("%Y-%m-%d").to_string(),
                change_type,
            }
        })
        .collect()
}

/// Expansion candidates from posts. Posts carry no structured location, so
/// the location is a placeholder.
///
/// Details hold the post content cut to 100 characters. The `...` suffix is
/// only appended when something was actually cut; shorter posts come through
/// unchanged.
pub fn generate_branch_expansions(posts: &[Post]) -> Vec<BranchExpansion> {
    posts
        .iter()
        .filter(|post| {
            post.category == PostCategory::Expansion
                || contains_any_ignore_case(&post.content, &EXPANSION_KEYWORDS)
        })
        .take(MAX_BRANCH_EXPANSIONS)
        .map(|post| BranchExpansion {
            location: PLACEHOLDER_LOCATION.to_string(),
            date: post.date.clone(),
            expansion_type: ExpansionType::Office,
            details: truncate_with_ellipsis(&post.content, DETAILS_MAX_CHARS),
        })
        .collect()
}

/// Most requested skills. Demand is the share of postings listing the
/// requirement, capped at 100; growth is a placeholder.
pub fn generate_skills_trends(jobs: &[JobPosting], source: &dyn PlaceholderSource) -> Vec<SkillTrend> {
    if jobs.is_empty() {
        return Vec::new();
    }

    let requirements: Vec<&String> = jobs.iter().flat_map(|job| &job.requirements).collect();
    let mut tally: Vec<(&str, usize)> = group_in_order(&requirements, |r| r.as_str())
        .into_iter()
        .map(|(skill, hits)| (skill, hits.len()))
        .collect();
    // stable: equal counts stay in first-seen order
    tally.sort_by(|a, b| b.1.cmp(&a.1));

    let total = jobs.len() as f64;
    tally
        .into_iter()
        .take(MAX_SKILLS)
        .map(|(skill, count)| SkillTrend {
            skill: skill.to_string(),
            demand: ((100.0 * count as f64 / total).round() as u32).min(100),
            growth: source.growth_percent(),
        })
        .collect()
}

/// Posting counts per department with a display color cycling through
/// [`DEPARTMENT_PALETTE`]
pub fn generate_department_growth(jobs: &[JobPosting]) -> Vec<DepartmentGrowth> {
    group_in_order(jobs, |job| job.department.as_str())
        .into_iter()
        .enumerate()
        .map(|(i, (department, postings))| DepartmentGrowth {
            name: department.to_string(),
            value: postings.len() as f64,
            color: DEPARTMENT_PALETTE[i % DEPARTMENT_PALETTE.len()].to_string(),
        })
        .collect()
}

use std::collections::HashMap;

use crate::models::Project;

/// How many members the Team Workload panel lists
pub const MAX_MEMBERS: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct MemberWorkload {
    pub member: String,
    pub projects: usize,
    /// Fraction of all projects this member appears on
    pub share: f64,
}

/// Rank team members by the number of projects they are on.
///
/// A name listed twice on one team counts twice. Ties keep the order in
/// which members were first seen. Only the top [`MAX_MEMBERS`] are kept.
pub fn team_workload(projects: &[Project]) -> Vec<MemberWorkload> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for member in projects.iter().flat_map(|p| p.team.iter()) {
        let slot = *index.entry(member.as_str()).or_insert_with(|| {
            counts.push((member.as_str(), 0));
            counts.len() - 1
        });
        counts[slot].1 += 1;
    }

    // stable, so first-seen order survives among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(MAX_MEMBERS);

    let total = projects.len();
    counts
        .into_iter()
        .map(|(member, count)| MemberWorkload {
            member: member.to_string(),
            projects: count,
            share: if total == 0 { 0.0 } else { count as f64 / total as f64 },
        })
        .collect()
}

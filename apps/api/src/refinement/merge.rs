//! Merge reconciler: folds a refinement response back into the original
//! record.
//!
//! Pure and infallible. Only `summary`, `skills` and each item's
//! `refined_bullets` may change; item order, identity and every
//! user-authored field come from the original record.

use std::collections::HashMap;

use crate::models::resume::{Refinable, ResumeRecord};
use crate::refinement::response::{Fragment, RefinementResponse};

pub fn merge(original: &ResumeRecord, response: &RefinementResponse) -> ResumeRecord {
    let summary = match response.summary.as_deref() {
        Some(summary) if !summary.trim().is_empty() => summary.to_string(),
        _ => original.summary.clone(),
    };

    let skills = match response.skills.as_deref() {
        Some(skills) if !skills.is_empty() => skills.to_vec(),
        _ => original.skills.clone(),
    };

    ResumeRecord {
        summary,
        skills,
        positions: merge_items(&original.positions, response.positions.as_deref()),
        projects: merge_items(&original.projects, response.projects.as_deref()),
        activities: merge_items(&original.activities, response.activities.as_deref()),
        ..original.clone()
    }
}

/// Rebuilds `items` in their original order, swapping in refined bullets by id.
///
/// Items without a matching fragment are kept as stored, and fragments for
/// ids not present in `items` are dropped.
fn merge_items<T: Refinable>(items: &[T], fragments: Option<&[Fragment]>) -> Vec<T> {
    let Some(fragments) = fragments else {
        return items.to_vec();
    };

    // First fragment wins if the response repeats an id.
    let mut by_id: HashMap<&str, &[String]> = HashMap::with_capacity(fragments.len());
    for fragment in fragments {
        by_id
            .entry(fragment.id.as_str())
            .or_insert(fragment.refined_bullets.as_slice());
    }

    items
        .iter()
        .map(|item| match by_id.get(item.id()) {
            Some(bullets) => item.with_refined_bullets(bullets.to_vec()),
            None => item.clone(),
        })
        .collect()
}

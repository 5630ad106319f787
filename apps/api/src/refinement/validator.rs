//! Response validation: checks a parsed refinement response against the
//! request it answers.
//!
//! Order of checks:
//! 1. `summary` and `skills` are present (empty values are fine)
//! 2. every non-empty input collection has a fragment list of the same length
//! 3. every input id appears exactly once among those fragments
//! 4. every fragment carries at least one bullet
//!
//! A violation fails the attempt; the generation client retries it.

use std::collections::HashMap;

use crate::models::resume::ResumeRecord;
use crate::refinement::error::{Collection, SchemaViolation};
use crate::refinement::response::{Fragment, RefinementResponse};
use crate::refinement::schema::{input_ids, required_collections};

pub fn validate_response(
    record: &ResumeRecord,
    response: &RefinementResponse,
) -> Result<(), SchemaViolation> {
    if response.summary.is_none() {
        return Err(SchemaViolation::MissingField { field: "summary" });
    }
    if response.skills.is_none() {
        return Err(SchemaViolation::MissingField { field: "skills" });
    }

    for collection in required_collections(record) {
        let fragments = response
            .fragments(collection)
            .ok_or(SchemaViolation::MissingCollection { collection })?;
        validate_collection(collection, &input_ids(record, collection), fragments)?;
    }

    Ok(())
}

fn validate_collection(
    collection: Collection,
    ids: &[&str],
    fragments: &[Fragment],
) -> Result<(), SchemaViolation> {
    if fragments.len() != ids.len() {
        return Err(SchemaViolation::CountMismatch {
            collection,
            expected: ids.len(),
            actual: fragments.len(),
        });
    }

    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(fragments.len());
    for fragment in fragments {
        *seen.entry(fragment.id.as_str()).or_default() += 1;
    }

    for id in ids {
        match seen.get(id).copied().unwrap_or(0) {
            0 => {
                return Err(SchemaViolation::MissingId {
                    collection,
                    id: id.to_string(),
                })
            }
            1 => {}
            _ => {
                return Err(SchemaViolation::DuplicateId {
                    collection,
                    id: id.to_string(),
                })
            }
        }
    }

    if let Some(empty) = fragments.iter().find(|f| f.refined_bullets.is_empty()) {
        return Err(SchemaViolation::EmptyContent {
            collection,
            id: empty.id.clone(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Position, Project};

    fn fragment(id: &str, bullets: &[&str]) -> Fragment {
        Fragment {
            id: id.to_string(),
            refined_bullets: bullets.iter().map(|b| b.to_string()).collect(),
        }
    }

    fn record(position_ids: &[&str], project_ids: &[&str]) -> ResumeRecord {
        ResumeRecord {
            positions: position_ids
                .iter()
                .map(|id| Position {
                    id: id.to_string(),
                    ..Default::default()
                })
                .collect(),
            projects: project_ids
                .iter()
                .map(|id| Project {
                    id: id.to_string(),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    fn base_response() -> RefinementResponse {
        RefinementResponse {
            summary: Some("Engineer".to_string()),
            skills: Some(vec!["Rust".to_string()]),
            ..Default::default()
        }
    }

    #[test]
    fn test_accepts_fragments_in_any_order() {
        let record = record(&["a", "b"], &[]);
        let response = RefinementResponse {
            positions: Some(vec![fragment("b", &["B1"]), fragment("a", &["A1", "A2"])]),
            ..base_response()
        };
        assert!(validate_response(&record, &response).is_ok());
    }

    #[test]
    fn test_empty_summary_and_skills_are_present() {
        let response = RefinementResponse {
            summary: Some(String::new()),
            skills: Some(vec![]),
            ..Default::default()
        };
        assert!(validate_response(&ResumeRecord::default(), &response).is_ok());
    }

    #[test]
    fn test_missing_summary_rejected() {
        let response = RefinementResponse {
            summary: None,
            ..base_response()
        };
        assert_eq!(
            validate_response(&ResumeRecord::default(), &response),
            Err(SchemaViolation::MissingField { field: "summary" })
        );
    }

    #[test]
    fn test_missing_skills_rejected() {
        let response = RefinementResponse {
            skills: None,
            ..base_response()
        };
        assert_eq!(
            validate_response(&ResumeRecord::default(), &response),
            Err(SchemaViolation::MissingField { field: "skills" })
        );
    }

    #[test]
    fn test_omitted_collection_ok_when_input_empty() {
        let record = record(&["a"], &[]);
        let response = RefinementResponse {
            positions: Some(vec![fragment("a", &["A1"])]),
            projects: None,
            ..base_response()
        };
        assert!(validate_response(&record, &response).is_ok());
    }

    #[test]
    fn test_omitted_collection_rejected_when_input_nonempty() {
        let record = record(&["a"], &["p"]);
        let response = RefinementResponse {
            positions: Some(vec![fragment("a", &["A1"])]),
            ..base_response()
        };
        assert_eq!(
            validate_response(&record, &response),
            Err(SchemaViolation::MissingCollection {
                collection: Collection::Projects
            })
        );
    }

    #[test]
    fn test_count_mismatch_rejected() {
        let record = record(&["a", "b"], &[]);
        let response = RefinementResponse {
            positions: Some(vec![fragment("a", &["A1"])]),
            ..base_response()
        };
        assert_eq!(
            validate_response(&record, &response),
            Err(SchemaViolation::CountMismatch {
                collection: Collection::Positions,
                expected: 2,
                actual: 1,
            })
        );
    }

    #[test]
    fn test_missing_project_id_is_named() {
        let record = record(&[], &["p1", "p2"]);
        let response = RefinementResponse {
            projects: Some(vec![fragment("p1", &["X"]), fragment("p3", &["Y"])]),
            ..base_response()
        };
        let err = validate_response(&record, &response).unwrap_err();
        assert_eq!(
            err,
            SchemaViolation::MissingId {
                collection: Collection::Projects,
                id: "p2".to_string(),
            }
        );
        assert_eq!(err.offending_id(), Some("p2"));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let record = record(&["a", "b"], &[]);
        let response = RefinementResponse {
            positions: Some(vec![fragment("a", &["A1"]), fragment("a", &["A2"])]),
            ..base_response()
        };
        // "b" is missing as well, but the first input id is reported first.
        assert_eq!(
            validate_response(&record, &response),
            Err(SchemaViolation::DuplicateId {
                collection: Collection::Positions,
                id: "a".to_string(),
            })
        );
    }

    #[test]
    fn test_empty_bullets_rejected() {
        let record = record(&["a", "b"], &[]);
        let response = RefinementResponse {
            positions: Some(vec![fragment("a", &["A1"]), fragment("b", &[])]),
            ..base_response()
        };
        assert_eq!(
            validate_response(&record, &response),
            Err(SchemaViolation::EmptyContent {
                collection: Collection::Positions,
                id: "b".to_string(),
            })
        );
    }

    #[test]
    fn test_extra_fragments_for_empty_input_are_ignored() {
        let record = record(&["a"], &[]);
        let response = RefinementResponse {
            positions: Some(vec![fragment("a", &["A1"])]),
            projects: Some(vec![fragment("ghost", &["Boo"])]),
            ..base_response()
        };
        assert!(validate_response(&record, &response).is_ok());
    }
}

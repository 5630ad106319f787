//! Expected-response schema, derived per request from which collections the
//! record actually populates.

use serde_json::{json, Map, Value};

use crate::models::resume::ResumeRecord;
use crate::refinement::error::Collection;

/// Number of items in `collection` that the response must refine.
pub fn input_len(record: &ResumeRecord, collection: Collection) -> usize {
    match collection {
        Collection::Positions => record.positions.len(),
        Collection::Projects => record.projects.len(),
        Collection::Activities => record.activities.len(),
    }
}

/// Identifiers, in input order, of the items in `collection`.
pub fn input_ids(record: &ResumeRecord, collection: Collection) -> Vec<&str> {
    match collection {
        Collection::Positions => record.positions.iter().map(|p| p.id.as_str()).collect(),
        Collection::Projects => record.projects.iter().map(|p| p.id.as_str()).collect(),
        Collection::Activities => record.activities.iter().map(|a| a.id.as_str()).collect(),
    }
}

/// Collections that are non-empty in `record`, in canonical order.
pub fn required_collections(record: &ResumeRecord) -> Vec<Collection> {
    Collection::ALL
        .into_iter()
        .filter(|c| input_len(record, *c) > 0)
        .collect()
}

/// Builds the JSON schema the model output must satisfy for `record`.
///
/// `summary` and `skills` are always required. A reconcilable collection is
/// present (and required, with a fixed item count) only when the record
/// holds items for it; empty collections are left out entirely.
pub fn response_schema(record: &ResumeRecord) -> Value {
    let mut properties = Map::new();
    properties.insert(
        "summary".to_string(),
        json!({
            "type": "string",
            "description": "Professional summary tailored to the target job description."
        }),
    );
    properties.insert(
        "skills".to_string(),
        json!({
            "type": "array",
            "items": {"type": "string"},
            "description": "Relevant skills, refined and ordered by relevance to the job."
        }),
    );

    let mut required = vec![json!("summary"), json!("skills")];

    for collection in required_collections(record) {
        let count = input_len(record, collection);
        properties.insert(
            collection.key().to_string(),
            json!({
                "type": "array",
                "minItems": count,
                "maxItems": count,
                "items": {
                    "type": "object",
                    "properties": {
                        "id": {"type": "string", "enum": input_ids(record, collection)},
                        "refined_bullets": {
                            "type": "array",
                            "minItems": 1,
                            "items": {"type": "string"}
                        }
                    },
                    "required": ["id", "refined_bullets"]
                }
            }),
        );
        required.push(json!(collection.key()));
    }

    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

use serde::{Deserialize, Serialize};

use crate::refinement::error::Collection;

/// Refined bullets for a single input item, matched back by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    pub id: String,
    pub refined_bullets: Vec<String>,
}

/// Structured output of one refinement call.
///
/// Every field is optional at the serde layer so that absence can be told
/// apart from emptiness; `validator::validate_response` decides which
/// absences are acceptable for a given record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RefinementResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positions: Option<Vec<Fragment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Fragment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activities: Option<Vec<Fragment>>,
}

impl RefinementResponse {
    pub fn fragments(&self, collection: Collection) -> Option<&[Fragment]> {
        match collection {
            Collection::Positions => self.positions.as_deref(),
            Collection::Projects => self.projects.as_deref(),
            Collection::Activities => self.activities.as_deref(),
        }
    }
}

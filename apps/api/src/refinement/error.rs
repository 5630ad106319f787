//! Error taxonomy for the refinement pipeline.
//!
//! Per-attempt failures (`AttemptError`) are recovered by the retry loop in
//! `client`. Only `RefineError` leaves the primary path.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::llm_client::LlmError;

/// One of the three collections whose items receive refined bullets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Positions,
    Projects,
    Activities,
}

impl Collection {
    pub const ALL: [Collection; 3] = [
        Collection::Positions,
        Collection::Projects,
        Collection::Activities,
    ];

    /// Key used for this collection in the response JSON.
    pub fn key(self) -> &'static str {
        match self {
            Collection::Positions => "positions",
            Collection::Projects => "projects",
            Collection::Activities => "activities",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A precondition on the record failed. Never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// The model output did not match the shape the request demanded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaViolation {
    #[error("response is missing required field '{field}'")]
    MissingField { field: &'static str },

    #[error("response is missing refined {collection}")]
    MissingCollection { collection: Collection },

    #[error("expected {expected} refined {collection}, got {actual}")]
    CountMismatch {
        collection: Collection,
        expected: usize,
        actual: usize,
    },

    #[error("no refined content for {collection} id '{id}'")]
    MissingId { collection: Collection, id: String },

    #[error("{collection} id '{id}' was refined more than once")]
    DuplicateId { collection: Collection, id: String },

    #[error("refined content for {collection} id '{id}' is empty")]
    EmptyContent { collection: Collection, id: String },

    #[error("response could not be parsed: {0}")]
    Malformed(String),
}

impl SchemaViolation {
    /// The identifier the violation is about, if it concerns a single item.
    pub fn offending_id(&self) -> Option<&str> {
        match self {
            SchemaViolation::MissingId { id, .. }
            | SchemaViolation::DuplicateId { id, .. }
            | SchemaViolation::EmptyContent { id, .. } => Some(id),
            _ => None,
        }
    }
}

/// A single generation attempt failed. Always retryable.
#[derive(Debug, Error)]
pub enum AttemptError {
    #[error("no response within {0:?}")]
    Timeout(Duration),

    #[error("schema violation: {0}")]
    SchemaViolation(#[from] SchemaViolation),

    #[error("transport failure: {message}")]
    Transport { message: String, overloaded: bool },
}

impl AttemptError {
    pub fn is_overloaded(&self) -> bool {
        matches!(
            self,
            AttemptError::Transport {
                overloaded: true,
                ..
            }
        )
    }
}

impl From<LlmError> for AttemptError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Parse(e) => SchemaViolation::Malformed(e.to_string()).into(),
            LlmError::EmptyContent => {
                SchemaViolation::Malformed("model returned no text".to_string()).into()
            }
            LlmError::Overloaded { .. } => AttemptError::Transport {
                message: err.to_string(),
                overloaded: true,
            },
            LlmError::Http(_) | LlmError::Api { .. } => AttemptError::Transport {
                message: err.to_string(),
                overloaded: false,
            },
        }
    }
}

/// Category of a terminal refinement failure, for caller-facing messaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The upstream service reported it was overloaded or rate limited.
    Overloaded,
    Other,
}

/// Terminal error of the primary refinement path.
#[derive(Debug, Error)]
pub enum RefineError {
    #[error("invalid resume: {0}")]
    Validation(#[from] ValidationError),

    #[error("{} after {attempts} attempts: {source}", failure_label(.kind))]
    Failed {
        attempts: u32,
        kind: FailureKind,
        #[source]
        source: AttemptError,
    },
}

fn failure_label(kind: &FailureKind) -> &'static str {
    match kind {
        FailureKind::Overloaded => "AI service is overloaded; refinement failed",
        FailureKind::Other => "refinement failed",
    }
}

/// Cover letter generation failed. Absorbed by the orchestrator.
#[derive(Debug, Error)]
pub enum CoverLetterError {
    #[error("invalid resume: {0}")]
    Validation(#[from] ValidationError),

    #[error("cover letter generation failed: {0}")]
    Generation(String),
}

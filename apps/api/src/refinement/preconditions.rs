//! Synchronous gate run before any call to the generation service.

use crate::models::resume::{Category, ResumeRecord};
use crate::refinement::error::ValidationError;

/// Rejects records the refinement pipeline cannot work with.
///
/// Deterministic and side-effect free; the generation client re-runs it
/// before every attempt.
pub fn validate_record(record: &ResumeRecord) -> Result<(), ValidationError> {
    if record.target_job.description.trim().is_empty() {
        return Err(ValidationError::new(
            "target_job.description",
            "Job description is required for optimization",
        ));
    }

    let category = record.category.ok_or_else(|| {
        ValidationError::new("category", "Select whether you have prior work experience")
    })?;

    let has_skills = !record.skills.is_empty();

    match category {
        Category::Experienced if record.positions.is_empty() && !has_skills => {
            Err(ValidationError::new(
                "positions",
                "Please provide at least work experience or skills",
            ))
        }
        Category::EntryLevel if record.education.is_empty() && !has_skills => {
            Err(ValidationError::new(
                "education",
                "Please provide at least education or skills",
            ))
        }
        _ => Ok(()),
    }
}

/// Preconditions for cover letter generation.
pub fn validate_for_cover_letter(record: &ResumeRecord) -> Result<(), ValidationError> {
    if record.target_job.description.trim().is_empty() {
        return Err(ValidationError::new(
            "target_job.description",
            "Job description is required for cover letter generation",
        ));
    }

    if record.profile.full_name.trim().is_empty() {
        return Err(ValidationError::new(
            "profile.full_name",
            "Your name is required for cover letter generation",
        ));
    }

    Ok(())
}

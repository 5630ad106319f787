//! Cover letter use case: single attempt, no retry, bounded by a deadline.

use std::sync::Arc;
use std::time::Duration;

use crate::models::resume::ResumeRecord;
use crate::refinement::error::CoverLetterError;
use crate::refinement::preconditions::validate_for_cover_letter;
use crate::refinement::CoverLetterGenerator;

pub const DEFAULT_COVER_LETTER_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Clone)]
pub struct CoverLetterComposer {
    generator: Arc<dyn CoverLetterGenerator>,
    timeout: Duration,
}

impl CoverLetterComposer {
    pub fn new(generator: Arc<dyn CoverLetterGenerator>) -> Self {
        Self {
            generator,
            timeout: DEFAULT_COVER_LETTER_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validates the record and asks the generator for a letter.
    /// A blank letter or a missed deadline counts as a failed generation.
    pub async fn compose(&self, record: &ResumeRecord) -> Result<String, CoverLetterError> {
        validate_for_cover_letter(record)?;

        let letter = tokio::time::timeout(self.timeout, self.generator.generate(record))
            .await
            .map_err(|_| {
                CoverLetterError::Generation(format!("no letter within {:?}", self.timeout))
            })??;
        let letter = letter.trim();
        if letter.is_empty() {
            return Err(CoverLetterError::Generation(
                "generator returned an empty letter".to_string(),
            ));
        }

        Ok(letter.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{experienced_record, FixedCoverLetter};

    #[tokio::test(start_paused = true)]
    async fn test_stalled_generator_times_out() {
        let generator = FixedCoverLetter::hanging();
        let composer = CoverLetterComposer::new(generator.clone())
            .with_timeout(Duration::from_secs(5));

        let started = tokio::time::Instant::now();
        let err = composer.compose(&experienced_record()).await.unwrap_err();

        assert!(matches!(err, CoverLetterError::Generation(_)));
        assert!(started.elapsed() >= Duration::from_secs(5));
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn test_compose_trims_letter() {
        let generator = FixedCoverLetter::ok("\n  Dear Hiring Manager,\n");
        let composer = CoverLetterComposer::new(generator.clone());

        let letter = composer.compose(&experienced_record()).await.unwrap();

        assert_eq!(letter, "Dear Hiring Manager,");
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn test_missing_name_skips_generator() {
        let generator = FixedCoverLetter::ok("letter");
        let composer = CoverLetterComposer::new(generator.clone());
        let mut record = experienced_record();
        record.profile.full_name.clear();

        let err = composer.compose(&record).await.unwrap_err();

        assert!(matches!(err, CoverLetterError::Validation(_)));
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_blank_letter_is_an_error() {
        let composer = CoverLetterComposer::new(FixedCoverLetter::ok("   "));
        let err = composer.compose(&experienced_record()).await.unwrap_err();
        assert!(matches!(err, CoverLetterError::Generation(_)));
    }

    #[tokio::test]
    async fn test_generator_failure_propagates() {
        let composer = CoverLetterComposer::new(FixedCoverLetter::failing());
        let err = composer.compose(&experienced_record()).await.unwrap_err();
        assert!(matches!(err, CoverLetterError::Generation(_)));
    }
}

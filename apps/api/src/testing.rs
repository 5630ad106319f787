//! In-memory fakes for the pipeline's capability traits, shared by unit tests.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::generated::GeneratedResumeSummary;
use crate::models::resume::{Category, Position, ResumeRecord};
use crate::refinement::schema::{input_ids, required_collections};
use crate::refinement::{
    AttemptError, Collection, CoverLetterError, CoverLetterGenerator, Fragment,
    RefinementResponse, ResumeOptimizer,
};
use crate::storage::{DraftStore, ResumeRepository, StorageError};

/// Experienced candidate with two positions (`a`, `b`) and no projects.
pub fn experienced_record() -> ResumeRecord {
    let position = |id: &str, company: &str| Position {
        id: id.to_string(),
        company: company.to_string(),
        role: "Software Engineer".to_string(),
        start_date: "2019-03".to_string(),
        end_date: "2022-08".to_string(),
        is_current: false,
        raw_description: format!("worked on services at {company}"),
        refined_bullets: vec![],
    };

    let mut record = ResumeRecord {
        category: Some(Category::Experienced),
        positions: vec![position("a", "Initech"), position("b", "Globex")],
        skills: vec!["rust".to_string(), "postgres".to_string()],
        ..Default::default()
    };
    record.target_job.title = "Backend Engineer".to_string();
    record.target_job.company = "Acme".to_string();
    record.target_job.description = "Build reliable Rust services on PostgreSQL.".to_string();
    record.profile.full_name = "Sam Rivera".to_string();
    record
}

/// A response that passes validation for `record`, tagged so tests can tell
/// attempts apart.
pub fn response_for(record: &ResumeRecord, tag: &str) -> RefinementResponse {
    let mut response = RefinementResponse {
        summary: Some(format!("{tag} summary")),
        skills: Some(vec![format!("{tag} skill")]),
        ..Default::default()
    };
    for collection in required_collections(record) {
        let fragments = input_ids(record, collection)
            .into_iter()
            .map(|id| Fragment {
                id: id.to_string(),
                refined_bullets: vec![format!("{tag} {id}")],
            })
            .collect();
        match collection {
            Collection::Positions => response.positions = Some(fragments),
            Collection::Projects => response.projects = Some(fragments),
            Collection::Activities => response.activities = Some(fragments),
        }
    }
    response
}

pub enum Step {
    Respond(RefinementResponse),
    Fail(AttemptError),
    /// Never answers within any sane deadline.
    Hang,
}

/// Plays back a fixed script of attempt outcomes.
pub struct ScriptedOptimizer {
    script: Mutex<VecDeque<Step>>,
    calls: AtomicUsize,
}

impl ScriptedOptimizer {
    pub fn new(steps: Vec<Step>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(steps.into()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResumeOptimizer for ScriptedOptimizer {
    async fn optimize(&self, _record: &ResumeRecord) -> Result<RefinementResponse, AttemptError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let step = self.script.lock().unwrap().pop_front();
        match step {
            Some(Step::Respond(response)) => Ok(response),
            Some(Step::Fail(err)) => Err(err),
            Some(Step::Hang) => {
                tokio::time::sleep(Duration::from_secs(24 * 60 * 60)).await;
                Err(AttemptError::Transport {
                    message: "hung call finished".to_string(),
                    overloaded: false,
                })
            }
            None => Err(AttemptError::Transport {
                message: "script exhausted".to_string(),
                overloaded: false,
            }),
        }
    }
}

/// Returns the same letter (or the same failure) on every call.
pub struct FixedCoverLetter {
    letter: Option<String>,
    hang: bool,
    calls: AtomicUsize,
}

impl FixedCoverLetter {
    pub fn ok(letter: &str) -> Arc<Self> {
        Arc::new(Self {
            letter: Some(letter.to_string()),
            hang: false,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            letter: None,
            hang: false,
            calls: AtomicUsize::new(0),
        })
    }

    /// Never answers.
    pub fn hanging() -> Arc<Self> {
        Arc::new(Self {
            letter: Some("too late".to_string()),
            hang: true,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CoverLetterGenerator for FixedCoverLetter {
    async fn generate(&self, _record: &ResumeRecord) -> Result<String, CoverLetterError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.hang {
            std::future::pending::<()>().await;
        }
        self.letter
            .clone()
            .ok_or_else(|| CoverLetterError::Generation("upstream exploded".to_string()))
    }
}

struct StoredResume {
    user_id: Uuid,
    title: String,
    record: ResumeRecord,
    created_at: DateTime<Utc>,
}

#[derive(Default)]
pub struct MemoryRepository {
    resumes: Mutex<HashMap<Uuid, StoredResume>>,
    reject_writes: bool,
}

impl MemoryRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Every save fails as if the stored payload were corrupt.
    pub fn rejecting_writes() -> Arc<Self> {
        Arc::new(Self {
            reject_writes: true,
            ..Self::default()
        })
    }
}

#[async_trait]
impl ResumeRepository for MemoryRepository {
    async fn save_generated(
        &self,
        user_id: Uuid,
        title: &str,
        record: &ResumeRecord,
    ) -> Result<Uuid, StorageError> {
        if self.reject_writes {
            let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
            return Err(StorageError::Serialization(err));
        }
        let id = Uuid::new_v4();
        self.resumes.lock().unwrap().insert(
            id,
            StoredResume {
                user_id,
                title: title.to_string(),
                record: record.clone(),
                created_at: Utc::now(),
            },
        );
        Ok(id)
    }

    async fn update_generated(
        &self,
        id: Uuid,
        title: &str,
        record: &ResumeRecord,
    ) -> Result<bool, StorageError> {
        let mut resumes = self.resumes.lock().unwrap();
        match resumes.get_mut(&id) {
            Some(stored) => {
                stored.title = title.to_string();
                stored.record = record.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_generated(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<GeneratedResumeSummary>, StorageError> {
        let resumes = self.resumes.lock().unwrap();
        let mut summaries: Vec<GeneratedResumeSummary> = resumes
            .iter()
            .filter(|(_, stored)| stored.user_id == user_id)
            .map(|(id, stored)| GeneratedResumeSummary {
                id: *id,
                title: stored.title.clone(),
                company: Some(stored.record.target_job.company.clone())
                    .filter(|c| !c.is_empty()),
                created_at: stored.created_at,
            })
            .collect();
        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(summaries)
    }

    async fn get_generated(&self, id: Uuid) -> Result<Option<ResumeRecord>, StorageError> {
        Ok(self
            .resumes
            .lock()
            .unwrap()
            .get(&id)
            .map(|stored| stored.record.clone()))
    }

    async fn delete_generated(&self, id: Uuid) -> Result<bool, StorageError> {
        Ok(self.resumes.lock().unwrap().remove(&id).is_some())
    }
}

#[derive(Default)]
pub struct MemoryDraftStore {
    drafts: Mutex<HashMap<Uuid, ResumeRecord>>,
}

impl MemoryDraftStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl DraftStore for MemoryDraftStore {
    async fn save_draft(&self, user_id: Uuid, record: &ResumeRecord) -> Result<(), StorageError> {
        self.drafts.lock().unwrap().insert(user_id, record.clone());
        Ok(())
    }

    async fn load_draft(&self, user_id: Uuid) -> Result<Option<ResumeRecord>, StorageError> {
        Ok(self.drafts.lock().unwrap().get(&user_id).cloned())
    }

    async fn clear_draft(&self, user_id: Uuid) -> Result<(), StorageError> {
        self.drafts.lock().unwrap().remove(&user_id);
        Ok(())
    }
}

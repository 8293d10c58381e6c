use async_trait::async_trait;
use lingo_core::model::{
    Challenge, ChallengeId, ChallengeOption, Lesson, LessonId, UserProgress, UserSubscription,
};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),
}

/// Repository contract for lessons, their challenges, and challenge options.
#[async_trait]
pub trait LessonRepository: Send + Sync {
    /// Persist or update a lesson.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the lesson cannot be stored.
    async fn upsert_lesson(&self, lesson: &Lesson) -> Result<(), StorageError>;

    /// Fetch a lesson by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn get_lesson(&self, id: LessonId) -> Result<Lesson, StorageError>;

    /// Persist or update a challenge.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the challenge cannot be stored.
    async fn upsert_challenge(&self, challenge: &Challenge) -> Result<(), StorageError>;

    /// List challenges belonging to a lesson, ordered by their `order` field.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the repository cannot be read.
    async fn list_challenges(&self, lesson_id: LessonId) -> Result<Vec<Challenge>, StorageError>;

    /// Persist or update a challenge option.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the option cannot be stored.
    async fn upsert_option(&self, option: &ChallengeOption) -> Result<(), StorageError>;

    /// List options for a challenge, ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the repository cannot be read.
    async fn list_options(
        &self,
        challenge_id: ChallengeId,
    ) -> Result<Vec<ChallengeOption>, StorageError>;
}

/// Repository contract for learner progress.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the progress cannot be stored.
    async fn upsert_progress(&self, progress: &UserProgress) -> Result<(), StorageError>;

    /// Returns `Ok(None)` when the learner has no progress yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the repository cannot be read.
    async fn get_progress(&self, user_id: &str) -> Result<Option<UserProgress>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the completion cannot be stored.
    async fn mark_completed(
        &self,
        user_id: &str,
        challenge_id: ChallengeId,
    ) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the repository cannot be read.
    async fn completed_challenges(
        &self,
        user_id: &str,
    ) -> Result<HashSet<ChallengeId>, StorageError>;
}

/// Repository contract for subscription records.
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the subscription cannot be stored.
    async fn upsert_subscription(
        &self,
        user_id: &str,
        subscription: UserSubscription,
    ) -> Result<(), StorageError>;

    /// Returns `Ok(None)` when the learner never subscribed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the repository cannot be read.
    async fn get_subscription(
        &self,
        user_id: &str,
    ) -> Result<Option<UserSubscription>, StorageError>;
}

#[derive(Default)]
struct Tables {
    lessons: HashMap<LessonId, Lesson>,
    challenges: HashMap<ChallengeId, Challenge>,
    options: HashMap<ChallengeId, Vec<ChallengeOption>>,
    progress: HashMap<String, UserProgress>,
    completed: HashMap<String, HashSet<ChallengeId>>,
    subscriptions: HashMap<String, UserSubscription>,
}

/// Process-local adapter backing every repository trait.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with_tables<T>(&self, f: impl FnOnce(&mut Tables) -> T) -> Result<T, StorageError> {
        let mut guard = self
            .tables
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(f(&mut guard))
    }
}

#[async_trait]
impl LessonRepository for InMemoryRepository {
    async fn upsert_lesson(&self, lesson: &Lesson) -> Result<(), StorageError> {
        self.with_tables(|t| {
            t.lessons.insert(lesson.id(), lesson.clone());
        })
    }

    async fn get_lesson(&self, id: LessonId) -> Result<Lesson, StorageError> {
        self.with_tables(|t| t.lessons.get(&id).cloned())?
            .ok_or(StorageError::NotFound)
    }

    async fn upsert_challenge(&self, challenge: &Challenge) -> Result<(), StorageError> {
        self.with_tables(|t| {
            t.challenges.insert(challenge.id(), challenge.clone());
        })
    }

    async fn list_challenges(&self, lesson_id: LessonId) -> Result<Vec<Challenge>, StorageError> {
        self.with_tables(|t| {
            let mut found: Vec<Challenge> = t
                .challenges
                .values()
                .filter(|c| c.lesson_id() == lesson_id)
                .cloned()
                .collect();
            found.sort_by_key(|c| (c.order(), c.id()));
            found
        })
    }

    async fn upsert_option(&self, option: &ChallengeOption) -> Result<(), StorageError> {
        self.with_tables(|t| {
            let options = t.options.entry(option.challenge_id).or_default();
            match options.iter_mut().find(|o| o.id == option.id) {
                Some(existing) => *existing = option.clone(),
                None => options.push(option.clone()),
            }
            options.sort_by_key(|o| o.id);
        })
    }

    async fn list_options(
        &self,
        challenge_id: ChallengeId,
    ) -> Result<Vec<ChallengeOption>, StorageError> {
        self.with_tables(|t| t.options.get(&challenge_id).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn upsert_progress(&self, progress: &UserProgress) -> Result<(), StorageError> {
        self.with_tables(|t| {
            t.progress.insert(progress.user_id.clone(), progress.clone());
        })
    }

    async fn get_progress(&self, user_id: &str) -> Result<Option<UserProgress>, StorageError> {
        self.with_tables(|t| t.progress.get(user_id).cloned())
    }

    async fn mark_completed(
        &self,
        user_id: &str,
        challenge_id: ChallengeId,
    ) -> Result<(), StorageError> {
        self.with_tables(|t| {
            t.completed
                .entry(user_id.to_string())
                .or_default()
                .insert(challenge_id);
        })
    }

    async fn completed_challenges(
        &self,
        user_id: &str,
    ) -> Result<HashSet<ChallengeId>, StorageError> {
        self.with_tables(|t| t.completed.get(user_id).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl SubscriptionRepository for InMemoryRepository {
    async fn upsert_subscription(
        &self,
        user_id: &str,
        subscription: UserSubscription,
    ) -> Result<(), StorageError> {
        self.with_tables(|t| {
            t.subscriptions.insert(user_id.to_string(), subscription);
        })
    }

    async fn get_subscription(
        &self,
        user_id: &str,
    ) -> Result<Option<UserSubscription>, StorageError> {
        self.with_tables(|t| t.subscriptions.get(user_id).copied())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub lessons: Arc<dyn LessonRepository>,
    pub progress: Arc<dyn ProgressRepository>,
    pub subscriptions: Arc<dyn SubscriptionRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        Self {
            lessons: Arc::new(repo.clone()),
            progress: Arc::new(repo.clone()),
            subscriptions: Arc::new(repo),
        }
    }
}

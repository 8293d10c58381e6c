use std::sync::Arc;

use lingo_core::model::{
    Lesson, LessonChallenge, LessonId, UserSubscription, lesson_percentage,
};
use storage::repository::{
    LessonRepository, ProgressRepository, StorageError, SubscriptionRepository,
};
use tracing::debug;

use crate::error::LessonServiceError;

/// Everything the quiz view needs, fully materialized.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizData {
    pub lesson: Lesson,
    pub initial_hearts: i32,
    pub initial_percentage: f64,
    pub challenges: Vec<LessonChallenge>,
    pub user_subscription: Option<UserSubscription>,
}

/// Loads lessons together with the learner-specific state around them.
#[derive(Clone)]
pub struct LessonService {
    lessons: Arc<dyn LessonRepository>,
    progress: Arc<dyn ProgressRepository>,
    subscriptions: Arc<dyn SubscriptionRepository>,
}

impl LessonService {
    #[must_use]
    pub fn new(
        lessons: Arc<dyn LessonRepository>,
        progress: Arc<dyn ProgressRepository>,
        subscriptions: Arc<dyn SubscriptionRepository>,
    ) -> Self {
        Self {
            lessons,
            progress,
            subscriptions,
        }
    }

    /// Load a lesson for `user_id`: ordered challenges with completion and options,
    /// starting hearts, completion percentage, and subscription record.
    ///
    /// # Errors
    ///
    /// Returns `LessonServiceError::LessonNotFound` if the lesson does not exist.
    /// Returns `LessonServiceError::NoProgress` if the learner has no progress record.
    /// Returns `LessonServiceError::Storage` if repository access fails.
    pub async fn load_quiz(
        &self,
        lesson_id: LessonId,
        user_id: &str,
    ) -> Result<QuizData, LessonServiceError> {
        let lesson = self.lessons.get_lesson(lesson_id).await.map_err(|err| match err {
            StorageError::NotFound => LessonServiceError::LessonNotFound(lesson_id),
            other => LessonServiceError::Storage(other),
        })?;
        let progress = self
            .progress
            .get_progress(user_id)
            .await?
            .ok_or(LessonServiceError::NoProgress)?;
        let completed = self.progress.completed_challenges(user_id).await?;

        let mut challenges = Vec::new();
        for challenge in self.lessons.list_challenges(lesson_id).await? {
            let options = self.lessons.list_options(challenge.id()).await?;
            challenges.push(LessonChallenge {
                completed: completed.contains(&challenge.id()),
                challenge,
                options,
            });
        }

        let user_subscription = self.subscriptions.get_subscription(user_id).await?;
        let initial_percentage = lesson_percentage(&challenges);
        debug!(
            lesson = %lesson_id,
            challenges = challenges.len(),
            percentage = initial_percentage,
            "quiz loaded"
        );

        Ok(QuizData {
            lesson,
            initial_hearts: progress.hearts,
            initial_percentage,
            challenges,
            user_subscription,
        })
    }
}

//! Shared error types for the services crate.

use thiserror::Error;

use lingo_core::model::LessonId;
use storage::repository::StorageError;

/// Errors emitted by `LessonService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LessonServiceError {
    #[error("lesson {0} not found")]
    LessonNotFound(LessonId),
    #[error("no progress recorded for this learner")]
    NoProgress,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

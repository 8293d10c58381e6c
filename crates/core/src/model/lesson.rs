use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{ChallengeId, ChallengeOptionId, LessonId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonError {
    #[error("lesson title cannot be empty")]
    EmptyTitle,

    #[error("challenge question cannot be empty")]
    EmptyQuestion,

    #[error("challenge option text cannot be empty")]
    EmptyOptionText,
}

//
// ─── LESSON ────────────────────────────────────────────────────────────────────
//

/// A unit of learning content composed of ordered challenges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    id: LessonId,
    title: String,
}

impl Lesson {
    /// # Errors
    ///
    /// Returns `LessonError::EmptyTitle` if the title is blank.
    pub fn new(id: LessonId, title: impl Into<String>) -> Result<Self, LessonError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(LessonError::EmptyTitle);
        }
        Ok(Self { id, title })
    }

    #[must_use]
    pub fn id(&self) -> LessonId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

//
// ─── CHALLENGE ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChallengeKind {
    /// Pick the matching option from a set of cards.
    Select,
    /// Pick the translation of a prompted word.
    Assist,
}

/// A single quiz question within a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    id: ChallengeId,
    lesson_id: LessonId,
    kind: ChallengeKind,
    question: String,
    order: u32,
}

impl Challenge {
    /// # Errors
    ///
    /// Returns `LessonError::EmptyQuestion` if the question is blank.
    pub fn new(
        id: ChallengeId,
        lesson_id: LessonId,
        kind: ChallengeKind,
        question: impl Into<String>,
        order: u32,
    ) -> Result<Self, LessonError> {
        let question = question.into();
        if question.trim().is_empty() {
            return Err(LessonError::EmptyQuestion);
        }
        Ok(Self {
            id,
            lesson_id,
            kind,
            question,
            order,
        })
    }

    #[must_use]
    pub fn id(&self) -> ChallengeId {
        self.id
    }

    #[must_use]
    pub fn lesson_id(&self) -> LessonId {
        self.lesson_id
    }

    #[must_use]
    pub fn kind(&self) -> ChallengeKind {
        self.kind
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Position of the challenge within its lesson.
    #[must_use]
    pub fn order(&self) -> u32 {
        self.order
    }
}

/// A candidate answer for a challenge. The quiz carries these through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeOption {
    pub id: ChallengeOptionId,
    pub challenge_id: ChallengeId,
    pub text: String,
    pub correct: bool,
    pub image_src: Option<String>,
    pub audio_src: Option<String>,
}

impl ChallengeOption {
    /// # Errors
    ///
    /// Returns `LessonError::EmptyOptionText` if the text is blank.
    pub fn new(
        id: ChallengeOptionId,
        challenge_id: ChallengeId,
        text: impl Into<String>,
        correct: bool,
    ) -> Result<Self, LessonError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(LessonError::EmptyOptionText);
        }
        Ok(Self {
            id,
            challenge_id,
            text,
            correct,
            image_src: None,
            audio_src: None,
        })
    }

    #[must_use]
    pub fn with_image(mut self, src: impl Into<String>) -> Self {
        self.image_src = Some(src.into());
        self
    }

    #[must_use]
    pub fn with_audio(mut self, src: impl Into<String>) -> Self {
        self.audio_src = Some(src.into());
        self
    }
}

/// A challenge annotated with the learner's completion status and its options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonChallenge {
    pub challenge: Challenge,
    pub completed: bool,
    pub options: Vec<ChallengeOption>,
}

/// Completion progress of a lesson, 0–100.
///
/// A lesson with no challenges reports 0.
#[must_use]
pub fn lesson_percentage(challenges: &[LessonChallenge]) -> f64 {
    if challenges.is_empty() {
        return 0.0;
    }
    let completed = challenges.iter().filter(|c| c.completed).count();
    #[allow(clippy::cast_precision_loss)]
    let ratio = completed as f64 / challenges.len() as f64;
    ratio * 100.0
}

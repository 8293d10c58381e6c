mod ids;
mod learner;
mod lesson;

pub use ids::{ChallengeId, ChallengeOptionId, LessonId, ParseIdError};
pub use learner::{DEFAULT_HEARTS, UserProgress, UserSubscription, has_active_subscription};
pub use lesson::{
    Challenge, ChallengeKind, ChallengeOption, Lesson, LessonChallenge, LessonError,
    lesson_percentage,
};

use lingo_core::model::{LessonChallenge, LessonId, UserSubscription, has_active_subscription};

/// Session-local quiz state. Seeded once from the loaded lesson and owned by the view.
///
/// Nothing here clamps `hearts` or `percentage`; values are kept as given.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizSession {
    lesson_id: LessonId,
    hearts: i32,
    percentage: f64,
    challenges: Vec<LessonChallenge>,
}

impl QuizSession {
    #[must_use]
    pub fn new(
        lesson_id: LessonId,
        initial_hearts: i32,
        initial_percentage: f64,
        challenges: Vec<LessonChallenge>,
    ) -> Self {
        Self {
            lesson_id,
            hearts: initial_hearts,
            percentage: initial_percentage,
            challenges,
        }
    }

    #[must_use]
    pub fn lesson_id(&self) -> LessonId {
        self.lesson_id
    }

    #[must_use]
    pub fn hearts(&self) -> i32 {
        self.hearts
    }

    #[must_use]
    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    #[must_use]
    pub fn challenges(&self) -> &[LessonChallenge] {
        &self.challenges
    }

    /// Header state for the current render. The subscription flag is derived every call.
    #[must_use]
    pub fn header(&self, subscription: Option<&UserSubscription>) -> HeaderVm {
        HeaderVm {
            hearts: self.hearts,
            percentage: self.percentage,
            has_active_subscription: has_active_subscription(subscription),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderVm {
    pub hearts: i32,
    pub percentage: f64,
    pub has_active_subscription: bool,
}

impl HeaderVm {
    /// Subscribers have unlimited hearts.
    #[must_use]
    pub fn hearts_label(&self) -> String {
        if self.has_active_subscription {
            "∞".to_string()
        } else {
            self.hearts.to_string()
        }
    }

    #[must_use]
    pub fn progress_width(&self) -> String {
        format!("{}%", self.percentage)
    }
}

/// Modals to raise as soon as a lesson opens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LessonNotices {
    pub practice: bool,
    pub out_of_hearts: bool,
}

/// A finished lesson reopens as practice; a learner without hearts or a
/// subscription is told before the first challenge.
#[must_use]
pub fn lesson_notices(
    initial_hearts: i32,
    initial_percentage: f64,
    subscription: Option<&UserSubscription>,
) -> LessonNotices {
    LessonNotices {
        practice: initial_percentage >= 100.0,
        out_of_hearts: initial_hearts <= 0 && !has_active_subscription(subscription),
    }
}

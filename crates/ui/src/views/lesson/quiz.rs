use dioxus::prelude::*;
use lingo_core::model::{LessonChallenge, LessonId, UserSubscription};

use super::Header;
use crate::vm::QuizSession;

/// Quiz for one lesson.
///
/// `hearts` and `percentage` are seeded from the initial props on first render
/// and are not re-seeded when the props change afterwards.
#[component]
pub fn Quiz(
    lesson_id: LessonId,
    initial_hearts: i32,
    initial_percentage: f64,
    initial_lesson_challenges: Vec<LessonChallenge>,
    #[props(!optional)] user_subscription: Option<UserSubscription>,
) -> Element {
    let session = use_signal(|| {
        QuizSession::new(
            lesson_id,
            initial_hearts,
            initial_percentage,
            initial_lesson_challenges.clone(),
        )
    });
    let header = session.read().header(user_subscription.as_ref());
    let challenge_count = session.read().challenges().len();

    rsx! {
        div {
            class: "quiz",
            "data-lesson": "{session.read().lesson_id()}",
            "data-challenges": "{challenge_count}",
            Header {
                hearts: header.hearts,
                percentage: header.percentage,
                has_active_subscription: header.has_active_subscription,
            }
        }
    }
}

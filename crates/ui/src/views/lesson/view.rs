use dioxus::prelude::*;
use lingo_core::model::LessonId;
use services::QuizData;

use super::Quiz;
use crate::context::AppContext;
use crate::store::{use_hearts_modal, use_practice_modal};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::lesson_notices;

#[component]
pub fn LessonView(lesson_id: u64) -> Element {
    let ctx = use_context::<AppContext>();

    // Re-runs when the route hands over a different lesson.
    let resource = use_resource(use_reactive!(|lesson_id| {
        let ctx = ctx.clone();
        let lesson_id = LessonId::new(lesson_id);
        async move {
            let user_id = ctx.current_user_id().ok_or(ViewError::SignedOut)?;
            ctx.lessons()
                .load_quiz(lesson_id, &user_id)
                .await
                .map_err(|err| {
                    tracing::warn!(lesson = %lesson_id, error = %err, "failed to load lesson");
                    ViewError::from(&err)
                })
        }
    }));
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page lesson",
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    LessonReady { key: "{data.lesson.id()}", data }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn LessonReady(data: QuizData) -> Element {
    let hearts_modal = use_hearts_modal();
    let practice_modal = use_practice_modal();
    let notices = lesson_notices(
        data.initial_hearts,
        data.initial_percentage,
        data.user_subscription.as_ref(),
    );

    use_effect(move || {
        if notices.practice {
            practice_modal.open();
        }
        if notices.out_of_hearts {
            hearts_modal.open();
        }
    });

    rsx! {
        h2 { class: "lesson-title", "{data.lesson.title()}" }
        Quiz {
            lesson_id: data.lesson.id(),
            initial_hearts: data.initial_hearts,
            initial_percentage: data.initial_percentage,
            initial_lesson_challenges: data.challenges.clone(),
            user_subscription: data.user_subscription,
        }
    }
}

use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use lingo_core::model::{LessonId, UserSubscription};
use services::{AdminService, IdentityProvider, LessonService, StaticIdentity};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::store::{ModalStores, use_hearts_modal, use_practice_modal};
use crate::views::{HeartsModal, LearnView, LessonView, PracticeModal, Quiz};

struct TestApp {
    identity: Arc<StaticIdentity>,
    admin: Arc<AdminService>,
    lessons: Arc<LessonService>,
}

impl UiApp for TestApp {
    fn current_lesson_id(&self) -> LessonId {
        LessonId::new(1)
    }

    fn identity(&self) -> Arc<dyn IdentityProvider> {
        self.identity.clone()
    }

    fn admin(&self) -> Arc<AdminService> {
        Arc::clone(&self.admin)
    }

    fn lessons(&self) -> Arc<LessonService> {
        Arc::clone(&self.lessons)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuizFixture {
    pub hearts: i32,
    pub percentage: f64,
    pub subscription: Option<UserSubscription>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewKind {
    Learn,
    Lesson(u64),
    Quiz(QuizFixture),
    /// `Quiz` rendered from `first`, then handed `second` as new props.
    ReseededQuiz { first: QuizFixture, second: QuizFixture },
    /// `LessonView` mounted on `from`, then moved to `to`.
    SwitchingLesson { from: u64, to: u64 },
    Modals { hearts_open: bool, practice_open: bool },
    /// Both modals open, then the chosen ones closed from an effect.
    DismissedModals { hearts: bool, practice: bool },
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    use_context_provider(|| {
        let stores = ModalStores::new();
        let (hearts_open, practice_open) = match props.view {
            ViewKind::Modals {
                hearts_open,
                practice_open,
            } => (hearts_open, practice_open),
            ViewKind::DismissedModals { .. } => (true, true),
            _ => (false, false),
        };
        if hearts_open {
            stores.hearts.open();
        }
        if practice_open {
            stores.practice.open();
        }
        stores
    });
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Learn => rsx! { LearnView {} },
        ViewKind::Lesson(lesson_id) => rsx! {
            LessonView { lesson_id }
            HeartsModal {}
            PracticeModal {}
        },
        ViewKind::Quiz(fixture) => rsx! {
            Quiz {
                lesson_id: LessonId::new(1),
                initial_hearts: fixture.hearts,
                initial_percentage: fixture.percentage,
                initial_lesson_challenges: Vec::new(),
                user_subscription: fixture.subscription,
            }
        },
        ViewKind::ReseededQuiz { first, second } => rsx! {
            ReseededQuiz { first, second }
        },
        ViewKind::SwitchingLesson { from, to } => rsx! {
            SwitchingLesson { from, to }
        },
        ViewKind::Modals { .. } => rsx! {
            HeartsModal {}
            PracticeModal {}
        },
        ViewKind::DismissedModals { hearts, practice } => rsx! {
            DismissModals { hearts, practice }
            HeartsModal {}
            PracticeModal {}
        },
    }
}

#[component]
fn ReseededQuiz(first: QuizFixture, second: QuizFixture) -> Element {
    let mut fixture = use_signal(|| first);
    use_effect(move || fixture.set(second.clone()));
    let current = fixture();

    rsx! {
        p { class: "quiz-props", "props: {current.hearts} hearts, {current.percentage}%" }
        Quiz {
            lesson_id: LessonId::new(1),
            initial_hearts: current.hearts,
            initial_percentage: current.percentage,
            initial_lesson_challenges: Vec::new(),
            user_subscription: current.subscription,
        }
    }
}

#[component]
fn SwitchingLesson(from: u64, to: u64) -> Element {
    let mut lesson_id = use_signal(|| from);
    use_effect(move || lesson_id.set(to));

    rsx! {
        LessonView { lesson_id: lesson_id() }
    }
}

/// Closes modals the same way their dismiss buttons do.
#[component]
fn DismissModals(hearts: bool, practice: bool) -> Element {
    let hearts_modal = use_hearts_modal();
    let practice_modal = use_practice_modal();
    use_effect(move || {
        if hearts {
            hearts_modal.close();
        }
        if practice {
            practice_modal.close();
        }
    });
    rsx! {}
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, identity: StaticIdentity) -> ViewHarness {
    let storage = Storage::in_memory();
    let identity = Arc::new(identity);
    let admin = Arc::new(AdminService::new(identity.clone()));
    let lessons = Arc::new(LessonService::new(
        Arc::clone(&storage.lessons),
        Arc::clone(&storage.progress),
        Arc::clone(&storage.subscriptions),
    ));

    let app = Arc::new(TestApp {
        identity,
        admin,
        lessons,
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, storage }
}

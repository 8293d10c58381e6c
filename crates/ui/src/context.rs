use std::sync::Arc;

use lingo_core::model::LessonId;
use services::{AdminService, IdentityProvider, LessonService};

pub trait UiApp: Send + Sync {
    fn current_lesson_id(&self) -> LessonId;

    fn identity(&self) -> Arc<dyn IdentityProvider>;
    fn admin(&self) -> Arc<AdminService>;
    fn lessons(&self) -> Arc<LessonService>;
}

#[derive(Clone)]
pub struct AppContext {
    current_lesson_id: LessonId,

    identity: Arc<dyn IdentityProvider>,
    admin: Arc<AdminService>,
    lessons: Arc<LessonService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            current_lesson_id: app.current_lesson_id(),
            identity: app.identity(),
            admin: app.admin(),
            lessons: app.lessons(),
        }
    }

    #[must_use]
    pub fn current_lesson_id(&self) -> LessonId {
        self.current_lesson_id
    }

    #[must_use]
    pub fn current_user_id(&self) -> Option<String> {
        self.identity.current_user_id()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.admin.is_admin()
    }

    #[must_use]
    pub fn lessons(&self) -> Arc<LessonService> {
        Arc::clone(&self.lessons)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

#![forbid(unsafe_code)]

pub mod admin_service;
pub mod error;
pub mod identity;
pub mod lesson_service;

pub use admin_service::AdminService;
pub use error::LessonServiceError;
pub use identity::{IdentityProvider, StaticIdentity};
pub use lesson_service::{LessonService, QuizData};

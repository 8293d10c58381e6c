mod quiz_vm;

pub use quiz_vm::{HeaderVm, LessonNotices, QuizSession, lesson_notices};

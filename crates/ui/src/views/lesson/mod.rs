mod header;
mod quiz;
mod view;

pub use header::Header;
pub use quiz::Quiz;
pub use view::LessonView;

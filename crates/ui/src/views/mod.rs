mod learn;
mod lesson;
mod modals;
mod shop;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use learn::LearnView;
pub use lesson::{Header, LessonView, Quiz};
pub use modals::{HeartsModal, PracticeModal};
pub use shop::ShopView;
pub use state::{ViewError, ViewState, view_state_from_resource};

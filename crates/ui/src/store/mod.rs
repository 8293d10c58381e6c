mod modal;

pub use modal::{ModalState, ModalStore, ModalStores, use_hearts_modal, use_practice_modal};

use dioxus::prelude::*;

/// Visibility of one modal. Closed until opened; repeated calls are no-ops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    is_open: bool,
}

impl ModalState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }
}

/// Reactive handle over a `ModalState`. Copy it into whichever component needs it.
///
/// Must be created inside a Dioxus scope, usually by the root component via
/// [`ModalStores::new`].
#[derive(Clone, Copy, PartialEq)]
pub struct ModalStore {
    state: Signal<ModalState>,
}

impl ModalStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Signal::new(ModalState::default()),
        }
    }

    /// Reads subscribe the calling component to changes.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.read().is_open()
    }

    pub fn open(&self) {
        let mut state = self.state;
        state.write().open();
    }

    pub fn close(&self) {
        let mut state = self.state;
        state.write().close();
    }
}

/// The app's modal stores. Provided once as context; each store is independent.
#[derive(Clone, Copy, PartialEq)]
pub struct ModalStores {
    pub hearts: ModalStore,
    pub practice: ModalStore,
}

impl ModalStores {
    #[must_use]
    pub fn new() -> Self {
        Self {
            hearts: ModalStore::new(),
            practice: ModalStore::new(),
        }
    }
}

#[must_use]
pub fn use_hearts_modal() -> ModalStore {
    use_context::<ModalStores>().hearts
}

#[must_use]
pub fn use_practice_modal() -> ModalStore {
    use_context::<ModalStores>().practice
}

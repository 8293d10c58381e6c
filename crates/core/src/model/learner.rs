use serde::{Deserialize, Serialize};

/// Hearts a learner starts with before any progress is recorded.
pub const DEFAULT_HEARTS: i32 = 5;

/// Externally managed entitlement record. Only the consumed field is modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserSubscription {
    pub is_active: bool,
}

impl UserSubscription {
    #[must_use]
    pub const fn active() -> Self {
        Self { is_active: true }
    }

    #[must_use]
    pub const fn inactive() -> Self {
        Self { is_active: false }
    }
}

/// `true` only when a subscription record exists and is active.
#[must_use]
pub fn has_active_subscription(subscription: Option<&UserSubscription>) -> bool {
    subscription.is_some_and(|sub| sub.is_active)
}

/// Per-learner hearts kept across lessons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProgress {
    pub user_id: String,
    pub hearts: i32,
}

impl UserProgress {
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            hearts: DEFAULT_HEARTS,
        }
    }

    #[must_use]
    pub fn with_hearts(mut self, hearts: i32) -> Self {
        self.hearts = hearts;
        self
    }
}

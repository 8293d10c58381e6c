use std::sync::Arc;

use lingo_core::Allowlist;
use tracing::debug;

use crate::identity::IdentityProvider;

/// Decides whether the signed-in caller has admin capability.
#[derive(Clone)]
pub struct AdminService {
    identity: Arc<dyn IdentityProvider>,
    allowlist: Allowlist,
}

impl AdminService {
    /// Uses the built-in admin allowlist.
    #[must_use]
    pub fn new(identity: Arc<dyn IdentityProvider>) -> Self {
        Self::with_allowlist(identity, Allowlist::admins())
    }

    #[must_use]
    pub fn with_allowlist(identity: Arc<dyn IdentityProvider>, allowlist: Allowlist) -> Self {
        Self {
            identity,
            allowlist,
        }
    }

    /// A missing identity is "not admin", never an error.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        let Some(user_id) = self.identity.current_user_id() else {
            debug!("admin check without identity");
            return false;
        };
        let allowed = self.allowlist.contains(&user_id);
        debug!(allowed, "admin check");
        allowed
    }
}

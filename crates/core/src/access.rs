//! Static admin allowlist.

/// Identities granted admin capability. Compiled in; there is no runtime way to extend it.
pub const ADMIN_USER_IDS: &[&str] = &["user_2e1N7i6cxpcpJ2wnJ4sx9HcnUxQ"];

/// A fixed set of identity strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allowlist {
    ids: &'static [&'static str],
}

impl Allowlist {
    #[must_use]
    pub const fn new(ids: &'static [&'static str]) -> Self {
        Self { ids }
    }

    /// The built-in admin allowlist.
    #[must_use]
    pub const fn admins() -> Self {
        Self::new(ADMIN_USER_IDS)
    }

    /// Exact, case-sensitive membership check.
    #[must_use]
    pub fn contains(&self, user_id: &str) -> bool {
        self.ids.iter().any(|id| *id == user_id)
    }
}

impl Default for Allowlist {
    fn default() -> Self {
        Self::admins()
    }
}

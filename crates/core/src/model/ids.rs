use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a live popup.
///
/// Unique among popups created by the same generator.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PopupId(u64);

impl PopupId {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying u64 value
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for PopupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PopupId({})", self.0)
    }
}

impl fmt::Display for PopupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic source of popup identities.
///
/// Ids increase strictly, so creation order can be recovered from them.
#[derive(Debug, Clone, Default)]
pub struct PopupIdGenerator {
    next: u64,
}

impl PopupIdGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> PopupId {
        self.next = self.next.wrapping_add(1);
        PopupId(self.next)
    }
}

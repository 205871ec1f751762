//! Module `account`
//!
//! Defines the `AccountRecord` struct representing one user's credential
//! digest, failed-attempt counter, and lock state.

/// Per-user account state as held in the store.
///
/// Invariant: `locked` implies no login may succeed regardless of credential
/// correctness, until an administrative unlock. `failed_attempts` only
/// returns to zero together with clearing `locked`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRecord {
    /// Digest of the credential chosen at registration.
    pub digest: String,
    /// Consecutive failed login attempts since the last success or unlock.
    pub failed_attempts: u32,
    /// Whether the account is locked out.
    pub locked: bool,
}

impl AccountRecord {
    /// Creates a fresh record for a newly registered user.
    pub fn new(digest: String) -> Self {
        Self {
            digest,
            failed_attempts: 0,
            locked: false,
        }
    }

    /// Records one failed login attempt, locking the account when the
    /// counter reaches `threshold`.
    ///
    /// Returns `true` if this attempt newly engaged the lock.
    pub fn record_failure(&mut self, threshold: u32) -> bool {
        self.failed_attempts += 1;
        if !self.locked && self.failed_attempts >= threshold {
            self.locked = true;
            return true;
        }
        false
    }

    /// Clears the failure counter and the lock.
    ///
    /// Used on successful login and on administrative unlock.
    pub fn reset(&mut self) {
        self.failed_attempts = 0;
        self.locked = false;
    }
}

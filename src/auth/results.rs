//! Authentication result types
//!
//! Defines the typed outcomes returned by engine operations. These are
//! ordinary results of a completed operation, not errors; only store I/O
//! failures surface as `StoreError`.

use crate::auth::strength::Strength;

/// Outcome of a registration attempt.
///
/// The strength classification is advisory display data; it never blocks
/// registration (only the minimum-length rule does), and it is reported
/// even when the credential is rejected as too short.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    Success { strength: Strength },
    UsernameTooShort,
    UsernameTaken,
    CredentialTooShort { strength: Strength },
}

/// Outcome of a login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Success,
    UnknownUser,
    /// The account was already locked; the credential was not checked.
    Locked,
    /// Wrong credential. `locked_now` reports the lock engaging on this
    /// very attempt.
    Failure { attempts: u32, locked_now: bool },
}

/// Read-only view of an account's current state.
///
/// Lets the calling shell decide whether prompting for a credential is
/// worthwhile; it does not replace the checks `login` itself performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountStatus {
    Unregistered,
    Active,
    Locked,
}

/// Outcome of an administrative unlock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnlockOutcome {
    Success,
    UnknownUser,
}

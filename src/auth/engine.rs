//! Authentication engine implementation
//!
//! Every operation is one synchronous load, mutate, save cycle over the
//! injected store backend. Validation failures short-circuit before any
//! write, so a rejected operation never leaves the store partially
//! updated. The store is exclusively owned by the executing operation;
//! concurrent processes sharing one store would need external locking.

use log::{info, warn};

use crate::account::AccountRecord;
use crate::auth::results::{AccountStatus, LoginOutcome, RegisterOutcome, UnlockOutcome};
use crate::auth::strength::classify;
use crate::digest::digest;
use crate::error::StoreError;
use crate::store::StoreBackend;

/// Validation limits and the lockout threshold.
#[derive(Debug, Clone)]
pub struct Policy {
    pub min_username_chars: usize,
    pub min_credential_chars: usize,
    pub max_failed_attempts: u32,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            min_username_chars: 3,
            min_credential_chars: 6,
            max_failed_attempts: 3,
        }
    }
}

/// The authentication state machine over a store backend.
pub struct AuthEngine<S: StoreBackend> {
    backend: S,
    policy: Policy,
}

impl<S: StoreBackend> AuthEngine<S> {
    pub fn new(backend: S, policy: Policy) -> Self {
        Self { backend, policy }
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Registers a new user.
    ///
    /// Rejects usernames shorter than the policy minimum or already taken,
    /// and credentials shorter than the policy minimum. All rejections
    /// happen before any write. On success the account starts with zero
    /// failed attempts and unlocked.
    pub fn register(
        &self,
        username: &str,
        credential: &str,
    ) -> Result<RegisterOutcome, StoreError> {
        let mut accounts = self.backend.load()?;

        if username.chars().count() < self.policy.min_username_chars {
            return Ok(RegisterOutcome::UsernameTooShort);
        }
        if accounts.contains_key(username) {
            return Ok(RegisterOutcome::UsernameTaken);
        }

        let strength = classify(credential);
        if credential.chars().count() < self.policy.min_credential_chars {
            return Ok(RegisterOutcome::CredentialTooShort { strength });
        }

        accounts.insert(username.to_string(), AccountRecord::new(digest(credential)));
        self.backend.save(&accounts)?;

        info!("Registered user {}", username);
        Ok(RegisterOutcome::Success { strength })
    }

    /// Reports an account's current state without mutating anything.
    pub fn status(&self, username: &str) -> Result<AccountStatus, StoreError> {
        let accounts = self.backend.load()?;
        Ok(match accounts.get(username) {
            None => AccountStatus::Unregistered,
            Some(record) if record.locked => AccountStatus::Locked,
            Some(_) => AccountStatus::Active,
        })
    }

    /// Attempts a login.
    ///
    /// A locked account rejects the attempt without checking the
    /// credential and without writing. A successful login resets the
    /// failure counter; a failed one increments it and engages the lock
    /// at the policy threshold. Both mutations persist.
    pub fn login(&self, username: &str, credential: &str) -> Result<LoginOutcome, StoreError> {
        let mut accounts = self.backend.load()?;

        let Some(record) = accounts.get_mut(username) else {
            return Ok(LoginOutcome::UnknownUser);
        };

        if record.locked {
            warn!("Rejected login for locked account {}", username);
            return Ok(LoginOutcome::Locked);
        }

        if record.digest == digest(credential) {
            record.reset();
            self.backend.save(&accounts)?;
            info!("User {} logged in", username);
            return Ok(LoginOutcome::Success);
        }

        let locked_now = record.record_failure(self.policy.max_failed_attempts);
        let attempts = record.failed_attempts;
        self.backend.save(&accounts)?;

        if locked_now {
            warn!(
                "Account {} locked after {} failed attempts",
                username, attempts
            );
        } else {
            info!("Failed login for {} (attempt {})", username, attempts);
        }
        Ok(LoginOutcome::Failure {
            attempts,
            locked_now,
        })
    }

    /// Administrative unlock, no credential required.
    ///
    /// Unconditionally clears the failure counter and the lock from any
    /// prior state. Idempotent; always persists when the user exists.
    pub fn unlock(&self, username: &str) -> Result<UnlockOutcome, StoreError> {
        let mut accounts = self.backend.load()?;

        let Some(record) = accounts.get_mut(username) else {
            return Ok(UnlockOutcome::UnknownUser);
        };

        record.reset();
        self.backend.save(&accounts)?;

        info!("Unlocked account {}", username);
        Ok(UnlockOutcome::Success)
    }
}

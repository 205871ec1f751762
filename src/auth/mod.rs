//! Authentication engine
//!
//! The state machine governing registration, login, and administrative
//! unlock, operating on an account store and the credential digest.

pub mod engine;
pub mod results;
pub mod strength;

pub use engine::{AuthEngine, Policy};
pub use results::{AccountStatus, LoginOutcome, RegisterOutcome, UnlockOutcome};
pub use strength::{Strength, classify};

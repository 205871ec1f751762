//! Error handling
//!
//! Defines error types and handling for the credential manager.

pub mod types;

pub use types::*;

//! Error types
//!
//! Defines domain-specific error types for each module of the credential
//! manager. Rejected operations (unknown user, wrong password, locked
//! account) are not errors; they are typed outcomes in `auth::results`.

use std::fmt;
use std::io;

/// Store module errors
#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    MalformedRecord { line: usize, content: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "Store I/O error: {}", e),
            StoreError::MalformedRecord { line, content } => {
                write!(f, "Malformed account record on line {}: {:?}", line, content)
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl From<io::Error> for StoreError {
    fn from(error: io::Error) -> Self {
        StoreError::Io(error)
    }
}

/// General error that encompasses all failure sources of the application
#[derive(Debug)]
pub enum CredlockError {
    Store(StoreError),
    Config(config::ConfigError),
    Io(io::Error),
}

impl fmt::Display for CredlockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredlockError::Store(e) => write!(f, "Store error: {}", e),
            CredlockError::Config(e) => write!(f, "Configuration error: {}", e),
            CredlockError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for CredlockError {}

impl From<StoreError> for CredlockError {
    fn from(error: StoreError) -> Self {
        CredlockError::Store(error)
    }
}

impl From<config::ConfigError> for CredlockError {
    fn from(error: config::ConfigError) -> Self {
        CredlockError::Config(error)
    }
}

impl From<io::Error> for CredlockError {
    fn from(error: io::Error) -> Self {
        CredlockError::Io(error)
    }
}

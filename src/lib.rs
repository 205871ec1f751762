pub mod account;
pub mod auth;
pub mod config;
pub mod digest;
pub mod error;
pub mod shell;
pub mod store;

pub use auth::AuthEngine;

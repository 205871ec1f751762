//! Interactive shell
//!
//! The menu loop around the authentication engine. Dispatch only: all
//! state lives in the engine and its store; the shell renders one
//! explanatory message per typed outcome.

pub mod input;
pub mod menu;

pub use input::{Prompt, TerminalPrompt};
pub use menu::MenuChoice;

use log::debug;

use crate::auth::results::{AccountStatus, LoginOutcome, RegisterOutcome, UnlockOutcome};
use crate::auth::AuthEngine;
use crate::error::CredlockError;
use crate::store::StoreBackend;

const MENU: &str = "\n===== LOGIN & REGISTRATION SYSTEM =====\n\
                    1. Register\n\
                    2. Login\n\
                    3. Unlock Account (Admin)\n\
                    4. Exit";

/// Interactive session over an engine and an input provider.
pub struct Shell<S: StoreBackend, P: Prompt> {
    engine: AuthEngine<S>,
    prompt: P,
}

impl<S: StoreBackend, P: Prompt> Shell<S, P> {
    pub fn new(engine: AuthEngine<S>, prompt: P) -> Self {
        Self { engine, prompt }
    }

    /// Runs the menu loop until the user exits or input ends.
    ///
    /// Engine outcomes never terminate the session; only store or input
    /// errors propagate.
    pub fn run(&mut self) -> Result<(), CredlockError> {
        loop {
            println!("{}", MENU);
            let raw = self.prompt.read_line("Enter choice: ")?;

            let Some(choice) = menu::parse_choice(&raw) else {
                println!("Invalid choice.");
                continue;
            };
            debug!("Dispatching menu choice {:?}", choice);

            match choice {
                MenuChoice::Register => self.handle_register()?,
                MenuChoice::Login => self.handle_login()?,
                MenuChoice::Unlock => self.handle_unlock()?,
                MenuChoice::Exit => {
                    println!("Exiting...");
                    return Ok(());
                }
            }
        }
    }

    fn handle_register(&mut self) -> Result<(), CredlockError> {
        let username = self.prompt.read_line("Enter username: ")?;
        let credential = self.prompt.read_secret("Enter password: ")?;

        let outcome = self.engine.register(username.trim(), &credential)?;
        let policy = self.engine.policy();
        match outcome {
            RegisterOutcome::Success { strength } => {
                println!("Password Strength: {}", strength);
                println!("Registration successful!");
            }
            RegisterOutcome::UsernameTooShort => println!(
                "Username must be at least {} characters.",
                policy.min_username_chars
            ),
            RegisterOutcome::UsernameTaken => println!("Username already exists."),
            RegisterOutcome::CredentialTooShort { strength } => {
                println!("Password Strength: {}", strength);
                println!(
                    "Password must be at least {} characters.",
                    policy.min_credential_chars
                );
            }
        }
        Ok(())
    }

    fn handle_login(&mut self) -> Result<(), CredlockError> {
        let username = self.prompt.read_line("Enter username: ")?;
        let username = username.trim();

        // Do not prompt for a password that cannot be checked
        match self.engine.status(username)? {
            AccountStatus::Unregistered => {
                println!("No such user found.");
                return Ok(());
            }
            AccountStatus::Locked => {
                println!("Account is locked due to too many failed attempts.");
                return Ok(());
            }
            AccountStatus::Active => {}
        }

        let credential = self.prompt.read_secret("Enter password: ")?;
        match self.engine.login(username, &credential)? {
            LoginOutcome::Success => println!("Login successful! Welcome, {}.", username),
            LoginOutcome::UnknownUser => println!("No such user found."),
            LoginOutcome::Locked => {
                println!("Account is locked due to too many failed attempts.")
            }
            LoginOutcome::Failure { locked_now, .. } => {
                println!("Incorrect password.");
                if locked_now {
                    println!(
                        "Account locked after {} failed attempts.",
                        self.engine.policy().max_failed_attempts
                    );
                }
            }
        }
        Ok(())
    }

    fn handle_unlock(&mut self) -> Result<(), CredlockError> {
        let username = self.prompt.read_line("Enter username to unlock: ")?;
        let username = username.trim();

        match self.engine.unlock(username)? {
            UnlockOutcome::Success => println!("Account unlocked for user: {}", username),
            UnlockOutcome::UnknownUser => println!("No such user found."),
        }
        Ok(())
    }
}

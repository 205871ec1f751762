//! Interactive input capture
//!
//! Abstracts line and secret entry behind the `Prompt` trait so the shell
//! is testable without a real terminal. The terminal implementation masks
//! credential input: characters are echoed as `*` and never appear on
//! screen in the clear.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use std::io::{self, BufRead, Write};

/// Supplies interactively entered strings to the shell.
pub trait Prompt {
    /// Reads one visible line, e.g. a username or menu choice.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Reads a credential without echoing the literal characters.
    fn read_secret(&mut self, prompt: &str) -> io::Result<String>;
}

/// Real-terminal prompt with masked credential entry.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl TerminalPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Prompt for TerminalPrompt {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        let n = io::stdin().lock().read_line(&mut line)?;
        if n == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "Input stream closed",
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn read_secret(&mut self, prompt: &str) -> io::Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;

        terminal::enable_raw_mode()?;
        let secret = read_masked();
        terminal::disable_raw_mode()?;
        println!();
        secret
    }
}

/// Raw-mode key loop: echo `*` per character, handle backspace, stop on
/// Enter. Ctrl-C aborts the prompt.
fn read_masked() -> io::Result<String> {
    let mut secret = String::new();
    loop {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        else {
            continue;
        };

        match code {
            KeyCode::Enter => break,
            KeyCode::Backspace => {
                if secret.pop().is_some() {
                    print!("\u{8} \u{8}");
                    io::stdout().flush()?;
                }
            }
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                return Err(io::Error::new(io::ErrorKind::Interrupted, "Entry aborted"));
            }
            KeyCode::Char(c) => {
                secret.push(c);
                print!("*");
                io::stdout().flush()?;
            }
            _ => {}
        }
    }
    Ok(secret)
}

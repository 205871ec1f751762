//! Durable store format
//!
//! One account per line: `<username> <digest> <failedAttempts> <lockedFlag>`,
//! fields whitespace-separated, `lockedFlag` rendered as `0`/`1`. Usernames
//! and digests are non-whitespace tokens.

use crate::account::AccountRecord;
use crate::error::StoreError;

/// Parses one record line.
///
/// A malformed line fails the whole load rather than silently truncating
/// it; corruption is reported, never papered over. `line` is 1-based and
/// used only for the error.
pub fn parse_record(line: usize, content: &str) -> Result<(String, AccountRecord), StoreError> {
    let malformed = || StoreError::MalformedRecord {
        line,
        content: content.to_string(),
    };

    let mut fields = content.split_whitespace();
    let username = fields.next().ok_or_else(malformed)?;
    let digest = fields.next().ok_or_else(malformed)?;
    let failed_attempts = fields
        .next()
        .and_then(|s| s.parse::<u32>().ok())
        .ok_or_else(malformed)?;
    let locked = match fields.next() {
        Some("0") => false,
        Some("1") => true,
        _ => return Err(malformed()),
    };

    if fields.next().is_some() {
        return Err(malformed());
    }

    Ok((
        username.to_string(),
        AccountRecord {
            digest: digest.to_string(),
            failed_attempts,
            locked,
        },
    ))
}

/// Renders one record line, without a trailing newline.
pub fn write_record(username: &str, record: &AccountRecord) -> String {
    format!(
        "{} {} {} {}",
        username,
        record.digest,
        record.failed_attempts,
        if record.locked { "1" } else { "0" }
    )
}

//! Credential strength classifier
//!
//! Stateless, advisory-only classification shown to the user at
//! registration. It never blocks anything.

use std::fmt;

/// Advisory strength classification of a credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strength::Weak => write!(f, "Weak"),
            Strength::Medium => write!(f, "Medium"),
            Strength::Strong => write!(f, "Strong"),
        }
    }
}

/// Classifies a credential in a single pass.
///
/// Strong: length >= 8 with uppercase, lowercase, digit, and symbol all
/// present. Medium: length >= 6 with uppercase+lowercase or
/// lowercase+digit. Weak otherwise. A symbol is any other non-control
/// character.
pub fn classify(credential: &str) -> Strength {
    let mut has_upper = false;
    let mut has_lower = false;
    let mut has_digit = false;
    let mut has_symbol = false;

    for c in credential.chars() {
        if c.is_uppercase() {
            has_upper = true;
        } else if c.is_lowercase() {
            has_lower = true;
        } else if c.is_ascii_digit() {
            has_digit = true;
        } else if !c.is_control() {
            has_symbol = true;
        }
    }

    let length = credential.chars().count();

    if length >= 8 && has_upper && has_lower && has_digit && has_symbol {
        Strength::Strong
    } else if length >= 6 && ((has_upper && has_lower) || (has_lower && has_digit)) {
        Strength::Medium
    } else {
        Strength::Weak
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_strong() {
        assert_eq!(classify("Sup3r$ecret"), Strength::Strong);
        assert_eq!(classify("Aa1!Aa1!"), Strength::Strong);
    }

    #[test]
    fn test_classify_medium() {
        // Upper + lower, no digit or symbol
        assert_eq!(classify("Abcdef"), Strength::Medium);
        // Lower + digit
        assert_eq!(classify("abcde1"), Strength::Medium);
        // All four categories but too short for Strong
        assert_eq!(classify("Aa1!bc"), Strength::Medium);
    }

    #[test]
    fn test_classify_weak() {
        assert_eq!(classify(""), Strength::Weak);
        assert_eq!(classify("abc"), Strength::Weak);
        // Long but single category
        assert_eq!(classify("abcdefghij"), Strength::Weak);
        // Upper + digit only does not qualify for Medium
        assert_eq!(classify("ABCDE1"), Strength::Weak);
    }

    #[test]
    fn test_classify_length_boundaries() {
        // One char short of Medium
        assert_eq!(classify("Abcde"), Strength::Weak);
        // One char short of Strong falls back to Medium rules
        assert_eq!(classify("Aa1!bcd"), Strength::Medium);
    }
}

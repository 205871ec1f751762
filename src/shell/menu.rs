//! Menu choice parsing

/// One of the four top-level menu operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Register,
    Login,
    Unlock,
    Exit,
}

/// Parses raw menu input into a choice. Anything unrecognized yields
/// `None` and the caller reprompts.
pub fn parse_choice(raw: &str) -> Option<MenuChoice> {
    match raw.trim() {
        "1" => Some(MenuChoice::Register),
        "2" => Some(MenuChoice::Login),
        "3" => Some(MenuChoice::Unlock),
        "4" => Some(MenuChoice::Exit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_choices() {
        assert_eq!(parse_choice("1"), Some(MenuChoice::Register));
        assert_eq!(parse_choice("2"), Some(MenuChoice::Login));
        assert_eq!(parse_choice("3"), Some(MenuChoice::Unlock));
        assert_eq!(parse_choice("4"), Some(MenuChoice::Exit));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_choice(" 2 \n"), Some(MenuChoice::Login));
    }

    #[test]
    fn test_parse_rejects_invalid_input() {
        assert_eq!(parse_choice(""), None);
        assert_eq!(parse_choice("5"), None);
        assert_eq!(parse_choice("register"), None);
        assert_eq!(parse_choice("12"), None);
    }
}

use crate::game::board::Color;
use std::fmt::{Display, Formatter};
use unicode_segmentation::UnicodeSegmentation;

/// name given to a player who leaves the name blank
pub const DEFAULT_PLAYER_NAME: &str = "Player";
const MAX_PLAYER_NAME_GRAPHEMES: usize = 32;

/// A player name with the color assigned for one session.
///
/// Identities are rebuilt for every new game or resume, never recolored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerIdentity {
    name: String,
    color: Color,
}

impl PlayerIdentity {
    pub fn new(name: &str, color: Color) -> Self {
        PlayerIdentity {
            name: normalize_name(name),
            color,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Display for PlayerIdentity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.color)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidPlayerName {
    BadCharacter,
}

impl Display for InvalidPlayerName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidPlayerName::BadCharacter => write!(f, "name contains control characters"),
        }
    }
}

impl std::error::Error for InvalidPlayerName {}

/// reject names typed with control characters (tabs, escapes, ...)
pub fn validate_name(name: &str) -> Result<&str, InvalidPlayerName> {
    if name.chars().any(char::is_control) {
        Err(InvalidPlayerName::BadCharacter)
    } else {
        Ok(name)
    }
}

/// trim, fall back to the placeholder, cap at 32 graphemes
pub fn normalize_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        DEFAULT_PLAYER_NAME.to_string()
    } else {
        trimmed
            .graphemes(true)
            .take(MAX_PLAYER_NAME_GRAPHEMES)
            .collect()
    }
}

#[cfg(test)]
mod test_player {
    use super::*;

    #[test]
    fn test_default_name() {
        assert_eq!(PlayerIdentity::new("", Color::Black).name(), "Player");
        assert_eq!(PlayerIdentity::new("   ", Color::White).name(), "Player");
    }

    #[test]
    fn test_trim_and_truncate() {
        assert_eq!(normalize_name("  小雨 "), "小雨");
        let long = "枫".repeat(40);
        assert_eq!(normalize_name(&long).graphemes(true).count(), 32);
        // combining marks stay with their base character
        let accented = "e\u{301}".repeat(33);
        assert_eq!(normalize_name(&accented), "e\u{301}".repeat(32));
    }

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("alice"), Ok("alice"));
        assert_eq!(validate_name("al\tice"), Err(InvalidPlayerName::BadCharacter));
        assert_eq!(validate_name("\u{1b}[31m"), Err(InvalidPlayerName::BadCharacter));
    }

    #[test]
    fn test_display() {
        let p = PlayerIdentity::new("leon", Color::White);
        assert_eq!(p.to_string(), "leon (white)");
        assert_eq!(p.color(), Color::White);
    }
}

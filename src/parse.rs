//! Defensive parsing of hex color strings.

use bitflags::bitflags;

use crate::color::{Color, Component};

bitflags! {
    /// Defects found while parsing a hex color string.
    ///
    /// The widget re-parses on every keystroke, so parsing never fails
    /// outright: a channel that cannot be decoded comes back as 0 and its
    /// flag is set so the input field can be marked invalid.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct HexIssues: u8 {
        /// The string does not hold exactly 6 hex digits.
        const BAD_LENGTH = 1 << 0;
        /// The red channel substring could not be decoded.
        const BAD_RED = 1 << 1;
        /// The green channel substring could not be decoded.
        const BAD_GREEN = 1 << 2;
        /// The blue channel substring could not be decoded.
        const BAD_BLUE = 1 << 3;
    }
}

fn channel(digits: Option<&str>, issues: &mut HexIssues, issue: HexIssues) -> u8 {
    match digits.map(|d| u8::from_str_radix(d, 16)) {
        Some(Ok(value)) => value,
        _ => {
            *issues |= issue;
            0
        }
    }
}

impl Color {
    /// Parse a `#RRGGBB` hex string, case insensitive, with the leading `#`
    /// optional. A missing alpha means fully opaque.
    ///
    /// Any channel substring that is missing or not valid hex decodes as 0
    /// and is reported through [`HexIssues`]; the returned color is always
    /// usable.
    pub fn parse_hex(hex: &str, alpha: impl Into<Option<Component>>) -> (Self, HexIssues) {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        let mut issues = HexIssues::empty();
        if hex.len() != 6 {
            issues |= HexIssues::BAD_LENGTH;
        }

        // `get` instead of slicing: a range that splits a multi-byte
        // character must flag the channel, not panic.
        let red = channel(hex.get(0..2), &mut issues, HexIssues::BAD_RED);
        let green = channel(hex.get(2..4), &mut issues, HexIssues::BAD_GREEN);
        let blue = channel(hex.get(4..6), &mut issues, HexIssues::BAD_BLUE);

        (Self::new(red, green, blue, alpha), issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_hex() {
        let (color, issues) = Color::parse_hex("#4FACFE", None);
        assert!(issues.is_empty());
        assert_eq!(color, Color::new(79, 172, 254, 1.0));
    }

    #[test]
    fn case_and_prefix_are_flexible() {
        let (color, issues) = Color::parse_hex("4facfe", 0.5);
        assert!(issues.is_empty());
        assert_eq!(color, Color::new(79, 172, 254, 0.5));

        let (color, issues) = Color::parse_hex("  #4Facfe ", None);
        assert!(issues.is_empty());
        assert_eq!(color, Color::new(79, 172, 254, 1.0));
    }

    #[test]
    fn short_input_defaults_missing_channels_to_zero() {
        let (color, issues) = Color::parse_hex("#41", None);
        assert_eq!(
            issues,
            HexIssues::BAD_LENGTH | HexIssues::BAD_GREEN | HexIssues::BAD_BLUE
        );
        assert_eq!(color, Color::new(0x41, 0, 0, 1.0));
    }

    #[test]
    fn non_hex_digits_default_to_zero() {
        let (color, issues) = Color::parse_hex("#4FZZFE", None);
        assert_eq!(issues, HexIssues::BAD_GREEN);
        assert_eq!(color, Color::new(0x4F, 0, 0xFE, 1.0));
    }

    #[test]
    fn overlong_input_is_flagged_but_usable() {
        let (color, issues) = Color::parse_hex("#4FACFE00", None);
        assert_eq!(issues, HexIssues::BAD_LENGTH);
        assert_eq!(color, Color::new(79, 172, 254, 1.0));
    }

    #[test]
    fn multi_byte_characters_do_not_panic() {
        let (color, issues) = Color::parse_hex("#é0é0é0", None);
        assert!(issues.contains(HexIssues::BAD_RED));
        assert_eq!(color.red, 0);
    }

    #[test]
    fn empty_input_is_black() {
        let (color, issues) = Color::parse_hex("", None);
        assert!(issues.contains(HexIssues::BAD_LENGTH));
        assert_eq!(color, Color::new(0, 0, 0, 1.0));
    }
}

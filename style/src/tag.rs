use std::{fmt, str::FromStr};
use thiserror::Error;

/// One atomic visual style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleTag {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Code,
    Double,
    Script,
    Fraktur,
}

/// Errors from parsing style names.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseStyleError {
    #[error("unknown style `{0}` (expected one of: bold, italic, underline, strikethrough, code, double, script, fraktur)")]
    UnknownStyle(String),
}

impl StyleTag {
    /// Every tag, in canonical order.
    pub const ALL: [StyleTag; 8] = [
        StyleTag::Bold,
        StyleTag::Italic,
        StyleTag::Underline,
        StyleTag::Strikethrough,
        StyleTag::Code,
        StyleTag::Double,
        StyleTag::Script,
        StyleTag::Fraktur,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StyleTag::Bold => "bold",
            StyleTag::Italic => "italic",
            StyleTag::Underline => "underline",
            StyleTag::Strikethrough => "strikethrough",
            StyleTag::Code => "code",
            StyleTag::Double => "double",
            StyleTag::Script => "script",
            StyleTag::Fraktur => "fraktur",
        }
    }

    /// Overlay tags are rendered with a trailing combining mark.
    pub fn is_overlay(self) -> bool {
        matches!(self, StyleTag::Underline | StyleTag::Strikethrough)
    }

    /// Substitution tags are rendered by swapping the codepoint.
    pub fn is_substitution(self) -> bool {
        !self.is_overlay()
    }
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StyleTag {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let tag = match normalized.as_str() {
            "bold" => StyleTag::Bold,
            "italic" => StyleTag::Italic,
            "underline" => StyleTag::Underline,
            "strikethrough" | "strike" => StyleTag::Strikethrough,
            "code" | "monospace" => StyleTag::Code,
            "double" | "double-struck" => StyleTag::Double,
            "script" => StyleTag::Script,
            "fraktur" => StyleTag::Fraktur,
            _ => return Err(ParseStyleError::UnknownStyle(s.trim().to_string())),
        };
        Ok(tag)
    }
}

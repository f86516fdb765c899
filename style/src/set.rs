use crate::tag::{ParseStyleError, StyleTag};
use bitflags::bitflags;
use std::{fmt, str::FromStr};

bitflags! {
    /// The full styling of one character position.
    ///
    /// Combine with the usual set operators (`|`, `&`, `^`); `^` is the
    /// toggle used by the selection transform.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleSet: u8 {
        const BOLD          = 1 << 0;
        const ITALIC        = 1 << 1;
        const UNDERLINE     = 1 << 2;
        const STRIKETHROUGH = 1 << 3;
        const CODE          = 1 << 4;
        const DOUBLE        = 1 << 5;
        const SCRIPT        = 1 << 6;
        const FRAKTUR       = 1 << 7;
    }
}

impl StyleSet {
    /// Tags represented by codepoint substitution.
    pub const SUBSTITUTION_GROUP: Self = Self::BOLD
        .union(Self::ITALIC)
        .union(Self::CODE)
        .union(Self::DOUBLE)
        .union(Self::SCRIPT)
        .union(Self::FRAKTUR);

    /// Tags represented by trailing combining marks.
    pub const OVERLAY_GROUP: Self = Self::UNDERLINE.union(Self::STRIKETHROUGH);

    /// The substitution subset, `S` in the codec.
    pub fn substitution(self) -> Self {
        self.intersection(Self::SUBSTITUTION_GROUP)
    }

    /// The overlay subset, `O` in the codec.
    pub fn overlay(self) -> Self {
        self.intersection(Self::OVERLAY_GROUP)
    }

    pub fn contains_tag(self, tag: StyleTag) -> bool {
        self.contains(Self::from(tag))
    }

    /// Tags in canonical order.
    pub fn tags(self) -> impl Iterator<Item = StyleTag> {
        StyleTag::ALL
            .into_iter()
            .filter(move |tag| self.contains_tag(*tag))
    }
}

impl From<StyleTag> for StyleSet {
    fn from(tag: StyleTag) -> Self {
        match tag {
            StyleTag::Bold => Self::BOLD,
            StyleTag::Italic => Self::ITALIC,
            StyleTag::Underline => Self::UNDERLINE,
            StyleTag::Strikethrough => Self::STRIKETHROUGH,
            StyleTag::Code => Self::CODE,
            StyleTag::Double => Self::DOUBLE,
            StyleTag::Script => Self::SCRIPT,
            StyleTag::Fraktur => Self::FRAKTUR,
        }
    }
}

impl FromIterator<StyleTag> for StyleSet {
    fn from_iter<I: IntoIterator<Item = StyleTag>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, tag| set | Self::from(tag))
    }
}

impl fmt::Display for StyleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tag) in self.tags().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(tag.name())?;
        }
        Ok(())
    }
}

/// Parses a `,` or `+` separated list of tag names. Blank input is the empty set.
impl FromStr for StyleSet {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split([',', '+'])
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::parse::<StyleTag>)
            .collect()
    }
}

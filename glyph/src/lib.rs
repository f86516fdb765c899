//! Static glyph data for unistyle.
//!
//! [`GlyphTables`] maps `(base, CombinationKey)` to a styled codepoint and back.
//! The forward direction is computed from the table layouts in [`TABLES`]; the
//! inverse is an index built once on first use and never mutated, so lookups
//! are safe from any thread.
//!
//! Overlay styles have no table: they are the combining marks in
//! [`OVERLAY_MARKS`].

mod index;
mod overlay;
mod table;

pub use overlay::{
    is_overlay_mark, overlay_mark, overlay_marks, overlay_tag, OVERLAY_MARKS, STRIKETHROUGH_MARK,
    UNDERLINE_MARK,
};
pub use table::{GlyphTable, TABLES};

use unistyle_style::CombinationKey;

/// Entry point for table lookups.
pub struct GlyphTables;

impl GlyphTables {
    /// The styled codepoint for `base` under `key`.
    ///
    /// `None` when the alphabet has no glyph for `base` (punctuation, non-Latin
    /// letters, digits in a style without digit variants).
    pub fn get(base: char, key: CombinationKey) -> Option<char> {
        GlyphTable::for_key(key)?.get(base)
    }

    /// Recovers `(base, key)` from a codepoint some table emits.
    pub fn lookup(styled: char) -> Option<(char, CombinationKey)> {
        index::lookup(styled)
    }

    /// Number of distinct styled codepoints across all tables.
    pub fn len() -> usize {
        index::len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_recovers_every_entry() {
        let mut count = 0;
        for key in CombinationKey::VALID {
            for base in ('A'..='Z').chain('a'..='z').chain('0'..='9') {
                if let Some(styled) = GlyphTables::get(base, key) {
                    assert_eq!(GlyphTables::lookup(styled), Some((base, key)));
                    count += 1;
                }
            }
        }
        assert_eq!(GlyphTables::len(), count);
    }

    #[test]
    fn entry_count() {
        // 9 alphabets of 52 letters, plus digits for bold, double-struck and monospace.
        assert_eq!(GlyphTables::len(), 9 * 52 + 3 * 10);
    }

    #[test]
    fn plain_characters_are_not_indexed() {
        for ch in ['A', 'z', '0', ' ', '!', 'ß', '\u{0332}', '\u{1D455}'] {
            assert_eq!(GlyphTables::lookup(ch), None, "{ch:?}");
        }
    }
}

//! Which characters take part in styling.
//!
//! Appending a combining mark to an invisible character (a line break, a
//! zero-width joiner inside an emoji sequence, a variation selector) either
//! renders a floating mark or breaks the sequence, so those positions are never
//! restyled. Whitespace is styleable but the insertion transform skips it by
//! default.
//!
//! Combining diacritics belong to the character before them (see
//! [`crate::Cluster`]); one without a base is invisible like a stray overlay
//! mark.

use unistyle_glyph::is_overlay_mark;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Letters, digits, punctuation, symbols, other scripts.
    Styleable,
    /// Visible whitespace (space, no-break space, ideographic space).
    Whitespace,
    /// Controls, format characters, selectors and stray combining marks.
    Invisible,
}

pub fn classify(c: char) -> CharClass {
    if c.is_control()
        || is_overlay_mark(c)
        || is_combining_mark(c)
        || in_range(c, FORMAT_CHARS)
        || in_range(c, SELECTORS)
    {
        CharClass::Invisible
    } else if c.is_whitespace() {
        CharClass::Whitespace
    } else {
        CharClass::Styleable
    }
}

/// Unicode Format category (Cf) characters most likely to show up in pasted text.
const FORMAT_CHARS: &[(char, char)] = &[
    ('\u{AD}', '\u{AD}'),       // Soft hyphen
    ('\u{600}', '\u{605}'),     // Arabic format chars
    ('\u{61C}', '\u{61C}'),     // Arabic letter mark
    ('\u{180E}', '\u{180E}'),   // Mongolian vowel separator
    ('\u{200B}', '\u{200F}'),   // Zero-width space, joiners, marks
    ('\u{202A}', '\u{202E}'),   // Directional formatting
    ('\u{2060}', '\u{2064}'),   // Word joiner, invisible operators
    ('\u{2066}', '\u{206F}'),   // Directional isolates
    ('\u{FEFF}', '\u{FEFF}'),   // Zero-width no-break space (BOM)
    ('\u{E0001}', '\u{E0001}'), // Language tag
    ('\u{E0020}', '\u{E007F}'), // Tag characters
];

/// Joiners and variation selectors that bind to the preceding character.
const SELECTORS: &[(char, char)] = &[
    ('\u{034F}', '\u{034F}'),   // Combining grapheme joiner
    ('\u{180B}', '\u{180D}'),   // Mongolian free variation selectors
    ('\u{FE00}', '\u{FE0F}'),   // Variation selectors
    ('\u{E0100}', '\u{E01EF}'), // Variation selectors supplement
];

/// Nonspacing combining marks that attach to the preceding base.
const COMBINING_MARKS: &[(char, char)] = &[
    ('\u{0300}', '\u{036F}'), // Combining diacritical marks
    ('\u{0483}', '\u{0489}'), // Cyrillic
    ('\u{0591}', '\u{05BD}'), // Hebrew points
    ('\u{0610}', '\u{061A}'), // Arabic signs
    ('\u{064B}', '\u{065F}'), // Arabic vowels
    ('\u{1AB0}', '\u{1AFF}'), // Combining diacritical marks extended
    ('\u{1DC0}', '\u{1DFF}'), // Combining diacritical marks supplement
    ('\u{20D0}', '\u{20FF}'), // Combining marks for symbols
    ('\u{FE20}', '\u{FE2F}'), // Combining half marks
];

/// A combining diacritic other than the overlay marks.
pub(crate) fn is_combining_mark(c: char) -> bool {
    !is_overlay_mark(c) && c != '\u{034F}' && in_range(c, COMBINING_MARKS)
}

/// Ranges are sorted and non-overlapping.
fn in_range(c: char, ranges: &[(char, char)]) -> bool {
    for &(start, end) in ranges {
        if c < start {
            return false;
        }
        if c <= end {
            return true;
        }
    }
    false
}

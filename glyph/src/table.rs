//! Forward glyph tables.
//!
//! Each table is described by where its letters and digits start in the
//! Mathematical Alphanumeric Symbols block (U+1D400..U+1D7FF), plus the letters
//! whose slot in that block is reserved because the glyph already existed in
//! Letterlike Symbols (U+2100..U+214F). Reserved slots are never emitted.

use unistyle_style::CombinationKey;

/// Layout of one styled alphabet.
#[derive(Debug, Clone, Copy)]
pub struct GlyphTable {
    pub key: CombinationKey,
    /// Codepoint of the styled `A`.
    pub upper: u32,
    /// Codepoint of the styled `a`.
    pub lower: u32,
    /// Codepoint of the styled `0`, if Unicode defines styled digits.
    pub digits: Option<u32>,
    /// Letters that live outside the block.
    pub exceptions: &'static [(char, char)],
}

const ITALIC_EXCEPTIONS: &[(char, char)] = &[('h', '\u{210E}')];

const SCRIPT_EXCEPTIONS: &[(char, char)] = &[
    ('B', '\u{212C}'),
    ('E', '\u{2130}'),
    ('F', '\u{2131}'),
    ('H', '\u{210B}'),
    ('I', '\u{2110}'),
    ('L', '\u{2112}'),
    ('M', '\u{2133}'),
    ('R', '\u{211B}'),
    ('e', '\u{212F}'),
    ('g', '\u{210A}'),
    ('o', '\u{2134}'),
];

const FRAKTUR_EXCEPTIONS: &[(char, char)] = &[
    ('C', '\u{212D}'),
    ('H', '\u{210C}'),
    ('I', '\u{2111}'),
    ('R', '\u{211C}'),
    ('Z', '\u{2128}'),
];

const DOUBLE_EXCEPTIONS: &[(char, char)] = &[
    ('C', '\u{2102}'),
    ('H', '\u{210D}'),
    ('N', '\u{2115}'),
    ('P', '\u{2119}'),
    ('Q', '\u{211A}'),
    ('R', '\u{211D}'),
    ('Z', '\u{2124}'),
];

/// One table per [`CombinationKey::VALID`] entry.
pub const TABLES: [GlyphTable; 9] = [
    GlyphTable {
        key: CombinationKey::BOLD,
        upper: 0x1D400,
        lower: 0x1D41A,
        digits: Some(0x1D7CE),
        exceptions: &[],
    },
    GlyphTable {
        key: CombinationKey::ITALIC,
        upper: 0x1D434,
        lower: 0x1D44E,
        digits: None,
        exceptions: ITALIC_EXCEPTIONS,
    },
    GlyphTable {
        key: CombinationKey::BOLD_ITALIC,
        upper: 0x1D468,
        lower: 0x1D482,
        digits: None,
        exceptions: &[],
    },
    GlyphTable {
        key: CombinationKey::SCRIPT,
        upper: 0x1D49C,
        lower: 0x1D4B6,
        digits: None,
        exceptions: SCRIPT_EXCEPTIONS,
    },
    GlyphTable {
        key: CombinationKey::BOLD_SCRIPT,
        upper: 0x1D4D0,
        lower: 0x1D4EA,
        digits: None,
        exceptions: &[],
    },
    GlyphTable {
        key: CombinationKey::FRAKTUR,
        upper: 0x1D504,
        lower: 0x1D51E,
        digits: None,
        exceptions: FRAKTUR_EXCEPTIONS,
    },
    GlyphTable {
        key: CombinationKey::BOLD_FRAKTUR,
        upper: 0x1D56C,
        lower: 0x1D586,
        digits: None,
        exceptions: &[],
    },
    GlyphTable {
        key: CombinationKey::DOUBLE,
        upper: 0x1D538,
        lower: 0x1D552,
        digits: Some(0x1D7D8),
        exceptions: DOUBLE_EXCEPTIONS,
    },
    GlyphTable {
        key: CombinationKey::CODE,
        upper: 0x1D670,
        lower: 0x1D68A,
        digits: Some(0x1D7F6),
        exceptions: &[],
    },
];

impl GlyphTable {
    /// The table for `key`.
    pub fn for_key(key: CombinationKey) -> Option<&'static GlyphTable> {
        TABLES.iter().find(|table| table.key == key)
    }

    /// The styled form of `base`, or `None` if this alphabet has no glyph for it.
    pub fn get(&self, base: char) -> Option<char> {
        if let Some((_, styled)) = self.exceptions.iter().find(|(b, _)| *b == base) {
            return Some(*styled);
        }
        let offset = |start: u32, first: char| char::from_u32(start + (base as u32 - first as u32));
        match base {
            'A'..='Z' => offset(self.upper, 'A'),
            'a'..='z' => offset(self.lower, 'a'),
            '0'..='9' => self.digits.and_then(|start| offset(start, '0')),
            _ => None,
        }
    }
}

/// Every base character a table may cover.
pub(crate) fn alphabet() -> impl Iterator<Item = char> {
    ('A'..='Z').chain('a'..='z').chain('0'..='9')
}

use smallvec::SmallVec;
use std::fmt;

/// Output of one `encode` call: the (possibly substituted) character followed
/// by up to two overlay marks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Glyph(SmallVec<[char; 3]>);

impl Glyph {
    pub fn as_chars(&self) -> &[char] {
        &self.0
    }

    /// The substituted character, without overlay marks.
    pub fn base(&self) -> Option<char> {
        self.0.first().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push_to(&self, out: &mut String) {
        out.extend(self.0.iter());
    }
}

impl From<char> for Glyph {
    fn from(c: char) -> Self {
        let mut chars = SmallVec::new();
        chars.push(c);
        Self(chars)
    }
}

impl Extend<char> for Glyph {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.0 {
            fmt::Write::write_char(f, *c)?;
        }
        Ok(())
    }
}

impl PartialEq<&str> for Glyph {
    fn eq(&self, other: &&str) -> bool {
        self.0.iter().copied().eq(other.chars())
    }
}

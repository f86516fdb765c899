use crate::set::StyleSet;
use std::fmt;

/// A substitution subset that Unicode defines codepoints for.
///
/// Construct through [`CombinationKey::new`], which rejects combinations with
/// no table (for example bold double-struck or italic script).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CombinationKey(StyleSet);

impl CombinationKey {
    pub const BOLD: Self = Self(StyleSet::BOLD);
    pub const ITALIC: Self = Self(StyleSet::ITALIC);
    pub const BOLD_ITALIC: Self = Self(StyleSet::BOLD.union(StyleSet::ITALIC));
    pub const SCRIPT: Self = Self(StyleSet::SCRIPT);
    pub const BOLD_SCRIPT: Self = Self(StyleSet::BOLD.union(StyleSet::SCRIPT));
    pub const FRAKTUR: Self = Self(StyleSet::FRAKTUR);
    pub const BOLD_FRAKTUR: Self = Self(StyleSet::BOLD.union(StyleSet::FRAKTUR));
    pub const DOUBLE: Self = Self(StyleSet::DOUBLE);
    pub const CODE: Self = Self(StyleSet::CODE);

    /// Every representable combination.
    pub const VALID: [Self; 9] = [
        Self::BOLD,
        Self::ITALIC,
        Self::BOLD_ITALIC,
        Self::SCRIPT,
        Self::BOLD_SCRIPT,
        Self::FRAKTUR,
        Self::BOLD_FRAKTUR,
        Self::DOUBLE,
        Self::CODE,
    ];

    /// Returns the key for `set`, or `None` if the combination has no glyphs.
    ///
    /// Overlay tags in `set` are ignored.
    pub fn new(set: StyleSet) -> Option<Self> {
        let substitution = set.substitution();
        Self::VALID.into_iter().find(|key| key.0 == substitution)
    }

    pub fn is_valid(set: StyleSet) -> bool {
        Self::new(set).is_some()
    }

    pub fn styles(self) -> StyleSet {
        self.0
    }
}

impl From<CombinationKey> for StyleSet {
    fn from(key: CombinationKey) -> Self {
        key.0
    }
}

impl fmt::Display for CombinationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

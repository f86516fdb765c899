use crate::table::{alphabet, TABLES};
use rustc_hash::FxHashMap;
use std::sync::LazyLock;
use unistyle_style::CombinationKey;

/// Styled codepoint -> (base character, key), over everything [`TABLES`] emits.
static INVERSE: LazyLock<FxHashMap<char, (char, CombinationKey)>> = LazyLock::new(|| {
    let mut index = FxHashMap::default();
    for table in &TABLES {
        for base in alphabet() {
            if let Some(styled) = table.get(base) {
                let previous = index.insert(styled, (base, table.key));
                debug_assert!(previous.is_none(), "{styled:?} emitted twice");
            }
        }
    }
    tracing::debug!(entries = index.len(), "built inverse glyph index");
    index
});

pub(crate) fn lookup(styled: char) -> Option<(char, CombinationKey)> {
    INVERSE.get(&styled).copied()
}

pub(crate) fn len() -> usize {
    INVERSE.len()
}

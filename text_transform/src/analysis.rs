//! Read-only views over styled text.

use crate::{
    char_class::CharClass,
    cluster::clusters,
    codec::{decode_char, decode_cluster, CharRecord},
};
use unistyle_glyph::is_overlay_mark;
use unistyle_style::StyleSet;

/// Decodes every position of `text`.
pub fn analyze(text: &str) -> Vec<CharRecord> {
    clusters(text).map(decode_cluster).collect()
}

/// Styles shared by every visible, non-whitespace position of `text`.
///
/// This is the "current style" a host reports for a selection. Empty when the
/// text has no such position.
pub fn common_styles(text: &str) -> StyleSet {
    clusters(text)
        .filter(|cluster| cluster.class() == CharClass::Styleable)
        .map(|cluster| decode_cluster(cluster).styles)
        .reduce(|common, styles| common & styles)
        .unwrap_or_default()
}

/// Removes all styling: every position becomes its base character.
///
/// Diacritics stay on their base. Stray overlay marks are dropped; other
/// invisible characters are kept.
pub fn strip(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for cluster in clusters(text) {
        if is_overlay_mark(cluster.base()) {
            continue;
        }
        out.push(decode_char(cluster.base()).base);
        out.extend(cluster.diacritics());
    }
    out
}

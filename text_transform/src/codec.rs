//! The bidirectional style codec.
//!
//! [`Codec::encode`] turns `(base, StyleSet)` into a [`Glyph`]; [`Codec::decode`]
//! turns a [`Cluster`] back into a [`CharRecord`]. Decode is total: anything the
//! tables did not emit decodes to itself with no styles.

use crate::{cluster::Cluster, glyph::Glyph};
use unistyle_glyph::{overlay_marks, GlyphTables};
use unistyle_style::{Precedence, StyleSet};

/// Decoded view of one text position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharRecord {
    pub base: char,
    pub styles: StyleSet,
}

impl CharRecord {
    pub fn new(base: char, styles: StyleSet) -> Self {
        Self { base, styles }
    }

    pub fn plain(base: char) -> Self {
        Self::new(base, StyleSet::empty())
    }
}

/// Encoder/decoder plus the two editing transforms built on it.
///
/// Holds no mutable state; share one instance freely.
#[derive(Debug, Clone)]
pub struct Codec {
    pub(crate) precedence: Precedence,
    pub(crate) skip_whitespace: bool,
}

impl Default for Codec {
    fn default() -> Self {
        Self::new(Precedence::default())
    }
}

impl Codec {
    pub fn new(precedence: Precedence) -> Self {
        Self {
            precedence,
            skip_whitespace: true,
        }
    }

    /// Whether the insertion transform leaves whitespace unstyled. Defaults to `true`.
    pub fn with_skip_whitespace(mut self, skip: bool) -> Self {
        self.skip_whitespace = skip;
        self
    }

    pub fn precedence(&self) -> &Precedence {
        &self.precedence
    }

    /// Encodes `base` with `styles`.
    ///
    /// Substitution uses the first fallback candidate with a glyph for `base`,
    /// leaving `base` unchanged if there is none. Overlay marks follow in fixed
    /// order, underline then strikethrough, each at most once.
    pub fn encode(&self, base: char, styles: StyleSet) -> Glyph {
        let mut glyph = Glyph::from(self.substitute(base, styles.substitution()));
        glyph.extend(overlay_marks(styles));
        glyph
    }

    fn substitute(&self, base: char, requested: StyleSet) -> char {
        if requested.is_empty() {
            return base;
        }
        for key in self.precedence.candidates(requested) {
            if let Some(styled) = GlyphTables::get(base, key) {
                if key.styles() != requested {
                    tracing::trace!(?base, %requested, resolved = %key, "fell back to a defined combination");
                }
                return styled;
            }
        }
        base
    }

    /// Writes `cluster` restyled to `styles`: the encoded base, then the
    /// cluster's own diacritics, then the overlay marks.
    pub(crate) fn encode_cluster(&self, cluster: Cluster<'_>, styles: StyleSet, out: &mut String) {
        let glyph = self.encode(cluster.base(), styles);
        let (base, overlays) = glyph.as_chars().split_at(1);
        out.extend(base);
        out.extend(cluster.diacritics());
        out.extend(overlays);
    }

    /// Decodes one position back to its base character and full style set.
    pub fn decode(&self, cluster: Cluster<'_>) -> CharRecord {
        decode_cluster(cluster)
    }
}

pub(crate) fn decode_cluster(cluster: Cluster<'_>) -> CharRecord {
    let mut record = decode_char(cluster.base());
    record.styles |= cluster.overlays();
    record
}

/// Decodes a lone codepoint (no overlay marks).
pub fn decode_char(c: char) -> CharRecord {
    match GlyphTables::lookup(c) {
        Some((base, key)) => CharRecord::new(base, key.styles()),
        None => CharRecord::plain(c),
    }
}

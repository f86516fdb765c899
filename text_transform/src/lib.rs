//! Style transform engine for unistyle.
//!
//! Styling is carried inside the character stream: bold `A` is U+1D400, an
//! underline is a trailing U+0332. This crate provides the codec between the two
//! views of a position and the editing transforms built on it:
//!
//! - [`encode`]: `(base, StyleSet)` to a [`Glyph`] of 1-3 codepoints
//! - [`decode`]: a [`Cluster`] back to a [`CharRecord`]
//! - [`transform_insertion`]: style new text with the style active at the cursor
//! - [`transform_selection`]: flip the tags that changed on an existing selection
//!
//! # Architecture
//!
//! ```text
//! unistyle_glyph::GlyphTables      static tables + inverse index
//!   | Precedence (unistyle_style)  fallback for undefined combinations
//! Codec::encode / Codec::decode
//!   |
//! Codec::transform_insertion, Codec::transform_selection
//! ```
//!
//! Every operation is a pure function of its inputs. The free functions use a
//! shared [`Codec`] with the default precedence; build a [`Codec`] directly to
//! change the fallback order.
//!
//! # Positions
//!
//! Text is processed per [`Cluster`]: a base character and the overlay marks
//! after it. Each cluster is independent of its neighbours.

mod analysis;
mod char_class;
mod cluster;
mod codec;
mod glyph;
mod insertion;
mod selection;

pub use analysis::{analyze, common_styles, strip};
pub use char_class::{classify, CharClass};
pub use cluster::{clusters, Cluster, Clusters};
pub use codec::{decode_char, CharRecord, Codec};
pub use glyph::Glyph;
pub use selection::{should_restyle, StyleDelta};
pub use unistyle_style::{CombinationKey, Precedence, Rank, StyleSet, StyleTag};

use std::sync::LazyLock;

static DEFAULT_CODEC: LazyLock<Codec> = LazyLock::new(Codec::default);

/// [`Codec::encode`] with the default precedence.
pub fn encode(base: char, styles: StyleSet) -> Glyph {
    DEFAULT_CODEC.encode(base, styles)
}

/// [`Codec::decode`]. Never fails.
pub fn decode(cluster: Cluster<'_>) -> CharRecord {
    DEFAULT_CODEC.decode(cluster)
}

/// [`Codec::transform_insertion`] with the default precedence.
pub fn transform_insertion(active: StyleSet, raw: &str) -> String {
    DEFAULT_CODEC.transform_insertion(active, raw)
}

/// [`Codec::transform_selection`] with the default precedence.
pub fn transform_selection(before: StyleSet, after: StyleSet, selection: &str) -> String {
    DEFAULT_CODEC.transform_selection(before, after, selection)
}

/// [`Codec::toggle`] with the default precedence.
pub fn toggle(tag: StyleTag, selection: &str) -> String {
    DEFAULT_CODEC.toggle(tag, selection)
}

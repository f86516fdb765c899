//! Restyling an existing selection.
//!
//! The text has no markup layer, so a selection can mix styles character by
//! character. Instead of "set style on range", each position is decoded, the
//! tags that changed between the host's `before` and `after` style sets are
//! flipped on it, and it is re-encoded. Styling outside the delta survives.

use crate::{
    analysis::common_styles,
    char_class::CharClass,
    cluster::clusters,
    codec::Codec,
};
use unistyle_style::{StyleSet, StyleTag};

/// Tags that changed between two style sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleDelta(StyleSet);

impl StyleDelta {
    pub fn between(before: StyleSet, after: StyleSet) -> Self {
        Self(before ^ after)
    }

    pub fn styles(self) -> StyleSet {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    /// Flips every delta tag on `current`, leaving the rest alone.
    pub fn apply(self, current: StyleSet) -> StyleSet {
        current ^ self.0
    }

    /// Sets every delta tag on `current` to its state in `after` instead of
    /// flipping it.
    pub fn settle(self, current: StyleSet, after: StyleSet) -> StyleSet {
        current.difference(self.0) | (self.0 & after)
    }
}

/// Whether a host should run the selection transform at all.
///
/// Only a pure style change qualifies: if the content itself changed, or the
/// style did not, the host takes its ordinary edit path instead.
pub fn should_restyle(content_changed: bool, before: StyleSet, after: StyleSet) -> bool {
    !content_changed && before != after
}

impl Codec {
    /// Restyles `selection` after the host's style set went from `before` to `after`.
    ///
    /// Invisible characters pass through. Substitution tags are no-ops on
    /// characters without a glyph, overlay tags apply to any visible character.
    ///
    /// Whitespace is not part of the host's common style (see
    /// [`common_styles`]), so it follows `after` rather than flipping: a space
    /// the insertion transform left plain stays plain when a tag is removed.
    pub fn transform_selection(&self, before: StyleSet, after: StyleSet, selection: &str) -> String {
        let delta = StyleDelta::between(before, after);
        if delta.is_empty() {
            return selection.to_string();
        }

        let mut out = String::with_capacity(selection.len() * 2);
        for cluster in clusters(selection) {
            let record = self.decode(cluster);
            let styles = match cluster.class() {
                CharClass::Invisible => {
                    cluster.push_to(&mut out);
                    continue;
                },
                CharClass::Whitespace => delta.settle(record.styles, after),
                CharClass::Styleable => delta.apply(record.styles),
            };
            self.encode_cluster(cluster, styles, &mut out);
        }
        tracing::trace!(delta = %delta.styles(), input = selection.len(), output = out.len(), "restyled selection");
        out
    }

    /// Toggles `tag` over `selection`, taking `before` from the styles every
    /// visible character already shares.
    pub fn toggle(&self, tag: StyleTag, selection: &str) -> String {
        let before = common_styles(selection);
        let after = before ^ StyleSet::from(tag);
        self.transform_selection(before, after, selection)
    }
}

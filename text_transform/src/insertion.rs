use crate::{char_class::CharClass, cluster::clusters, codec::Codec};
use unistyle_style::StyleSet;

impl Codec {
    /// Styles freshly typed or pasted text with the style active at the cursor.
    ///
    /// Raw characters are treated as base characters: an already substituted
    /// character has no table entry and passes through, so re-running the
    /// transform on its own output is a no-op. Overlay marks already present on a
    /// cluster are kept and merged with the active overlays, never duplicated.
    /// Invisible characters pass through untouched, and so does whitespace unless
    /// the codec was built with `with_skip_whitespace(false)`.
    pub fn transform_insertion(&self, active: StyleSet, raw: &str) -> String {
        let mut out = String::with_capacity(raw.len() * 4);
        for cluster in clusters(raw) {
            let skip = match cluster.class() {
                CharClass::Styleable => false,
                CharClass::Whitespace => self.skip_whitespace,
                CharClass::Invisible => true,
            };
            if skip {
                cluster.push_to(&mut out);
                continue;
            }
            self.encode_cluster(cluster, active | cluster.overlays(), &mut out);
        }
        tracing::trace!(%active, input = raw.len(), output = out.len(), "styled insertion");
        out
    }
}

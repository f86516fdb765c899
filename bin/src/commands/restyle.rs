use unistyle_text_transform::{Codec, StyleSet};

/// Applies the change from `before` to `after` to already styled text.
pub fn handle(codec: &Codec, before: StyleSet, after: StyleSet, input: &str) -> String {
    codec.transform_selection(before, after, input)
}

use unistyle_text_transform::{Codec, StyleSet};

/// Styles `input` as if it was typed with `styles` active.
pub fn handle(codec: &Codec, styles: StyleSet, input: &str) -> String {
    codec.transform_insertion(styles, input)
}

use unistyle_text_transform::{Codec, StyleTag};

pub fn handle(codec: &Codec, tag: StyleTag, input: &str) -> String {
    codec.toggle(tag, input)
}

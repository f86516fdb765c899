use unistyle_style::{StyleSet, StyleTag};

/// U+0332 COMBINING LOW LINE.
pub const UNDERLINE_MARK: char = '\u{0332}';

/// U+0336 COMBINING LONG STROKE OVERLAY.
pub const STRIKETHROUGH_MARK: char = '\u{0336}';

/// Overlay marks in the order they are appended.
pub const OVERLAY_MARKS: [(StyleTag, char); 2] = [
    (StyleTag::Underline, UNDERLINE_MARK),
    (StyleTag::Strikethrough, STRIKETHROUGH_MARK),
];

pub fn overlay_mark(tag: StyleTag) -> Option<char> {
    OVERLAY_MARKS
        .iter()
        .find(|(t, _)| *t == tag)
        .map(|(_, mark)| *mark)
}

pub fn overlay_tag(mark: char) -> Option<StyleTag> {
    OVERLAY_MARKS
        .iter()
        .find(|(_, m)| *m == mark)
        .map(|(tag, _)| *tag)
}

pub fn is_overlay_mark(ch: char) -> bool {
    overlay_tag(ch).is_some()
}

/// Marks for the overlay tags in `styles`, in append order, each at most once.
pub fn overlay_marks(styles: StyleSet) -> impl Iterator<Item = char> {
    OVERLAY_MARKS
        .into_iter()
        .filter(move |(tag, _)| styles.contains_tag(*tag))
        .map(|(_, mark)| mark)
}

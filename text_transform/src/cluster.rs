//! Segmentation of text into styled positions.
//!
//! A position is one base character plus the run of combining marks directly
//! after it: overlay marks carry styles, other diacritics (the accent of an NFD
//! `e\u{0301}`) are kept as written. Invisible characters never own marks, so
//! a mark after a line break (or at the very start of the text) is a cluster of
//! its own.

use crate::char_class::{classify, is_combining_mark, CharClass};
use unistyle_glyph::{is_overlay_mark, overlay_tag};
use unistyle_style::StyleSet;

/// One text position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cluster<'a> {
    base: char,
    marks: &'a str,
}

impl<'a> Cluster<'a> {
    /// A cluster with `marks` after `base`. Characters in `marks` other than
    /// overlay marks are ignored by [`Cluster::overlays`] and reported by
    /// [`Cluster::diacritics`].
    pub fn new(base: char, marks: &'a str) -> Self {
        Self { base, marks }
    }

    pub fn base(&self) -> char {
        self.base
    }

    /// Every mark after the base, as it appears in the text.
    pub fn marks(&self) -> &'a str {
        self.marks
    }

    /// The marks that are not overlay marks, in text order.
    pub fn diacritics(&self) -> impl Iterator<Item = char> + 'a {
        self.marks.chars().filter(|c| !is_overlay_mark(*c))
    }

    pub fn class(&self) -> CharClass {
        classify(self.base)
    }

    /// Overlay tags carried by the marks, each counted once.
    pub fn overlays(&self) -> StyleSet {
        self.marks.chars().filter_map(overlay_tag).collect()
    }

    /// Writes the cluster back unchanged.
    pub fn push_to(&self, out: &mut String) {
        out.push(self.base);
        out.push_str(self.marks);
    }
}

impl From<char> for Cluster<'_> {
    fn from(base: char) -> Self {
        Self { base, marks: "" }
    }
}

/// Iterator over the clusters of a string, see [`clusters`].
#[derive(Debug, Clone)]
pub struct Clusters<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Clusters<'a> {
    type Item = Cluster<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let base = self.rest.chars().next()?;
        let start = base.len_utf8();
        let end = if classify(base) == CharClass::Invisible {
            start
        } else {
            start
                + self.rest[start..]
                    .chars()
                    .take_while(|c| is_overlay_mark(*c) || is_combining_mark(*c))
                    .map(char::len_utf8)
                    .sum::<usize>()
        };
        let cluster = Cluster::new(base, &self.rest[start..end]);
        self.rest = &self.rest[end..];
        Some(cluster)
    }
}

/// Splits `text` into clusters. Concatenating every cluster reproduces `text`.
pub fn clusters(text: &str) -> Clusters<'_> {
    Clusters { rest: text }
}

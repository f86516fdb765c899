//! Codec properties over the full supported alphabet.

use unistyle_glyph::GlyphTables;
use unistyle_text_transform::{
    clusters, decode, encode, transform_insertion, transform_selection, CharRecord, Cluster,
    CombinationKey, StyleSet,
};

fn alphabet() -> impl Iterator<Item = char> {
    ('A'..='Z').chain('a'..='z').chain('0'..='9')
}

fn decode_str(text: &str) -> CharRecord {
    let mut iter = clusters(text);
    let cluster = iter.next().unwrap();
    assert!(iter.next().is_none(), "{text:?} is more than one position");
    decode(cluster)
}

#[test]
fn round_trip_every_valid_key() {
    unistyle_log::test();
    for key in CombinationKey::VALID {
        for c in alphabet() {
            if GlyphTables::get(c, key).is_none() {
                continue;
            }
            let glyph = encode(c, key.styles());
            assert_eq!(glyph.len(), 1);
            let styled = glyph.base().unwrap();
            assert_ne!(styled, c, "{c} under {key}");
            assert_eq!(
                decode(Cluster::from(styled)),
                CharRecord::new(c, key.styles()),
                "{c} under {key}"
            );
        }
    }
}

#[test]
fn fallback_digits_decode_to_the_rendered_key() {
    for key in CombinationKey::VALID {
        for c in '0'..='9' {
            if GlyphTables::get(c, key).is_some() {
                continue;
            }
            let styled = encode(c, key.styles()).base().unwrap();
            let record = decode(Cluster::from(styled));
            assert_eq!(record.base, c, "{c} under {key}");
            // Whatever survived the fallback is a defined key for this digit.
            if styled == c {
                assert!(record.styles.is_empty());
            } else {
                let resolved = CombinationKey::new(record.styles).unwrap();
                assert_eq!(GlyphTables::get(c, resolved), Some(styled));
                assert!(key.styles().contains(record.styles));
            }
        }
    }
    assert_eq!(
        decode(Cluster::from(encode('0', StyleSet::BOLD | StyleSet::ITALIC).base().unwrap())),
        CharRecord::new('0', StyleSet::BOLD)
    );
    assert_eq!(encode('3', StyleSet::FRAKTUR), "3");
}

#[test]
fn round_trip_with_overlays() {
    let overlays = StyleSet::UNDERLINE | StyleSet::STRIKETHROUGH;
    for key in CombinationKey::VALID {
        for c in ('A'..='Z').chain('a'..='z') {
            let styles = key.styles() | overlays;
            let text = encode(c, styles).to_string();
            assert_eq!(decode_str(&text), CharRecord::new(c, styles));
        }
    }
}

#[test]
fn overlays_are_idempotent() {
    for tag in [StyleSet::UNDERLINE, StyleSet::STRIKETHROUGH] {
        let once = transform_insertion(tag, "abc");
        let twice = transform_insertion(tag, &once);
        assert_eq!(once, twice);
        assert_eq!(encode('a', tag | tag), encode('a', tag));
    }
}

#[test]
fn passthrough_keeps_base_form() {
    let substitution = StyleSet::SUBSTITUTION_GROUP;
    for c in [' ', '.', ',', '!', '-', 'é', 'ß', 'Ж', 'λ', '漢', '🙂'] {
        for styles in [
            StyleSet::BOLD,
            StyleSet::BOLD | StyleSet::ITALIC,
            StyleSet::SCRIPT,
            StyleSet::FRAKTUR,
            StyleSet::DOUBLE,
            StyleSet::CODE,
            substitution,
        ] {
            assert_eq!(encode(c, styles).as_chars(), &[c]);
        }
        let marked = encode(c, StyleSet::BOLD | StyleSet::UNDERLINE);
        assert_eq!(marked.as_chars(), &[c, '\u{0332}']);
    }
}

#[test]
fn fallback_is_deterministic() {
    let requested = StyleSet::BOLD | StyleSet::DOUBLE;
    let first = encode('A', requested);
    for _ in 0..10 {
        assert_eq!(encode('A', requested), first);
    }
    assert_eq!(first, encode('A', StyleSet::DOUBLE));
    assert_eq!(first, "𝔸");
}

#[test]
fn bold_capital_a() {
    assert_eq!(encode('A', StyleSet::BOLD), "\u{1D400}");
    assert_eq!(decode_str("𝐀"), CharRecord::new('A', StyleSet::BOLD));
}

#[test]
fn bold_italic_small_a() {
    assert_eq!(encode('a', StyleSet::BOLD | StyleSet::ITALIC), "𝒂");
    assert_eq!(
        decode_str("𝒂"),
        CharRecord::new('a', StyleSet::BOLD | StyleSet::ITALIC)
    );
}

#[test]
fn underline_then_strikethrough() {
    let expected = "x\u{0332}\u{0336}";
    assert_eq!(encode('x', StyleSet::UNDERLINE | StyleSet::STRIKETHROUGH), expected);
    assert_eq!(encode('x', StyleSet::STRIKETHROUGH | StyleSet::UNDERLINE), expected);
}

#[test]
fn selection_toggle_preserves_mixed_styles() {
    let restyled = transform_selection(StyleSet::empty(), StyleSet::ITALIC, "𝐀b");
    assert_eq!(restyled, "𝑨𝑏");
    let records: Vec<_> = clusters(&restyled).map(decode).collect();
    assert_eq!(
        records,
        vec![
            CharRecord::new('A', StyleSet::BOLD | StyleSet::ITALIC),
            CharRecord::new('b', StyleSet::ITALIC),
        ]
    );
}

#[test]
fn decode_is_total() {
    for c in ['A', '~', '\0', '\u{0301}', '\u{1D455}', '\u{FFFD}', '😀', char::MAX] {
        assert_eq!(decode(Cluster::from(c)), CharRecord::plain(c));
    }
}

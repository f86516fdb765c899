//! Editing scenarios: typing into styled text, restyling mixed selections.

use unistyle_text_transform::{
    analyze, common_styles, should_restyle, strip, toggle, transform_insertion,
    transform_selection, StyleSet, StyleTag,
};

#[test]
fn typing_with_active_styles() {
    let typed = transform_insertion(StyleSet::BOLD | StyleSet::UNDERLINE, "Hi there");
    assert_eq!(typed, "𝐇\u{0332}𝐢\u{0332} 𝐭\u{0332}𝐡\u{0332}𝐞\u{0332}𝐫\u{0332}𝐞\u{0332}");
    assert_eq!(strip(&typed), "Hi there");
}

#[test]
fn multi_line_selection() {
    let text = transform_insertion(StyleSet::SCRIPT, "Be\nog");
    assert_eq!(text, "ℬℯ\nℴℊ");
    let restyled = transform_selection(StyleSet::SCRIPT, StyleSet::empty(), &text);
    assert_eq!(restyled, "Be\nog");
}

#[test]
fn adding_bold_to_script_and_fraktur() {
    let text = format!(
        "{}{}",
        transform_insertion(StyleSet::SCRIPT, "H"),
        transform_insertion(StyleSet::FRAKTUR, "H")
    );
    assert_eq!(text, "ℋℌ");
    let bolded = transform_selection(StyleSet::empty(), StyleSet::BOLD, &text);
    assert_eq!(bolded, "𝓗𝕳");
}

#[test]
fn removing_italic_from_bold_italic_leaves_bold() {
    let text = transform_insertion(StyleSet::BOLD | StyleSet::ITALIC, "ab");
    let restyled = transform_selection(StyleSet::ITALIC, StyleSet::empty(), &text);
    assert_eq!(restyled, "𝐚𝐛");
}

#[test]
fn toggling_code_on_bold_text_falls_back() {
    let text = transform_insertion(StyleSet::BOLD, "ab");
    // {BOLD, CODE} has no glyphs; CODE outranks BOLD.
    let restyled = transform_selection(StyleSet::empty(), StyleSet::CODE, &text);
    assert_eq!(restyled, "𝚊𝚋");
    // The bold tag was dropped by the fallback, so decode reports CODE only.
    assert!(analyze(&restyled)
        .iter()
        .all(|record| record.styles == StyleSet::CODE));
}

#[test]
fn toggle_uses_common_styles() {
    let text = "𝐚𝐛 c";
    assert_eq!(common_styles(text), StyleSet::empty());
    // Mixed selection: every position flips independently.
    assert_eq!(toggle(StyleTag::Bold, text), "ab 𝐜");
}

#[test]
fn guard_skips_content_edits() {
    assert!(!should_restyle(true, StyleSet::empty(), StyleSet::ITALIC));
    assert!(should_restyle(false, StyleSet::empty(), StyleSet::ITALIC));
}

#[test]
fn emoji_sequences_survive() {
    let family = "👨\u{200D}👩\u{200D}👧";
    let restyled = transform_selection(StyleSet::empty(), StyleSet::UNDERLINE, family);
    assert_eq!(
        restyled,
        "👨\u{0332}\u{200D}👩\u{0332}\u{200D}👧\u{0332}"
    );
    assert_eq!(strip(&restyled), family);
}

#[test]
fn toggle_undoes_typed_overlays() {
    for tag in [StyleTag::Underline, StyleTag::Strikethrough] {
        let typed = transform_insertion(StyleSet::from(tag), "a b\tc");
        assert_eq!(common_styles(&typed), StyleSet::from(tag));
        assert_eq!(toggle(tag, &typed), "a b\tc");
    }
}

#[test]
fn toggle_on_plain_text_runs_through_spaces() {
    let underlined = toggle(StyleTag::Underline, "a b");
    assert_eq!(underlined, "a\u{0332} \u{0332}b\u{0332}");
    assert_eq!(toggle(StyleTag::Underline, &underlined), "a b");
}

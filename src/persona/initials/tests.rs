// SPDX-FileCopyrightText: 2026 Limn Contributors
// SPDX-License-Identifier: MIT

use rstest::rstest;

use super::{cleanup_display_name, get_initials};

#[test]
fn absent_and_empty_names_yield_empty_labels() {
    assert_eq!(get_initials(None, false), "");
    assert_eq!(get_initials(None, true), "");
    assert_eq!(get_initials(Some(""), false), "");
    assert_eq!(get_initials(Some("   "), true), "");
}

#[rstest]
#[case("John Smith", "JS")]
#[case("john smith", "JS")]
#[case("John Quincy Adams", "JA")]
#[case("John Ronald Reuel Tolkien", "J")]
#[case("Madonna", "M")]
#[case("John Smith (Contractor)", "JS")]
#[case("(Dr) John Smith", "JS")]
#[case("Mary-Jane Watson", "MW")]
#[case("4lice Cooper", "4C")]
#[case("  John \t  Smith  ", "JS")]
fn latin_names(#[case] name: &str, #[case] expected: &str) {
    assert_eq!(get_initials(Some(name), false), expected);
}

#[test]
fn latin_two_character_labels_swap_under_rtl() {
    assert_eq!(get_initials(Some("John Smith"), true), "SJ");
    assert_eq!(get_initials(Some("John Quincy Adams"), true), "AJ");
    // Single-character labels are unaffected.
    assert_eq!(get_initials(Some("Madonna"), true), "M");
}

#[test]
fn punctuation_only_names_degrade_to_empty() {
    assert_eq!(get_initials(Some("!!!"), false), "");
    assert_eq!(get_initials(Some("(alias)"), false), "");
}

#[test]
fn arabic_names_take_a_single_edge_character() {
    // Logical order of "محمد" is م ح م د.
    assert_eq!(get_initials(Some("محمد"), false), "م");
    assert_eq!(get_initials(Some("محمد"), true), "د");
    // Internal whitespace is stripped entirely before picking.
    assert_eq!(get_initials(Some("محمد علي"), false), "م");
    assert_eq!(get_initials(Some("محمد علي"), true), "ي");
}

#[test]
fn short_cjk_names_take_a_single_family_name_character() {
    assert_eq!(get_initials(Some("하나"), false), "나");
    assert_eq!(get_initials(Some("하나"), true), "하");
}

#[test]
fn long_cjk_names_take_two_family_name_characters() {
    assert_eq!(get_initials(Some("송하나"), false), "하나");
    assert_eq!(get_initials(Some("송하나"), true), "송하");
    assert_eq!(get_initials(Some("李小龍"), false), "小龍");
    assert_eq!(get_initials(Some("李小龍"), true), "李小");
    // Whitespace inside the name does not count towards its length.
    assert_eq!(get_initials(Some("김 철수"), false), "철수");
    assert_eq!(get_initials(Some("김 철수"), true), "김철");
}

#[test]
fn supplementary_plane_ideographs_use_the_cjk_rule() {
    assert_eq!(get_initials(Some("\u{20000}\u{20001}"), false), "\u{20001}");
    assert_eq!(
        get_initials(Some("\u{20000}\u{20001}\u{20002}"), false),
        "\u{20001}\u{20002}"
    );
}

#[test]
fn a_single_arabic_character_outranks_latin_text() {
    // Classification happens before tokenization, so the Arabic rule applies
    // to the whole whitespace-stripped name.
    assert_eq!(get_initials(Some("محمد Ali"), false), "م");
    assert_eq!(get_initials(Some("محمد Ali"), true), "i");
}

#[test]
fn mixed_latin_and_han_uses_the_cjk_rule() {
    assert_eq!(get_initials(Some("David 王"), false), "d王");
    assert_eq!(get_initials(Some("David 王"), true), "Da");
}

#[rstest]
#[case("John Smith")]
#[case("John Quincy Adams")]
#[case("Weird   spacing\u{00A0}everywhere (ok?)")]
#[case("محمد علي")]
#[case("송하나")]
#[case("ß sharp")]
#[case("!!!")]
#[case("")]
fn labels_never_exceed_two_characters(#[case] name: &str) {
    for is_rtl in [false, true] {
        let label = get_initials(Some(name), is_rtl);
        assert!(label.chars().count() <= 2, "{name:?} -> {label:?}");
    }
}

#[rstest]
#[case("John Smith (Contractor)")]
#[case("  lots \t of   space  ")]
#[case("송 하나")]
fn cleanup_is_idempotent(#[case] name: &str) {
    let once = cleanup_display_name(name);
    assert_eq!(cleanup_display_name(&once), once);
}

#[test]
fn extraction_is_deterministic() {
    for is_rtl in [false, true] {
        let first = get_initials(Some("John Quincy Adams"), is_rtl);
        let second = get_initials(Some("John Quincy Adams"), is_rtl);
        assert_eq!(first, second);
    }
}

#[test]
fn multi_character_uppercase_expansions_are_truncated() {
    // ß uppercases to SS; only the first expansion character is used.
    assert_eq!(get_initials(Some("ßilly ßob"), false), "SS");
}

// SPDX-FileCopyrightText: 2026 Limn Contributors
// SPDX-License-Identifier: MIT

//! Initials extraction for persona display names.

use std::sync::LazyLock;

use regex::Regex;

use super::script::ScriptClass;

/// Parenthesized spans, including the parentheses themselves.
static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("valid regex"));

/// Anything that is neither a Unicode letter/digit nor whitespace. Whitespace
/// survives so token boundaries are preserved for the later split.
static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}\s]").expect("valid regex"));

/// Runs of whitespace, collapsed to a single space during cleanup.
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Derive a compact label (up to 2 characters) from a persona display name.
///
/// The name is cleaned up first (parenthetical suffixes dropped, punctuation
/// stripped, whitespace collapsed), classified by writing system, and handed to
/// a script-specific rule. `is_rtl` is the ambient text direction and affects
/// which characters are picked and their order.
///
/// Total over its whole input domain: `None`, empty strings, and names with no
/// letters at all produce an empty label rather than an error.
pub fn get_initials(display_name: Option<&str>, is_rtl: bool) -> String {
    let Some(display_name) = display_name else {
        return String::new();
    };

    let name = cleanup_display_name(display_name);

    match ScriptClass::of(&name) {
        ScriptClass::Arabic => arabic_initials(&name, is_rtl),
        ScriptClass::Cjk => cjk_initials(&name, is_rtl),
        ScriptClass::Latin => latin_initials(&name, is_rtl),
    }
}

/// Normalize a display name before extraction. Idempotent.
pub(crate) fn cleanup_display_name(display_name: &str) -> String {
    // Suffixes within parenthesis are not part of the name.
    let name = PARENTHETICAL.replace_all(display_name, "");
    let name = NON_ALPHANUMERIC.replace_all(&name, "");
    let name = WHITESPACE_RUN.replace_all(&name, " ");
    name.trim().to_owned()
}

fn arabic_initials(name: &str, is_rtl: bool) -> String {
    let mut glyphs = name.chars().filter(|c| !c.is_whitespace());
    let pick = if is_rtl { glyphs.next_back() } else { glyphs.next() };
    pick.map(String::from).unwrap_or_default()
}

fn cjk_initials(name: &str, is_rtl: bool) -> String {
    let glyphs: Vec<char> = name.chars().filter(|c| !c.is_whitespace()).collect();

    // Short names show a single character of the family name.
    if glyphs.len() <= 2 {
        let pick = if is_rtl { glyphs.first() } else { glyphs.last() };
        return pick.map(|&c| String::from(c)).unwrap_or_default();
    }

    // Long names show the two most significant characters of the family name.
    let pair = if is_rtl { &glyphs[..2] } else { &glyphs[glyphs.len() - 2..] };
    pair.iter().collect()
}

fn latin_initials(name: &str, is_rtl: bool) -> String {
    if name.is_empty() {
        return String::new();
    }

    let tokens: Vec<&str> = name.split(' ').collect();
    let mut initials = String::new();

    match tokens.len() {
        2 => {
            push_initial(&mut initials, tokens[0]);
            push_initial(&mut initials, tokens[1]);
        }
        3 => {
            // The middle name is skipped.
            push_initial(&mut initials, tokens[0]);
            push_initial(&mut initials, tokens[2]);
        }
        _ => push_initial(&mut initials, tokens[0]),
    }

    if is_rtl && initials.chars().count() == 2 {
        return initials.chars().rev().collect();
    }

    initials
}

fn push_initial(out: &mut String, token: &str) {
    let Some(first) = token.chars().next() else {
        return;
    };
    // Uppercasing can expand to several characters (e.g. ß); only the first is
    // kept so the label stays within two characters.
    if let Some(upper) = first.to_uppercase().next() {
        out.push(upper);
    }
}

#[cfg(test)]
mod tests;

// SPDX-FileCopyrightText: 2026 Limn Contributors
// SPDX-License-Identifier: MIT

/// Writing-system classification of a cleaned display name.
///
/// Classes are mutually exclusive and tested in priority order: Arabic wins
/// over CJK, and anything unrecognized falls through to `Latin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptClass {
    Arabic,
    /// Korean or Chinese; both share one extraction rule.
    Cjk,
    /// Everything else, including scripts with no dedicated rule.
    Latin,
}

impl ScriptClass {
    pub fn of(name: &str) -> Self {
        if name.chars().any(is_arabic) {
            return Self::Arabic;
        }
        if name.chars().any(|c| is_hangul(c) || is_cjk_ideograph(c)) {
            return Self::Cjk;
        }
        Self::Latin
    }
}

/// Arabic letters and Arabic-Indic digits.
fn is_arabic(c: char) -> bool {
    matches!(c, '\u{0621}'..='\u{064A}' | '\u{0660}'..='\u{0669}')
}

/// Hangul jamo, compatibility jamo, and precomposed syllable blocks.
fn is_hangul(c: char) -> bool {
    matches!(
        c,
        '\u{1100}'..='\u{11FF}'
            | '\u{3130}'..='\u{318F}'
            | '\u{A960}'..='\u{A97F}'
            | '\u{AC00}'..='\u{D7AF}'
            | '\u{D7B0}'..='\u{D7FF}'
    )
}

/// CJK unified ideographs, a handful of compatibility singletons, and the
/// supplementary-plane extensions B through D.
fn is_cjk_ideograph(c: char) -> bool {
    matches!(
        c,
        '\u{4E00}'..='\u{9FCC}'
            | '\u{3400}'..='\u{4DB5}'
            | '\u{FA0E}'
            | '\u{FA0F}'
            | '\u{FA11}'
            | '\u{FA13}'
            | '\u{FA14}'
            | '\u{FA1F}'
            | '\u{FA21}'
            | '\u{FA23}'
            | '\u{FA24}'
            | '\u{FA27}'..='\u{FA29}'
            | '\u{20000}'..='\u{2A6D6}'
            | '\u{2A700}'..='\u{2B734}'
            | '\u{2B740}'..='\u{2B81D}'
    )
}

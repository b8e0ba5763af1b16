// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{LEADS, SYLLABLE_BASE, SYLLABLE_LAST, TRAILS, TRAIL_COUNT, VOWELS,
            VOWEL_COUNT};

/// A precomposed Hangul syllable split into the jamo a user would type to produce it.
/// Only ever constructed for characters inside the syllable block; see [`decompose`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Syllable {
    /// The lead consonant, eg: `ㅇ` for `안`.
    pub initial: char,
    /// The vowel, eg: `ㅏ` for `안`.
    pub medial: char,
    /// The trail consonant, eg: `ㄴ` for `안`. [None] when the syllable has no trail,
    /// eg: `가`.
    pub maybe_final: Option<char>,
    /// The original precomposed character.
    pub combined: char,
}

/// Membership test on the precomposed syllable block `U+AC00..=U+D7A3`. False for
/// everything else, including isolated jamo like `ㄱ`.
#[must_use]
pub fn is_hangul_syllable(ch: char) -> bool {
    (SYLLABLE_BASE..=SYLLABLE_LAST).contains(&(ch as u32))
}

/// True when `ch` is an isolated lead or trail consonant jamo, eg: `ㄱ` or `ㄳ`.
#[must_use]
pub fn is_consonant(ch: char) -> bool { LEADS.contains(&ch) || TRAILS.contains(&ch) }

/// True when `ch` is an isolated vowel jamo, eg: `ㅏ`.
#[must_use]
pub fn is_vowel(ch: char) -> bool { VOWELS.contains(&ch) }

/// Split a precomposed syllable into its jamo. Returns [None] for any character
/// outside the syllable block (Latin letters, digits, punctuation, newline, isolated
/// jamo, etc.) - that is the "not applicable" signal, not an error.
#[must_use]
pub fn decompose(ch: char) -> Option<Syllable> {
    if !is_hangul_syllable(ch) {
        return None;
    }

    let offset = (ch as u32 - SYLLABLE_BASE) as usize;
    let initial_index = offset / (VOWEL_COUNT * TRAIL_COUNT);
    let medial_index = (offset % (VOWEL_COUNT * TRAIL_COUNT)) / TRAIL_COUNT;
    let final_index = offset % TRAIL_COUNT;

    Some(Syllable {
        initial: LEADS[initial_index],
        medial: VOWELS[medial_index],
        maybe_final: if final_index > 0 {
            Some(TRAILS[final_index - 1])
        } else {
            None
        },
        combined: ch,
    })
}

/// Recompose a syllable from its jamo via the inverse of the [`decompose`]
/// arithmetic. An absent `maybe_final` is trail index 0. Returns [None] when any
/// supplied jamo is not found in its table (composition failure, not a panic).
#[must_use]
pub fn compose(initial: char, medial: char, maybe_final: Option<char>) -> Option<char> {
    let initial_index = LEADS.iter().position(|&it| it == initial)?;
    let medial_index = VOWELS.iter().position(|&it| it == medial)?;
    let final_index = match maybe_final {
        Some(trail) => TRAILS.iter().position(|&it| it == trail)? + 1,
        None => 0,
    };

    let offset = initial_index * VOWEL_COUNT * TRAIL_COUNT
        + medial_index * TRAIL_COUNT
        + final_index;
    char::from_u32(SYLLABLE_BASE + offset as u32)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::{SYLLABLE_BASE, SYLLABLE_LAST, Syllable, compose, decompose,
                is_consonant, is_hangul_syllable, is_vowel};

    #[test_case('안', 'ㅇ', 'ㅏ', Some('ㄴ'); "syllable with trail")]
    #[test_case('가', 'ㄱ', 'ㅏ', None; "syllable without trail")]
    #[test_case('한', 'ㅎ', 'ㅏ', Some('ㄴ'); "last lead row")]
    #[test_case('뷁', 'ㅂ', 'ㅞ', Some('ㄺ'); "cluster trail")]
    fn test_decompose(ch: char, initial: char, medial: char, maybe_final: Option<char>) {
        assert_eq!(
            decompose(ch),
            Some(Syllable {
                initial,
                medial,
                maybe_final,
                combined: ch,
            })
        );
    }

    #[test_case('a'; "ascii letter")]
    #[test_case('7'; "digit")]
    #[test_case('\n'; "newline")]
    #[test_case('ㄱ'; "isolated jamo")]
    #[test_case('！'; "fullwidth punctuation")]
    fn test_decompose_rejects_non_syllables(ch: char) {
        assert_eq!(decompose(ch), None);
    }

    #[test]
    fn test_decompose_rejects_block_neighbors() {
        let before = char::from_u32(SYLLABLE_BASE - 1).unwrap();
        let after = char::from_u32(SYLLABLE_LAST + 1).unwrap();
        assert_eq!(decompose(before), None);
        assert_eq!(decompose(after), None);
    }

    #[test]
    fn test_compose() {
        assert_eq!(compose('ㅇ', 'ㅏ', Some('ㄴ')), Some('안'));
        assert_eq!(compose('ㄱ', 'ㅏ', None), Some('가'));
        assert_eq!(compose('ㅎ', 'ㅣ', Some('ㅎ')), Some('힣'));
    }

    #[test]
    fn test_compose_fails_on_unknown_jamo() {
        // Lead that is not in the lead table.
        assert_eq!(compose('a', 'ㅏ', None), None);
        // Vowel slot given a consonant.
        assert_eq!(compose('ㅇ', 'ㄴ', None), None);
        // Trail slot given a vowel.
        assert_eq!(compose('ㅇ', 'ㅏ', Some('ㅏ')), None);
        // `ㄸ` is a valid lead but never a trail.
        assert_eq!(compose('ㅇ', 'ㅏ', Some('ㄸ')), None);
    }

    #[test]
    fn test_round_trip_entire_syllable_block() {
        for code in SYLLABLE_BASE..=SYLLABLE_LAST {
            let ch = char::from_u32(code).unwrap();
            let syllable = decompose(ch).unwrap();
            assert_eq!(
                compose(syllable.initial, syllable.medial, syllable.maybe_final),
                Some(ch)
            );
            assert_eq!(syllable.combined, ch);
        }
    }

    #[test]
    fn test_is_hangul_syllable() {
        assert!(is_hangul_syllable('안'));
        assert!(is_hangul_syllable('가'));
        assert!(is_hangul_syllable('힣'));
        assert!(!is_hangul_syllable('A'));
        assert!(!is_hangul_syllable('9'));
        assert!(!is_hangul_syllable('ㅏ'));
    }

    #[test]
    fn test_jamo_class_predicates() {
        assert!(is_consonant('ㄱ'));
        assert!(is_consonant('ㄳ')); // Trail-only cluster.
        assert!(!is_consonant('ㅏ'));
        assert!(!is_consonant('가'));
        assert!(is_vowel('ㅏ'));
        assert!(is_vowel('ㅢ'));
        assert!(!is_vowel('ㄱ'));
        assert!(!is_vowel('가'));
    }
}

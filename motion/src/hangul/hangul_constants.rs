// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:disable

//! Jamo tables and the arithmetic constants of the precomposed Hangul syllable block.
//! Table order is significant: it encodes the mapping between a syllable code point
//! and its jamo indices, per the Unicode Hangul syllable composition formula.
//! More info: <https://www.unicode.org/versions/latest/core-spec/chapter-3/#G24646>

/// First code point of the precomposed syllable block, `가`.
pub const SYLLABLE_BASE: u32 = 0xAC00;
/// Last code point of the precomposed syllable block, `힣`.
pub const SYLLABLE_LAST: u32 = 0xD7A3;

pub const LEAD_COUNT: usize = 19;
pub const VOWEL_COUNT: usize = 21;
/// Trail index 0 denotes "no trailing consonant", so the dimension is 28 wide even
/// though there are only 27 real trails.
pub const TRAIL_COUNT: usize = 28;

/// The 19 lead (initial) consonants, in arithmetic order.
pub const LEADS: [char; LEAD_COUNT] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ',
    'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// The 21 vowels (medials), in arithmetic order.
pub const VOWELS: [char; VOWEL_COUNT] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ',
    'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// The 27 trail (final) consonants, at arithmetic indices `1..=27`. Index 0 of the
/// trail dimension ("no trail") has no entry here.
pub const TRAILS: [char; TRAIL_COUNT - 1] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ',
    'ㄿ', 'ㅀ', 'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ',
    'ㅎ',
];

// cspell:enable

#[cfg(test)]
mod tests {
    use super::{LEAD_COUNT, SYLLABLE_BASE, SYLLABLE_LAST, TRAIL_COUNT, VOWEL_COUNT};

    #[test]
    fn test_block_width_matches_jamo_dimensions() {
        let block_width = (SYLLABLE_LAST - SYLLABLE_BASE + 1) as usize;
        assert_eq!(block_width, LEAD_COUNT * VOWEL_COUNT * TRAIL_COUNT);
    }
}

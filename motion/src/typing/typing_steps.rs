// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallvec::smallvec;
use unicode_segmentation::UnicodeSegmentation;

use crate::{InlineString, InlineVec, compose, decompose};

/// Ordered, finite list of display snapshots at increasing granularity. The last
/// element equals the full target text (when the text is non-empty), and each step is
/// a superset extension of the previous one.
pub type StepSequence = InlineVec<InlineString>;

/// The reveal steps for a single character, mirroring how a user physically types it.
///
/// - Non-syllable characters (Latin, digits, punctuation, newline, isolated jamo)
///   come back as the single-element sequence `[ch]`.
/// - A decomposable syllable yields 2 or 3 steps: lead alone, lead+vowel, and - only
///   when a trail exists - the full syllable. Eg: `안` → `["ㅇ", "아", "안"]` and
///   `가` → `["ㄱ", "가"]`.
#[must_use]
pub fn steps_for_char(ch: char) -> StepSequence {
    let Some(syllable) = decompose(ch) else {
        return smallvec![single_char_step(ch)];
    };

    let mut acc: StepSequence = smallvec![single_char_step(syllable.initial)];
    if let Some(partial) = compose(syllable.initial, syllable.medial, None) {
        acc.push(single_char_step(partial));
    }
    if let Some(trail) = syllable.maybe_final {
        if let Some(full) = compose(syllable.initial, syllable.medial, Some(trail)) {
            acc.push(single_char_step(full));
        }
    }
    acc
}

/// The full reveal sequence for `text`.
///
/// With `show_composition` off this is just every prefix of the text, one step per
/// character. With it on, each character is expanded via [`steps_for_char`] and every
/// sub-step is emitted appended to the running completed prefix, so Hangul syllables
/// build up jamo by jamo while everything else still lands in one step.
///
/// "Character" here means extended grapheme cluster: a multi-scalar emoji or a
/// combining sequence reveals atomically as one step, and a cluster enters the jamo
/// path only when it is a single scalar. For Hangul and ASCII this is identical to
/// per-`char` iteration.
#[must_use]
pub fn steps_for_text(text: &str, show_composition: bool) -> StepSequence {
    let mut acc = StepSequence::new();
    let mut completed_prefix = InlineString::new();

    if !show_composition {
        for cluster in text.graphemes(true) {
            completed_prefix.push_str(cluster);
            acc.push(completed_prefix.clone());
        }
        return acc;
    }

    for cluster in text.graphemes(true) {
        for step in steps_for_cluster(cluster) {
            let mut snapshot = completed_prefix.clone();
            snapshot.push_str(&step);
            acc.push(snapshot);
        }
        completed_prefix.push_str(cluster);
    }
    acc
}

fn steps_for_cluster(cluster: &str) -> StepSequence {
    let mut chars = cluster.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => steps_for_char(ch),
        _ => smallvec![InlineString::from(cluster)],
    }
}

fn single_char_step(ch: char) -> InlineString {
    let mut acc = InlineString::new();
    acc.push(ch);
    acc
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::{StepSequence, steps_for_char, steps_for_text};

    fn as_strs(steps: &StepSequence) -> Vec<&str> {
        steps.iter().map(|it| it.as_str()).collect()
    }

    #[test_case('안', &["ㅇ", "아", "안"]; "syllable with trail has three steps")]
    #[test_case('가', &["ㄱ", "가"]; "syllable without trail has two steps")]
    #[test_case('한', &["ㅎ", "하", "한"]; "another trailed syllable")]
    fn test_steps_for_hangul_char(ch: char, expected: &[&str]) {
        assert_eq!(as_strs(&steps_for_char(ch)), expected);
    }

    #[test_case('a'; "ascii letter")]
    #[test_case('3'; "digit")]
    #[test_case('\n'; "newline")]
    #[test_case('ㅏ'; "isolated jamo")]
    fn test_steps_for_non_hangul_char_is_single_step(ch: char) {
        let steps = steps_for_char(ch);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].as_str(), ch.to_string());
    }

    #[test]
    fn test_steps_for_text_with_composition() {
        assert_eq!(
            as_strs(&steps_for_text("안녕", true)),
            &["ㅇ", "아", "안", "안ㄴ", "안녀", "안녕"]
        );
    }

    #[test]
    fn test_steps_for_text_without_composition() {
        assert_eq!(as_strs(&steps_for_text("안녕", false)), &["안", "안녕"]);
    }

    #[test]
    fn test_steps_for_mixed_text() {
        assert_eq!(
            as_strs(&steps_for_text("hi 가!", true)),
            &["h", "hi", "hi ", "hi ㄱ", "hi 가", "hi 가!"]
        );
    }

    #[test]
    fn test_newline_contributes_exactly_one_step() {
        assert_eq!(
            as_strs(&steps_for_text("가\n나", true)),
            &["ㄱ", "가", "가\n", "가\nㄴ", "가\n나"]
        );
    }

    #[test_case("안녕하세요"; "hangul")]
    #[test_case("hello\nworld"; "latin with newline")]
    #[test_case("가 a 1"; "mixed")]
    fn test_prefix_mode_length_equals_char_count(text: &str) {
        let steps = steps_for_text(text, false);
        assert_eq!(steps.len(), text.chars().count());
        assert_eq!(steps.last().map(|it| it.as_str()), Some(text));
    }

    #[test]
    fn test_multi_scalar_cluster_reveals_atomically() {
        // Woman-technologist is four scalars joined by ZWJ; it must be one step.
        let steps = steps_for_text("a👩‍💻b", true);
        assert_eq!(as_strs(&steps), &["a", "a👩‍💻", "a👩‍💻b"]);
    }

    #[test]
    fn test_empty_text_yields_no_steps() {
        assert!(steps_for_text("", true).is_empty());
        assert!(steps_for_text("", false).is_empty());
    }

    #[test]
    fn test_each_step_extends_the_previous() {
        let steps = steps_for_text("안녕, world\n가자", true);
        for pair in steps.windows(2) {
            // Jamo sub-steps replace the in-progress syllable, so compare on the
            // completed portion: the previous step minus its last char.
            let mut stem = pair[0].to_string();
            stem.pop();
            assert!(pair[1].starts_with(&stem));
        }
        assert_eq!(steps.last().unwrap().as_str(), "안녕, world\n가자");
    }
}

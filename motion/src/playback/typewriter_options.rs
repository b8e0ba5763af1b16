// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{sync::Arc, time::Duration};

use crate::{DEFAULT_CURSOR_GLYPH, DEFAULT_DELAY, DEFAULT_LOOP_DELAY, DEFAULT_SPEED,
            MIN_TIMER_RESOLUTION};

/// Invoked when playback enters Typing (and on every loop cycle re-entry).
pub type OnStartCallback = Arc<dyn Fn() + Send + Sync>;
/// Invoked when the step sequence is exhausted.
pub type OnCompleteCallback = Arc<dyn Fn() + Send + Sync>;
/// Invoked for every emitted step with `(step, index)`.
pub type OnTypeCallback = Arc<dyn Fn(&str, usize) + Send + Sync>;

/// What `start()` does when playback has already reached Complete for the current
/// text. Both behaviors exist in the wild, so this is policy rather than hardcoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum_macros::Display)]
pub enum ResumePolicy {
    /// `start()` from Complete begins a fresh pass.
    #[default]
    RestartFromComplete,
    /// `start()` from Complete is a no-op until `reset()` or `restart()` is called.
    HoldUntilReset,
}

/// Configuration for a [`crate::Typewriter`]. Construct with [`Default`] and
/// override the fields you care about; the defaults come from the named constants in
/// [`crate::playback_constants`].
///
/// At `start()` the machine captures an immutable [`Self::clamped`] snapshot for the
/// run, so mutating options afterwards can never corrupt an in-flight sequence.
#[derive(Clone)]
#[allow(missing_debug_implementations)]
pub struct TypewriterOptions {
    /// Time between steps.
    pub speed: Duration,
    /// Time before the first step fires after `start()`.
    pub delay: Duration,
    /// When true, Complete is transient: playback re-enters Typing after
    /// [`Self::loop_delay`].
    pub loop_enabled: bool,
    pub loop_delay: Duration,
    /// When true, Hangul syllables build up jamo by jamo. When false, every
    /// character appears atomically, one step per character.
    pub show_composition: bool,
    /// When true, `start()` bypasses scheduling entirely and lands directly on
    /// Complete with the full text on display.
    pub skip_animation: bool,
    pub resume: ResumePolicy,
    /// Owned by the rendering layer; carried here untouched.
    pub cursor: bool,
    /// Owned by the rendering layer; carried here untouched.
    pub cursor_blink: bool,
    /// Owned by the rendering layer; carried here untouched.
    pub cursor_glyph: char,
    pub maybe_on_start: Option<OnStartCallback>,
    pub maybe_on_complete: Option<OnCompleteCallback>,
    pub maybe_on_type: Option<OnTypeCallback>,
}

impl Default for TypewriterOptions {
    fn default() -> Self {
        TypewriterOptions {
            speed: DEFAULT_SPEED,
            delay: DEFAULT_DELAY,
            loop_enabled: false,
            loop_delay: DEFAULT_LOOP_DELAY,
            show_composition: true,
            skip_animation: false,
            resume: ResumePolicy::default(),
            cursor: true,
            cursor_blink: true,
            cursor_glyph: DEFAULT_CURSOR_GLYPH,
            maybe_on_start: None,
            maybe_on_complete: None,
            maybe_on_type: None,
        }
    }
}

impl TypewriterOptions {
    /// A copy with the timer periods raised to [`MIN_TIMER_RESOLUTION`]. `delay` may
    /// legitimately be zero, so it is left alone.
    #[must_use]
    pub fn clamped(&self) -> Self {
        let mut it = self.clone();
        it.speed = it.speed.max(MIN_TIMER_RESOLUTION);
        it.loop_delay = it.loop_delay.max(MIN_TIMER_RESOLUTION);
        it
    }
}

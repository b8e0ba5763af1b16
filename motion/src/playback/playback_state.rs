// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use crate::{InlineString, StdMutex};

/// The observable state of a [`crate::Typewriter`], consumed by the rendering layer.
///
/// Invariants:
/// - `is_typing` and `is_complete` are never simultaneously true.
/// - `current_index` is a valid index into the active step sequence only while
///   `is_typing` is true.
/// - In the idle/initial state `display_text` is empty and `current_index` is 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlaybackState {
    /// The step snapshot currently on display. The rendering layer splits this on
    /// `\n` and overlays the cursor glyph; neither concern lives here.
    pub display_text: InlineString,
    pub is_typing: bool,
    pub is_complete: bool,
    pub current_index: usize,
}

pub type SafePlaybackState = Arc<StdMutex<PlaybackState>>;

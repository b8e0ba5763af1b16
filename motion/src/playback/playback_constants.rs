// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

/// Default time between steps.
pub const DEFAULT_SPEED: Duration = Duration::from_millis(100);

/// Default time before the first step fires after `start()`.
pub const DEFAULT_DELAY: Duration = Duration::ZERO;

/// Default time between loop cycles (from Complete back into Typing).
pub const DEFAULT_LOOP_DELAY: Duration = Duration::from_millis(1_000);

/// Floor for `speed` and `loop_delay`. A zero period would make the playback task
/// busy-spin its interval, so out-of-range values are clamped here instead of
/// rejected.
pub const MIN_TIMER_RESOLUTION: Duration = Duration::from_millis(1);

/// Settle time between `reset()` and the re-entry into Typing during `restart()`, so
/// the fresh run never races a timer that was just cancelled.
pub const RESTART_SETTLE_DELAY: Duration = Duration::from_millis(50);

/// Cursor glyph handed through to the rendering layer.
pub const DEFAULT_CURSOR_GLYPH: char = '|';

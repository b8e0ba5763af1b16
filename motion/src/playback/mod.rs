// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The playback state machine: a timer-driven traversal of a step sequence, with
//! configurable speed, start delay, looping, skip, and cooperative cancellation. At
//! most one playback task exists at any time; see [`Typewriter`].

// Attach sources.
pub mod playback_constants;
pub mod playback_state;
pub mod typewriter;
pub mod typewriter_options;

// Re-export.
pub use playback_constants::*;
pub use playback_state::*;
pub use typewriter::*;
pub use typewriter_options::*;

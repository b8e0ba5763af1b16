// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words jamo hangul typewriter

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

//! # hangul_motion
//!
//! A typing-reveal animation engine with jamo-by-jamo Hangul composition. Korean
//! syllables are revealed the way a user physically types them on a keyboard:
//! consonant, then consonant+vowel, then the final consonant, eg: `ㅇ` → `아` → `안`.
//! Everything else (Latin text, digits, punctuation, newlines, emoji) is revealed one
//! character at a time.
//!
//! The crate is made of three layers:
//!
//! 1. [`hangul`] - the pure syllable codec. [`decompose`] splits a precomposed
//!    syllable (Unicode block `U+AC00..=U+D7A3`) into its lead/vowel/trail jamo, and
//!    [`compose`] puts them back together. Both are infallible in the panic sense;
//!    "not a syllable" and "not a jamo" are [`None`].
//! 2. [`typing`] - the step sequence generator. [`steps_for_text`] turns a string
//!    into the ordered list of progressively complete snapshots that drive the
//!    animation.
//! 3. [`playback`] - the [`Typewriter`] state machine. It owns a single Tokio task
//!    at a time that walks the step sequence on a schedule, with configurable speed,
//!    start delay, looping, skip, and cooperative cancellation. The rendering layer
//!    polls [`Typewriter::state`] (or hooks the callbacks) and draws the text however
//!    it likes; see `examples/typewriter.rs` for a terminal rendering of it.

// Attach modules (re-exported below to provide clean public API).
pub mod common;
pub mod hangul;
pub mod log_support;
pub mod playback;
pub mod typing;

// Re-export.
pub use common::*;
pub use hangul::*;
pub use log_support::*;
pub use playback::*;
pub use typing::*;

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The Hangul syllable codec: pure, stateless decomposition and recomposition of
//! precomposed syllables (Unicode block `U+AC00..=U+D7A3`) into the compatibility
//! jamo a Korean keyboard produces for isolated keys.

// Attach sources.
pub mod hangul_constants;
pub mod syllable_codec;

// Re-export.
pub use hangul_constants::*;
pub use syllable_codec::*;

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The step sequence generator: turns text into the ordered list of progressively
//! complete snapshots that drive the typing animation, plus the boundary text
//! normalization applied before any steps are generated.

// Attach sources.
pub mod normalize;
pub mod typing_steps;

// Re-export.
pub use normalize::*;
pub use typing_steps::*;

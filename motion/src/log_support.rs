// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a global `tracing` subscriber that writes formatted events to stderr.
///
/// Logging is **DISABLED** by **default**: passing [`LevelFilter::OFF`] is a no-op,
/// and without this call the `tracing::debug!` events emitted by the playback
/// machine go nowhere.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
pub fn try_initialize_logging(level_filter: LevelFilter) -> miette::Result<()> {
    // Early return if the level filter is off.
    if matches!(level_filter, LevelFilter::OFF) {
        return Ok(());
    }

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(level_filter);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .into_diagnostic()
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The rendering layer for the [`Typewriter`] playback machine, done in a terminal.
//!
//! The machine itself knows nothing about presentation. This example polls
//! [`Typewriter::state`] on its own cadence and owns the display concerns: splitting
//! `display_text` on newlines, redrawing the lines in place, and overlaying a
//! blinking cursor glyph while typing is in progress.
//!
//! Run it with: `cargo run --example typewriter`

use std::{io::{Stdout, Write, stdout},
          time::Duration};

use crossterm::{cursor::{MoveToColumn, MoveUp},
                execute,
                terminal::{Clear, ClearType}};
use hangul_motion::{PlaybackState, Typewriter, TypewriterOptions,
                    try_initialize_logging};
use miette::IntoDiagnostic;
use tokio::time::{Instant, sleep};

const FRAME_INTERVAL: Duration = Duration::from_millis(33);
const CURSOR_BLINK_PERIOD: Duration = Duration::from_millis(500);
/// Escaped newline on purpose: the engine normalizes it at the boundary.
const TEXT: &str = "안녕하세요! Hangul typing, jamo by jamo.\\n가나다라 + hello world";

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Set to DEBUG to watch the state transitions on stderr.
    try_initialize_logging(tracing_core::LevelFilter::OFF)?;

    let mut typewriter = Typewriter::new(TEXT, TypewriterOptions {
        speed: Duration::from_millis(80),
        ..Default::default()
    });
    let options = typewriter.options().clone();
    typewriter.start();

    let started_at = Instant::now();
    let mut out = stdout();
    let mut previous_line_count = 0_u16;

    loop {
        let state = typewriter.state();
        previous_line_count =
            render_frame(&mut out, &state, &options, started_at, previous_line_count)?;
        if state.is_complete {
            break;
        }
        sleep(FRAME_INTERVAL).await;
    }

    Ok(())
}

/// Redraw the display text in place and return the number of lines drawn, so the
/// next frame knows how far to move back up.
fn render_frame(
    out: &mut Stdout,
    state: &PlaybackState,
    options: &TypewriterOptions,
    started_at: Instant,
    previous_line_count: u16,
) -> miette::Result<u16> {
    if previous_line_count > 0 {
        execute!(out, MoveUp(previous_line_count)).into_diagnostic()?;
    }
    execute!(out, MoveToColumn(0), Clear(ClearType::FromCursorDown))
        .into_diagnostic()?;

    let cursor_visible = state.is_typing
        && options.cursor
        && (!options.cursor_blink || blink_phase_on(started_at));

    // `split` always yields at least one element, even for empty text.
    let lines: Vec<&str> = state.display_text.split('\n').collect();
    let last_row = lines.len() - 1;
    for (row, line) in lines.iter().enumerate() {
        if row == last_row && cursor_visible {
            writeln!(out, "{line}{}", options.cursor_glyph).into_diagnostic()?;
        } else {
            writeln!(out, "{line}").into_diagnostic()?;
        }
    }
    out.flush().into_diagnostic()?;

    #[allow(clippy::cast_possible_truncation)]
    let line_count = lines.len() as u16;
    Ok(line_count)
}

fn blink_phase_on(started_at: Instant) -> bool {
    let phase =
        started_at.elapsed().as_millis() / CURSOR_BLINK_PERIOD.as_millis().max(1);
    phase % 2 == 0
}

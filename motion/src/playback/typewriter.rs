// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use tokio::{sync::mpsc::Sender, time::sleep};

use crate::{InlineString, PlaybackState, RESTART_SETTLE_DELAY, ResumePolicy,
            SafeBool, SafePlaybackState, StdMutex, StepSequence, TypewriterOptions,
            normalize_text, steps_for_text};

/// The playback state machine. It walks the step sequence for its text on a
/// schedule, one Tokio task at a time, and exposes `start` / `stop` / `reset` /
/// `restart` plus an observable [`PlaybackState`] snapshot.
///
/// States: **Idle** (initial, or after [`Self::reset`]), **Typing** (stepping), and
/// **Complete** (sequence exhausted). Complete is terminal unless
/// [`TypewriterOptions::loop_enabled`] is set, in which case it is transient and
/// playback re-enters Typing after the loop delay.
///
/// Cancellation is cooperative and two-fold, so [`Self::stop`] is effective even
/// when it races a tick that already fired:
/// - [`Self::maybe_kill_channel`] is the exclusively-owned handle to the scheduled
///   task. Every transition cancels the existing handle before creating a new one.
/// - Each run carries its own manual-stop flag, checked by every tick before it does
///   any work. A task that lost the cancellation race can never mutate state
///   belonging to a newer run, because it only ever sees its own run's flag.
///
/// None of the control operations return errors or panic on bad input; out-of-range
/// numeric options are clamped at `start()` (see [`TypewriterOptions::clamped`]).
///
/// # Usage Example
///
/// ```
/// use hangul_motion::{Typewriter, TypewriterOptions};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut typewriter = Typewriter::new("안녕", TypewriterOptions::default());
/// typewriter.start();
/// // ... the rendering layer polls `typewriter.state()` on its own cadence ...
/// typewriter.stop();
/// # }
/// ```
#[allow(missing_debug_implementations)]
pub struct Typewriter {
    /// Already-normalized target text (escaped newlines converted at the boundary).
    text: InlineString,
    options: TypewriterOptions,
    safe_state: SafePlaybackState,
    /// The manual-stop flag of the current run. Replaced with a fresh flag on every
    /// `start()`, so stale tasks keep observing the flag of the run they belong to.
    safe_manual_stop: SafeBool,
    /// This is the channel that will be used to kill the playback task.
    /// - [None] means that no playback task is running.
    /// - When a playback task is started, this will have a [Some] value in it.
    maybe_kill_channel: Option<Sender<()>>,
}

impl Typewriter {
    /// Create a machine in the Idle state. `text` may contain the two-character
    /// escape sequence `\` + `n`; it is normalized to a literal newline here, before
    /// any step generation.
    #[must_use]
    pub fn new(text: impl AsRef<str>, options: TypewriterOptions) -> Typewriter {
        Typewriter {
            text: normalize_text(text.as_ref()),
            options,
            safe_state: Arc::new(StdMutex::new(PlaybackState::default())),
            safe_manual_stop: Arc::new(StdMutex::new(false)),
            maybe_kill_channel: None,
        }
    }

    /// Cloned snapshot of the observable state.
    ///
    /// # Panics
    ///
    /// This will panic if the state lock is poisoned, which can happen if a thread
    /// panics while holding the lock.
    #[must_use]
    pub fn state(&self) -> PlaybackState { self.safe_state.lock().unwrap().clone() }

    /// The normalized target text.
    #[must_use]
    pub fn text(&self) -> &str { &self.text }

    #[must_use]
    pub fn options(&self) -> &TypewriterOptions { &self.options }

    /// Begin playback. No-op while already Typing; when already Complete the
    /// behavior follows [`TypewriterOptions::resume`]. With
    /// [`TypewriterOptions::skip_animation`] set, no task is scheduled at all: the
    /// machine lands on Complete synchronously with the full text on display, and
    /// the start- and completion-callbacks fire in that order.
    ///
    /// # Panics
    ///
    /// This will panic if the state lock is poisoned, which can happen if a thread
    /// panics while holding the lock.
    pub fn start(&mut self) {
        let (is_typing, is_complete) = {
            let state = self.safe_state.lock().unwrap();
            (state.is_typing, state.is_complete)
        };
        if is_typing {
            return;
        }
        if is_complete && self.options.resume == ResumePolicy::HoldUntilReset {
            return;
        }

        // A loop restart may still be pending from a previous Complete.
        self.cancel_playback_task();

        // Immutable snapshot for this run; later option mutation can't touch it.
        let options = self.options.clamped();
        let steps = steps_for_text(&self.text, options.show_composition);

        let safe_manual_stop: SafeBool = Arc::new(StdMutex::new(false));
        self.safe_manual_stop = safe_manual_stop.clone();

        if options.skip_animation {
            {
                let mut state = self.safe_state.lock().unwrap();
                state.display_text = self.text.clone();
                state.current_index = steps.len().saturating_sub(1);
                state.is_typing = false;
                state.is_complete = true;
            }
            tracing::debug!(
                message = "⏩ Typewriter skipped animation",
                step_count = %steps.len(),
            );
            if let Some(on_start) = &options.maybe_on_start {
                on_start();
            }
            if let Some(on_complete) = &options.maybe_on_complete {
                on_complete();
            }
            return;
        }

        {
            let mut state = self.safe_state.lock().unwrap();
            state.is_typing = true;
            state.is_complete = false;
        }
        tracing::debug!(
            message = "▶ Typewriter started",
            step_count = %steps.len(),
            speed = ?options.speed,
            delay = ?options.delay,
            loop_enabled = %options.loop_enabled,
        );
        if let Some(on_start) = &options.maybe_on_start {
            on_start();
        }

        self.maybe_kill_channel = Some(playback_task::start_playback_task(
            steps,
            options,
            self.safe_state.clone(),
            safe_manual_stop,
        ));
    }

    /// Halt playback where it stands: cancel the pending scheduled tick and leave
    /// Typing. The manual stop is recorded so a pending loop-driven restart is
    /// suppressed even if its timer already fired concurrently with this call.
    ///
    /// # Panics
    ///
    /// This will panic if a lock is poisoned, which can happen if a thread panics
    /// while holding the lock.
    pub fn stop(&mut self) {
        *self.safe_manual_stop.lock().unwrap() = true;
        self.cancel_playback_task();
        self.safe_state.lock().unwrap().is_typing = false;
        tracing::debug!(message = "⏹ Typewriter stopped");
    }

    /// [`Self::stop`] plus a return to the Idle defaults (empty display, index 0,
    /// not complete). A subsequent [`Self::start`] behaves as if fresh.
    ///
    /// # Panics
    ///
    /// This will panic if a lock is poisoned, which can happen if a thread panics
    /// while holding the lock.
    pub fn reset(&mut self) {
        self.stop();
        *self.safe_state.lock().unwrap() = PlaybackState::default();
        // A fresh flag is how the manual stop gets "cleared": the old one stays set
        // so any straggler task from the previous run stands down.
        self.safe_manual_stop = Arc::new(StdMutex::new(false));
        tracing::debug!(message = "⏮ Typewriter reset");
    }

    /// Unconditionally re-enter Typing from any state, including Complete - the
    /// [`Self::start`] no-op guard does not apply. The settle delay between the
    /// reset and the fresh start keeps the new run clear of a timer that was just
    /// cancelled.
    pub async fn restart(&mut self) {
        self.reset();
        sleep(RESTART_SETTLE_DELAY).await;
        self.start();
    }

    /// Replace the target text (normalizing it). Forces a reset first: a stale
    /// scheduled tick must never reference a sequence generated for old input.
    pub fn set_text(&mut self, text: impl AsRef<str>) {
        self.reset();
        self.text = normalize_text(text.as_ref());
    }

    /// Replace the options. Forces a reset first, same as [`Self::set_text`].
    pub fn set_options(&mut self, options: TypewriterOptions) {
        self.reset();
        self.options = options;
    }

    fn cancel_playback_task(&mut self) {
        if let Some(kill_channel) = self.maybe_kill_channel.take() {
            // We don't care about the result of this operation. Dropping the sender
            // afterwards closes the channel, which also ends the task.
            kill_channel.try_send(()).ok();
        }
    }
}

impl Drop for Typewriter {
    /// Dropping the machine drops the kill channel sender, which closes the channel
    /// and ends the playback task.
    fn drop(&mut self) { self.cancel_playback_task(); }
}

mod playback_task {
    use tokio::{sync::mpsc::{Receiver, Sender, channel},
                time::{interval, sleep}};

    use super::{PlaybackState, SafeBool, SafePlaybackState, StepSequence,
                TypewriterOptions};

    /// Spawn the task that owns the schedule for one `start()` call (and, with
    /// looping on, all its subsequent cycles). Returns the kill channel sender - the
    /// exclusively-owned handle used to cancel the task.
    pub fn start_playback_task(
        steps: StepSequence,
        options: TypewriterOptions,
        safe_state: SafePlaybackState,
        safe_manual_stop: SafeBool,
    ) -> Sender<()> {
        let (kill_channel_sender, mut kill_channel_receiver) = channel::<()>(1);
        let kill_channel_sender_clone = kill_channel_sender.clone();

        tokio::spawn(async move {
            loop {
                let completed = run_one_cycle(
                    &steps,
                    &options,
                    &safe_state,
                    &safe_manual_stop,
                    &mut kill_channel_receiver,
                )
                .await;

                if !completed
                    || !options.loop_enabled
                    || *safe_manual_stop.lock().unwrap()
                {
                    break;
                }

                // Wait out the loop delay, still killable.
                tokio::select! {
                    _ = kill_channel_receiver.recv() => break,
                    _ = sleep(options.loop_delay) => {}
                }
                // A manual stop may have landed while the loop delay was pending.
                if *safe_manual_stop.lock().unwrap() {
                    break;
                }

                // Full reset + restart for the next cycle.
                {
                    let mut state = safe_state.lock().unwrap();
                    *state = PlaybackState {
                        is_typing: true,
                        ..PlaybackState::default()
                    };
                }
                tracing::debug!(message = "🔁 Typewriter loop cycle restarted");
                if let Some(on_start) = &options.maybe_on_start {
                    on_start();
                }
            }
        });

        kill_channel_sender_clone
    }

    /// Emit every step of one pass, then transition to Complete. Returns false when
    /// the pass was killed or manually stopped before completing.
    async fn run_one_cycle(
        steps: &StepSequence,
        options: &TypewriterOptions,
        safe_state: &SafePlaybackState,
        safe_manual_stop: &SafeBool,
        kill_channel_receiver: &mut Receiver<()>,
    ) -> bool {
        // The first step fires `delay` after entry; every subsequent step fires
        // `speed` after the previous one.
        tokio::select! {
            _ = kill_channel_receiver.recv() => return false,
            _ = sleep(options.delay) => {}
        }

        // The interval's first tick completes immediately, ie: right after `delay`.
        let mut interval = interval(options.speed);
        let mut index = 0;

        loop {
            tokio::select! {
                // Poll kill channel.
                // This branch is cancel safe because recv is cancel safe.
                _ = kill_channel_receiver.recv() => return false,

                // Poll interval.
                // This branch is cancel safe because tick is cancel safe.
                _ = interval.tick() => {
                    // A tick checks the manual-stop flag before doing any work, so
                    // stop() wins even against a tick that already fired.
                    if *safe_manual_stop.lock().unwrap() {
                        return false;
                    }

                    if index >= steps.len() {
                        {
                            let mut state = safe_state.lock().unwrap();
                            state.is_typing = false;
                            state.is_complete = true;
                        }
                        tracing::debug!(
                            message = "✔ Typewriter sequence complete",
                            step_count = %steps.len(),
                        );
                        if let Some(on_complete) = &options.maybe_on_complete {
                            on_complete();
                        }
                        return true;
                    }

                    let step = &steps[index];
                    {
                        let mut state = safe_state.lock().unwrap();
                        state.display_text = step.clone();
                        state.current_index = index;
                    }
                    if let Some(on_type) = &options.maybe_on_type {
                        on_type(step, index);
                    }
                    index += 1;
                }
            }
        }
    }
}

//! Playback state machine for stepping through a trace.
//!
//! A [`Sequencer`] is the timer-free core of playback: a step cursor in
//! `[0, total_steps - 1]` plus a playing flag, with every operation total
//! (out-of-range targets clamp, redundant operations are no-ops). The clock
//! lives elsewhere — [`TracePlayer`](crate::TracePlayer) calls [`tick()`]
//! from its ticker thread, and tests call it directly.
//!
//! [`tick()`]: Sequencer::tick

/// Playback state over `total_steps` ordered steps.
///
/// Construction is the only way the bound changes: re-applying trace
/// parameters builds a new `Sequencer` (and player) rather than mutating the
/// old one, so a cursor can never outlive the trace length it was clamped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sequencer {
    current_step: usize,
    is_playing: bool,
    total_steps: usize,
}

impl Sequencer {
    /// New sequencer at step 0, not playing. `total_steps` is raised to 1 if
    /// 0 is passed so the cursor range stays well-formed.
    pub fn new(total_steps: usize) -> Self {
        Sequencer {
            current_step: 0,
            is_playing: false,
            total_steps: total_steps.max(1),
        }
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    /// Start auto-advance. Unconditional: playing at the last step is allowed
    /// and simply stops again on the next tick.
    pub fn play(&mut self) {
        self.is_playing = true;
    }

    /// Stop auto-advance, keeping the cursor. No-op when already idle.
    pub fn pause(&mut self) {
        self.is_playing = false;
    }

    /// Back to step 0, idle, regardless of prior state.
    pub fn reset(&mut self) {
        self.current_step = 0;
        self.is_playing = false;
    }

    /// Advance one step, clamped to the last index. Does not touch the
    /// playing flag; used for manual stepping even while paused.
    pub fn next_step(&mut self) {
        self.current_step = (self.current_step + 1).min(self.total_steps - 1);
    }

    /// Jump straight to `step`, clamped to the last index.
    pub fn set_step(&mut self, step: usize) {
        self.current_step = step.min(self.total_steps - 1);
    }

    /// One auto-advance transition: advance while playing, or transition to
    /// idle (holding the last index) when the advance would run past the end.
    /// Does nothing while idle, so a pause between ticks wins.
    pub fn tick(&mut self) {
        if !self.is_playing {
            return;
        }
        if self.current_step >= self.total_steps - 1 {
            self.is_playing = false;
        } else {
            self.current_step += 1;
        }
    }
}

//! Timer-driven playback over a trace.
//!
//! [`TracePlayer`] wraps a [`Sequencer`] in the one place of the crate where
//! a real clock exists: a ticker thread that applies
//! [`Sequencer::tick()`] at a fixed interval while playback is active. The
//! thread parks on a condvar so `pause()`, `reset()` and drop can cancel the
//! pending tick instead of letting it land; a tick scheduled before a pause
//! never mutates the state afterwards.
//!
//! Each player owns its state exclusively. Re-applying trace parameters means
//! building a new player; dropping the old one joins its ticker, so a stale
//! timer cannot advance a sequencer bound to a different trace length.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::trace;

use crate::sequencer::Sequencer;

/// Auto-advance interval for the bracketing and Newton demos.
pub const BRACKET_TICK_INTERVAL: Duration = Duration::from_millis(1500);

/// Auto-advance interval for the fixed-point iteration demo.
pub const FIXED_POINT_TICK_INTERVAL: Duration = Duration::from_millis(1200);

struct PlayerShared {
    seq: Mutex<Sequencer>,
    wakeup: Condvar,
    alive: AtomicBool,
}

/// A [`Sequencer`] plus the recurring timer that drives it.
pub struct TracePlayer {
    shared: Arc<PlayerShared>,
    interval: Duration,
    ticker: Option<JoinHandle<()>>,
}

impl TracePlayer {
    /// New idle player over `total_steps` steps, ticking every `interval`
    /// once playing. No thread is spawned until [`play()`](Self::play).
    pub fn new(total_steps: usize, interval: Duration) -> Self {
        TracePlayer {
            shared: Arc::new(PlayerShared {
                seq: Mutex::new(Sequencer::new(total_steps)),
                wakeup: Condvar::new(),
                alive: AtomicBool::new(true),
            }),
            interval,
            ticker: None,
        }
    }

    /// Copy of the current playback state.
    pub fn snapshot(&self) -> Sequencer {
        *self.shared.seq.lock().unwrap()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start auto-advance. No-op if already playing; otherwise a fresh ticker
    /// thread is spawned (at most one is ever live per player).
    pub fn play(&mut self) {
        if self.shared.seq.lock().unwrap().is_playing() {
            return;
        }
        // reap a ticker left over from a run that self-stopped at the end
        self.reap_ticker();
        self.shared.seq.lock().unwrap().play();

        let shared = Arc::clone(&self.shared);
        let interval = self.interval;
        self.ticker = Some(thread::spawn(move || run_ticker(&shared, interval)));
    }

    /// Stop auto-advance, keeping the cursor. Cancels the pending tick.
    pub fn pause(&mut self) {
        self.shared.seq.lock().unwrap().pause();
        self.reap_ticker();
    }

    /// Back to step 0, idle. Cancels the pending tick.
    pub fn reset(&mut self) {
        self.shared.seq.lock().unwrap().reset();
        self.reap_ticker();
    }

    /// Manual single step, clamped; independent of the playing flag.
    pub fn next_step(&mut self) {
        self.shared.seq.lock().unwrap().next_step();
    }

    /// Jump to `step`, clamped.
    pub fn set_step(&mut self, step: usize) {
        self.shared.seq.lock().unwrap().set_step(step);
    }

    // Wake the ticker (it exits as soon as it observes a non-playing state)
    // and join it. Callers must have cleared the playing flag first, or never
    // have spawned a ticker.
    fn reap_ticker(&mut self) {
        if let Some(handle) = self.ticker.take() {
            self.shared.wakeup.notify_all();
            let _ = handle.join();
        }
    }
}

impl Drop for TracePlayer {
    fn drop(&mut self) {
        self.shared.alive.store(false, Ordering::Release);
        self.reap_ticker();
    }
}

fn run_ticker(shared: &PlayerShared, interval: Duration) {
    let mut seq = shared.seq.lock().unwrap();
    loop {
        let (guard, timeout) = shared.wakeup.wait_timeout(seq, interval).unwrap();
        seq = guard;
        if !shared.alive.load(Ordering::Acquire) || !seq.is_playing() {
            // cancelled between ticks; the scheduled advance must not land
            return;
        }
        if timeout.timed_out() {
            seq.tick();
            trace!(
                "tick: step {}/{}",
                seq.current_step() + 1,
                seq.total_steps()
            );
            if !seq.is_playing() {
                // reached the last step and self-stopped
                return;
            }
        }
    }
}

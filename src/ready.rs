//! One-shot readiness signal for the external math-markup renderer.
//!
//! The deck only carries TeX source strings; turning them into typeset markup
//! is the host's job, and the host's renderer may come up asynchronously.
//! Instead of polling a global for it, the host hands the rendering side a
//! [`ReadySignal`] and calls [`notify()`](ReadySignal::notify) once the
//! renderer is available. Until then the slides' raw TeX is shown verbatim.
//! The numerical core has no dependency on this type.

use std::sync::{Arc, Condvar, Mutex};

/// Cloneable one-shot flag: notified once, observable from any clone.
#[derive(Clone, Default)]
pub struct ReadySignal {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl ReadySignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the renderer as available. Idempotent.
    pub fn notify(&self) {
        let (flag, condvar) = &*self.inner;
        *flag.lock().unwrap() = true;
        condvar.notify_all();
    }

    /// Non-blocking check.
    pub fn is_ready(&self) -> bool {
        *self.inner.0.lock().unwrap()
    }

    /// Block until notified.
    pub fn wait(&self) {
        let (flag, condvar) = &*self.inner;
        let mut ready = flag.lock().unwrap();
        while !*ready {
            ready = condvar.wait(ready).unwrap();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn starts_not_ready_and_latches_on_notify() {
        let signal = ReadySignal::new();
        assert!(!signal.is_ready());
        signal.notify();
        assert!(signal.is_ready());
        // notifying again changes nothing
        signal.notify();
        assert!(signal.is_ready());
    }

    #[test]
    fn clones_observe_the_same_notification() {
        let signal = ReadySignal::new();
        let observer = signal.clone();
        let waiter = thread::spawn(move || {
            observer.wait();
            true
        });
        thread::sleep(Duration::from_millis(10));
        signal.notify();
        assert!(waiter.join().unwrap());
    }
}

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Fixed-interval tick source backed by a background thread.
///
/// The thread only sends unit ticks over a channel; all game-state
/// mutation happens on the thread that drains the receiver, so the
/// simulation stays on one logical timeline. Stopping is synchronous:
/// after `stop()` returns no further tick can be observed. The clock
/// also stops on Drop, so a torn-down session can never be advanced by
/// a stale timer.
#[derive(Debug)]
pub struct SimulationClock {
    ticks: Receiver<()>,
    cancelled: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl SimulationClock {
    /// Starts a clock firing every `interval`.
    #[must_use]
    pub fn start(interval: Duration) -> Self {
        let (sender, ticks) = mpsc::channel();
        let cancelled = Arc::new(AtomicBool::new(false));
        let cancel_flag = Arc::clone(&cancelled);

        let worker = thread::spawn(move || loop {
            thread::sleep(interval);
            if cancel_flag.load(Ordering::Acquire) {
                break;
            }
            if sender.send(()).is_err() {
                break;
            }
        });

        Self {
            ticks,
            cancelled,
            worker: Some(worker),
        }
    }

    /// Returns true when a tick is due, without blocking.
    ///
    /// Ticks that queued up while the consumer was busy are delivered
    /// one call at a time, keeping the one-tick-per-invocation contract.
    #[must_use]
    pub fn try_tick(&self) -> bool {
        match self.ticks.try_recv() {
            Ok(()) => true,
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => false,
        }
    }

    /// Cancels the clock. After this returns no tick can be observed.
    ///
    /// Joins the worker (it wakes at most one interval later and exits
    /// on the flag), then drains anything it sent before cancellation.
    pub fn stop(&mut self) {
        self.cancelled.store(true, Ordering::Release);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
        while self.ticks.try_recv().is_ok() {}
    }
}

impl Drop for SimulationClock {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use std::thread;
    use std::time::{Duration, Instant};

    use super::SimulationClock;

    #[test]
    fn clock_delivers_ticks() {
        let clock = SimulationClock::start(Duration::from_millis(5));
        let deadline = Instant::now() + Duration::from_secs(2);

        let mut seen = 0;
        while seen < 3 && Instant::now() < deadline {
            if clock.try_tick() {
                seen += 1;
            } else {
                thread::sleep(Duration::from_millis(1));
            }
        }

        assert_eq!(seen, 3, "expected three ticks within the deadline");
    }

    #[test]
    fn stopped_clock_never_ticks_again() {
        let mut clock = SimulationClock::start(Duration::from_millis(5));
        thread::sleep(Duration::from_millis(20));
        clock.stop();

        // Anything sent before the flag flipped was drained by stop();
        // the worker observes the flag before sending again.
        thread::sleep(Duration::from_millis(20));
        assert!(!clock.try_tick());
    }
}

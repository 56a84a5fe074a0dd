//! Pause between descent steps.
//!
//! The pause only makes the trajectory perceptible to a human watching it;
//! it never changes the values computed.

use std::{thread, time::Duration};

/// Side effect run between two descent steps.
pub trait Pacer {
    fn pause(&mut self, interval: Duration);
}

/// Blocks the calling thread for the requested interval.
#[derive(Clone, Copy, Debug, Default)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn pause(&mut self, interval: Duration) {
        thread::sleep(interval);
    }
}

/// Returns immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPacing;

impl Pacer for NoPacing {
    fn pause(&mut self, _interval: Duration) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn sleep_pacer_waits_at_least_the_interval() {
        let start = Instant::now();
        SleepPacer.pause(Duration::from_millis(20));
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn no_pacing_does_not_wait() {
        let start = Instant::now();
        for _ in 0..1000 {
            NoPacing.pause(Duration::from_secs(1));
        }
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}

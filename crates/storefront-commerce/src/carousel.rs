//! Hero carousel rotation.

use serde::Serialize;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Shortest period a timer will tick at; zero is clamped up to this.
pub const MIN_ROTATION_PERIOD: Duration = Duration::from_millis(1);

/// Index into a fixed number of slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rotation {
    index: usize,
    len: usize,
}

impl Rotation {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move to the next slide, wrapping at the end. An empty rotation stays at 0.
    pub fn advance(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    /// Jump to a slide. Out-of-range indexes are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }
}

/// Background task advancing a [`Rotation`] on a fixed period.
///
/// The current index is published through a watch channel. Dropping the
/// timer stops the task.
#[derive(Debug)]
pub struct RotationTimer {
    index: watch::Receiver<usize>,
    task: JoinHandle<()>,
}

impl RotationTimer {
    /// Start rotating. Must be called from within a tokio runtime.
    pub fn spawn(len: usize, period: Duration) -> Self {
        let period = period.max(MIN_ROTATION_PERIOD);
        let (tx, rx) = watch::channel(0);
        let task = tokio::spawn(async move {
            let mut rotation = Rotation::new(len);
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tx.is_closed() {
                    break;
                }
                let next = rotation.advance();
                tx.send_if_modified(|current| {
                    if *current == next {
                        false
                    } else {
                        *current = next;
                        true
                    }
                });
            }
            tracing::debug!("carousel rotation finished");
        });
        tracing::debug!(len, period_ms = period.as_millis() as u64, "carousel rotation started");
        Self { index: rx, task }
    }

    /// The slide currently shown.
    pub fn current(&self) -> usize {
        *self.index.borrow()
    }

    /// A receiver that is notified on every slide change.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.index.clone()
    }

    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for RotationTimer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_wraps() {
        let mut rotation = Rotation::new(3);
        assert_eq!(rotation.advance(), 1);
        assert_eq!(rotation.advance(), 2);
        assert_eq!(rotation.advance(), 0);
    }

    #[test]
    fn test_empty_rotation_never_advances() {
        let mut rotation = Rotation::new(0);
        assert!(rotation.is_empty());
        assert_eq!(rotation.advance(), 0);
        assert!(!rotation.select(0));
    }

    #[test]
    fn test_select() {
        let mut rotation = Rotation::new(4);
        assert!(rotation.select(3));
        assert_eq!(rotation.index(), 3);
        assert!(!rotation.select(4));
        assert_eq!(rotation.index(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_advances_each_period() {
        let timer = RotationTimer::spawn(3, Duration::from_secs(5));
        let mut rx = timer.subscribe();
        assert_eq!(timer.current(), 0);

        let start = Instant::now();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), 1);
        assert!(start.elapsed() >= Duration::from_secs(5));

        rx.changed().await.unwrap();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_period_is_clamped() {
        let timer = RotationTimer::spawn(4, Duration::ZERO);
        let mut rx = timer.subscribe();

        let start = Instant::now();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), 1);
        assert!(start.elapsed() >= MIN_ROTATION_PERIOD);

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stopping_closes_channel() {
        let timer = RotationTimer::spawn(3, Duration::from_secs(5));
        let mut rx = timer.subscribe();
        timer.stop();
        assert!(rx.changed().await.is_err());
    }
}

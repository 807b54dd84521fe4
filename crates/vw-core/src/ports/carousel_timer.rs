use std::time::Duration;

use crate::carousel::CarouselTimer;

/// Expiry notice for one armed timer instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerExpiry {
    pub timer: CarouselTimer,
    /// Arming sequence number; a restarted timer gets a new one.
    pub generation: u64,
}

/// One-shot timers for a single carousel instance.
///
/// Starting a timer that is already pending replaces it. Expiries are
/// delivered to the carousel's event loop by the implementation; an expiry
/// that raced with `stop` or a restart is filtered out by [`claim`].
///
/// [`claim`]: CarouselTimerPort::claim
#[async_trait::async_trait]
pub trait CarouselTimerPort: Send {
    async fn start(&mut self, timer: CarouselTimer, delay: Duration) -> anyhow::Result<()>;
    async fn stop(&mut self, timer: CarouselTimer) -> anyhow::Result<()>;
    /// Returns true when `expiry` belongs to the currently armed instance of
    /// its timer, and disarms it.
    fn claim(&mut self, expiry: &TimerExpiry) -> bool;
}

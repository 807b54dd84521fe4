use std::collections::HashMap;

use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tokio::time::{sleep, Duration};
use tracing::{debug, warn};
use vw_core::{
    carousel::CarouselTimer,
    ports::{CarouselTimerPort, TimerExpiry},
    CarouselId,
};

struct Armed {
    generation: u64,
    handle: AbortHandle,
}

/// Tokio-backed one-shot timers for one carousel.
///
/// Each armed timer is a spawned sleep that reports a [`TimerExpiry`] on the
/// carousel's expiry channel.
pub struct TokioCarouselTimer {
    carousel_id: CarouselId,
    timers: HashMap<CarouselTimer, Armed>,
    next_generation: u64,
    expiries: mpsc::UnboundedSender<TimerExpiry>,
}

impl TokioCarouselTimer {
    pub fn new(carousel_id: CarouselId) -> (Self, mpsc::UnboundedReceiver<TimerExpiry>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                carousel_id,
                timers: HashMap::new(),
                next_generation: 0,
                expiries: tx,
            },
            rx,
        )
    }

    pub fn is_armed(&self, timer: CarouselTimer) -> bool {
        self.timers.contains_key(&timer)
    }
}

impl Drop for TokioCarouselTimer {
    fn drop(&mut self) {
        for (_, armed) in self.timers.drain() {
            armed.handle.abort();
        }
    }
}

#[async_trait::async_trait]
impl CarouselTimerPort for TokioCarouselTimer {
    async fn start(&mut self, timer: CarouselTimer, delay: Duration) -> anyhow::Result<()> {
        if let Some(existing) = self.timers.remove(&timer) {
            existing.handle.abort();
        }

        self.next_generation += 1;
        let generation = self.next_generation;
        let expiries = self.expiries.clone();
        let carousel_id = self.carousel_id.clone();
        let handle = tokio::spawn(async move {
            sleep(delay).await;
            if expiries.send(TimerExpiry { timer, generation }).is_err() {
                warn!(carousel_id = %carousel_id, ?timer, "timer expired after carousel stopped");
            }
        });

        self.timers.insert(
            timer,
            Armed {
                generation,
                handle: handle.abort_handle(),
            },
        );
        debug!(
            carousel_id = %self.carousel_id,
            ?timer,
            delay_ms = delay.as_millis() as u64,
            "timer started"
        );
        Ok(())
    }

    async fn stop(&mut self, timer: CarouselTimer) -> anyhow::Result<()> {
        if let Some(armed) = self.timers.remove(&timer) {
            armed.handle.abort();
            debug!(carousel_id = %self.carousel_id, ?timer, "timer stopped");
        }
        Ok(())
    }

    fn claim(&mut self, expiry: &TimerExpiry) -> bool {
        match self.timers.get(&expiry.timer) {
            Some(armed) if armed.generation == expiry.generation => {
                self.timers.remove(&expiry.timer);
                true
            }
            _ => false,
        }
    }
}

//! Carousel controller.
//!
//! Executes the actions of one carousel's state machine against its timer
//! port.

use tracing::{debug, info};

use vw_core::{
    carousel::{CarouselAction, CarouselConfig, CarouselEvent, CarouselState, CarouselStateMachine},
    ports::{CarouselTimerPort, TimerExpiry},
    CarouselId,
};

/// Owns the state of one mounted (or not yet mounted) carousel.
///
/// 单个轮播实例的控制器；所有事件按到达顺序串行处理。
pub struct CarouselController {
    id: CarouselId,
    machine: CarouselStateMachine,
    state: CarouselState,
    timer: Box<dyn CarouselTimerPort>,
}

impl CarouselController {
    pub fn new(id: CarouselId, config: CarouselConfig, timer: Box<dyn CarouselTimerPort>) -> Self {
        Self {
            id,
            machine: CarouselStateMachine::new(config),
            state: CarouselState::unmounted(),
            timer,
        }
    }

    pub fn id(&self) -> &CarouselId {
        &self.id
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn config(&self) -> &CarouselConfig {
        self.machine.config()
    }

    /// Translate a timer expiry into an event, dropping stale ones.
    pub fn accept_expiry(&mut self, expiry: TimerExpiry) -> Option<CarouselEvent> {
        if self.timer.claim(&expiry) {
            Some(CarouselEvent::TimerFired(expiry.timer))
        } else {
            debug!(carousel_id = %self.id, ?expiry, "stale timer expiry dropped");
            None
        }
    }

    pub async fn handle(&mut self, event: CarouselEvent) -> anyhow::Result<&CarouselState> {
        let from = self.state.status;
        let (next, actions) = self.machine.transition(self.state.clone(), event);
        self.state = next;
        self.execute_actions(actions).await?;
        if from != self.state.status {
            info!(
                carousel_id = %self.id,
                from = ?from,
                to = ?self.state.status,
                event = ?event,
                "carousel autoplay status changed"
            );
        }
        Ok(&self.state)
    }

    async fn execute_actions(&mut self, actions: Vec<CarouselAction>) -> anyhow::Result<()> {
        for action in actions {
            match action {
                CarouselAction::StartTimer { timer, delay } => {
                    self.timer.start(timer, delay).await?;
                }
                CarouselAction::StopTimer { timer } => {
                    self.timer.stop(timer).await?;
                }
                CarouselAction::Moved { from, to } => {
                    debug!(carousel_id = %self.id, from, to, "carousel moved");
                }
                CarouselAction::NavigationRejected => {
                    debug!(carousel_id = %self.id, "navigation ignored during slide animation");
                }
            }
        }
        Ok(())
    }
}

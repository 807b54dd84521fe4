//! Carousel event loop.
//!
//! One task per carousel serializes UI events and timer expiries, so the
//! state machine never sees two events at once.

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, info_span, Instrument};

use vw_core::{
    carousel::{CarouselEvent, CarouselState},
    ports::TimerExpiry,
};

use super::CarouselController;

const EVENT_BUFFER: usize = 32;

/// UI-side handle of a running carousel task.
#[derive(Clone)]
pub struct CarouselHandle {
    events: mpsc::Sender<CarouselEvent>,
    snapshots: watch::Receiver<CarouselState>,
}

impl CarouselHandle {
    pub async fn send(&self, event: CarouselEvent) -> anyhow::Result<()> {
        self.events
            .send(event)
            .await
            .map_err(|_| anyhow::anyhow!("carousel task has stopped"))
    }

    /// Latest published state.
    pub fn state(&self) -> CarouselState {
        self.snapshots.borrow().clone()
    }

    /// Receiver that is notified after every handled event.
    pub fn subscribe(&self) -> watch::Receiver<CarouselState> {
        self.snapshots.clone()
    }
}

/// Start the event loop for `controller` on the current runtime.
///
/// The task ends once every [`CarouselHandle`] is dropped.
pub fn spawn_carousel(
    controller: CarouselController,
    expiries: mpsc::UnboundedReceiver<TimerExpiry>,
) -> (CarouselHandle, JoinHandle<anyhow::Result<()>>) {
    let (events_tx, events_rx) = mpsc::channel(EVENT_BUFFER);
    let (snapshots_tx, snapshots_rx) = watch::channel(controller.state().clone());
    let task = tokio::spawn(run_carousel(controller, events_rx, expiries, snapshots_tx));
    (
        CarouselHandle {
            events: events_tx,
            snapshots: snapshots_rx,
        },
        task,
    )
}

pub async fn run_carousel(
    mut controller: CarouselController,
    mut events: mpsc::Receiver<CarouselEvent>,
    mut expiries: mpsc::UnboundedReceiver<TimerExpiry>,
    snapshots: watch::Sender<CarouselState>,
) -> anyhow::Result<()> {
    let span = info_span!("usecase.carousel.run", carousel_id = %controller.id());
    async move {
        info!("carousel task started");
        loop {
            let event = tokio::select! {
                maybe_event = events.recv() => match maybe_event {
                    Some(event) => event,
                    None => break,
                },
                Some(expiry) = expiries.recv() => match controller.accept_expiry(expiry) {
                    Some(event) => event,
                    None => continue,
                },
            };
            let state = controller.handle(event).await?;
            snapshots.send_replace(state.clone());
        }

        if controller.state().mounted {
            debug!("handles dropped while mounted, unmounting");
            let state = controller.handle(CarouselEvent::Unmount).await?;
            snapshots.send_replace(state.clone());
        }
        info!("carousel task stopped");
        Ok(())
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use vw_core::carousel::{
        AutoplayStatus, BreakpointTable, CarouselConfig, CarouselPreset, InteractionKind,
        Navigation,
    };
    use vw_core::CarouselId;
    use vw_infra::time::TokioCarouselTimer;

    fn spawn(config: CarouselConfig) -> (CarouselHandle, JoinHandle<anyhow::Result<()>>) {
        let id = CarouselId::from("runtime-test");
        let (timer, expiries) = TokioCarouselTimer::new(id.clone());
        spawn_carousel(CarouselController::new(id, config, Box::new(timer)), expiries)
    }

    fn three_per_view() -> CarouselConfig {
        CarouselConfig::new(Duration::from_millis(2000), BreakpointTable::fixed(3).unwrap())
            .unwrap()
    }

    async fn mount(handle: &CarouselHandle, item_count: usize, viewport_width: u32) {
        let mut updates = handle.subscribe();
        handle
            .send(CarouselEvent::Mount {
                item_count,
                viewport_width,
            })
            .await
            .unwrap();
        updates.wait_for(|state| state.mounted).await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn autoplay_advances_on_interval_and_wraps() {
        let (handle, _task) = spawn(three_per_view());
        mount(&handle, 9, 1280).await;

        tokio::time::sleep(Duration::from_millis(2001)).await;
        assert_eq!(handle.state().start, 3);

        tokio::time::sleep(Duration::from_millis(2000)).await;
        assert_eq!(handle.state().start, 6);

        tokio::time::sleep(Duration::from_millis(2000)).await;
        assert_eq!(handle.state().start, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn hover_pause_holds_position_until_resume_delay() {
        let (handle, _task) = spawn(three_per_view());
        mount(&handle, 9, 1280).await;

        handle
            .send(CarouselEvent::InteractionStarted(InteractionKind::Hover))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(10_000)).await;
        assert_eq!(handle.state().start, 0);
        assert_eq!(handle.state().status, AutoplayStatus::Paused);

        handle
            .send(CarouselEvent::InteractionEnded(InteractionKind::Hover))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(501)).await;
        assert_eq!(handle.state().status, AutoplayStatus::Running);
        assert_eq!(handle.state().start, 0);

        tokio::time::sleep(Duration::from_millis(2000)).await;
        assert_eq!(handle.state().start, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn manual_navigation_restarts_interval() {
        let (handle, _task) = spawn(three_per_view());
        mount(&handle, 9, 1280).await;

        tokio::time::sleep(Duration::from_millis(1500)).await;
        handle
            .send(CarouselEvent::Navigate(Navigation::Next))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(handle.state().start, 3);

        tokio::time::sleep(Duration::from_millis(1001)).await;
        assert_eq!(handle.state().start, 6);
    }

    #[tokio::test(start_paused = true)]
    async fn static_list_never_moves() {
        let (handle, _task) = spawn(three_per_view());
        mount(&handle, 3, 1280).await;

        tokio::time::sleep(Duration::from_millis(10_000)).await;

        let state = handle.state();
        assert_eq!(state.start, 0);
        assert_eq!(state.status, AutoplayStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn preset_with_slide_animation_keeps_cadence() {
        let (handle, _task) = spawn(CarouselPreset::Values.config().unwrap());
        mount(&handle, 4, 1280).await;

        tokio::time::sleep(Duration::from_millis(3001)).await;
        assert_eq!(handle.state().start, 1);
        assert!(handle.state().transition_in_flight);

        tokio::time::sleep(Duration::from_millis(700)).await;
        assert!(!handle.state().transition_in_flight);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_handle_unmounts_and_stops_task() {
        let (handle, task) = spawn(three_per_view());
        mount(&handle, 9, 1280).await;
        let updates = handle.subscribe();

        drop(handle);
        task.await.unwrap().unwrap();

        assert!(!updates.borrow().mounted);
    }
}

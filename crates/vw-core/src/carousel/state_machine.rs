//! Carousel state machine.
//!
//! Pure transition function for the autoplay carousel. Timers are requested
//! through [`CarouselAction::StartTimer`] / [`CarouselAction::StopTimer`];
//! their expiry comes back as [`CarouselEvent::TimerFired`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{AutoplayStatus, CarouselConfig, CarouselState, InteractionKind};

/// Timers owned by one carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CarouselTimer {
    /// Next autoplay advance.
    Autoplay,
    /// Grace period after an interaction ends.
    Resume,
    /// End of the running slide animation.
    Transition,
}

/// User-initiated movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Navigation {
    Next,
    Previous,
    /// Show the window starting at this item (clamped to the list).
    GoTo(usize),
}

/// Events that drive a carousel.
///
/// 驱动轮播的事件。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarouselEvent {
    Mount { item_count: usize, viewport_width: u32 },
    TimerFired(CarouselTimer),
    InteractionStarted(InteractionKind),
    InteractionEnded(InteractionKind),
    Navigate(Navigation),
    Resize { viewport_width: u32 },
    ItemsChanged { item_count: usize },
    Unmount,
}

/// Side-effects produced by carousel transitions.
///
/// 轮播状态迁移产生的副作用。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarouselAction {
    /// Arm `timer`, replacing any pending instance of it.
    StartTimer { timer: CarouselTimer, delay: Duration },
    StopTimer { timer: CarouselTimer },
    /// The visible window moved.
    Moved { from: usize, to: usize },
    /// Navigation refused because a slide animation is still running.
    NavigationRejected,
}

/// Pure carousel state machine for one configuration.
#[derive(Debug, Clone)]
pub struct CarouselStateMachine {
    config: CarouselConfig,
}

impl CarouselStateMachine {
    pub fn new(config: CarouselConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn transition(
        &self,
        state: CarouselState,
        event: CarouselEvent,
    ) -> (CarouselState, Vec<CarouselAction>) {
        let mut state = state;
        let mut actions = Vec::new();
        match event {
            CarouselEvent::Mount {
                item_count,
                viewport_width,
            } => {
                if state.mounted {
                    self.unmount(&mut state, &mut actions);
                }
                self.mount(&mut state, item_count, viewport_width, &mut actions);
            }
            _ if !state.mounted => {}
            CarouselEvent::TimerFired(CarouselTimer::Autoplay) => {
                self.on_tick(&mut state, &mut actions)
            }
            CarouselEvent::TimerFired(CarouselTimer::Transition) => {
                state.transition_in_flight = false;
            }
            CarouselEvent::TimerFired(CarouselTimer::Resume) => {
                self.on_resume_due(&mut state, &mut actions)
            }
            CarouselEvent::InteractionStarted(kind) => {
                self.on_interaction_started(&mut state, kind, &mut actions)
            }
            CarouselEvent::InteractionEnded(kind) => {
                self.on_interaction_ended(&mut state, kind, &mut actions)
            }
            CarouselEvent::Navigate(navigation) => {
                self.on_navigate(&mut state, navigation, &mut actions)
            }
            CarouselEvent::Resize { viewport_width } => {
                state.viewport_width = viewport_width;
                state.items_per_view = self.config.breakpoints.items_per_view(viewport_width);
                self.reconcile(&mut state, &mut actions);
            }
            CarouselEvent::ItemsChanged { item_count } => {
                state.item_count = item_count;
                self.reconcile(&mut state, &mut actions);
            }
            CarouselEvent::Unmount => self.unmount(&mut state, &mut actions),
        }
        (state, actions)
    }

    fn mount(
        &self,
        state: &mut CarouselState,
        item_count: usize,
        viewport_width: u32,
        actions: &mut Vec<CarouselAction>,
    ) {
        *state = CarouselState {
            mounted: true,
            item_count,
            viewport_width,
            items_per_view: self.config.breakpoints.items_per_view(viewport_width),
            ..CarouselState::unmounted()
        };
        if self.can_autoplay(state) {
            self.run(state, actions);
        }
    }

    fn unmount(&self, state: &mut CarouselState, actions: &mut Vec<CarouselAction>) {
        for timer in [
            CarouselTimer::Autoplay,
            CarouselTimer::Resume,
            CarouselTimer::Transition,
        ] {
            actions.push(CarouselAction::StopTimer { timer });
        }
        *state = CarouselState::unmounted();
    }

    fn on_tick(&self, state: &mut CarouselState, actions: &mut Vec<CarouselAction>) {
        if state.status != AutoplayStatus::Running {
            return;
        }
        if state.transition_in_flight {
            self.arm_autoplay(actions);
            return;
        }
        if let Some(to) = self.forward_target(state) {
            self.move_to(state, to, actions);
        }
        self.continue_or_finish(state, actions);
    }

    fn on_resume_due(&self, state: &mut CarouselState, actions: &mut Vec<CarouselAction>) {
        state.resume_pending = false;
        if state.status == AutoplayStatus::Paused
            && !state.interactions.holds_pause(self.config.pause_on_interaction)
            && self.can_autoplay(state)
        {
            self.run(state, actions);
        }
    }

    fn on_interaction_started(
        &self,
        state: &mut CarouselState,
        kind: InteractionKind,
        actions: &mut Vec<CarouselAction>,
    ) {
        state.interactions.set(kind, true);
        let pauses = kind == InteractionKind::Drag || self.config.pause_on_interaction;
        if !pauses {
            return;
        }
        if state.resume_pending {
            state.resume_pending = false;
            actions.push(CarouselAction::StopTimer {
                timer: CarouselTimer::Resume,
            });
        }
        if state.status == AutoplayStatus::Running {
            state.status = AutoplayStatus::Paused;
            actions.push(CarouselAction::StopTimer {
                timer: CarouselTimer::Autoplay,
            });
        }
    }

    fn on_interaction_ended(
        &self,
        state: &mut CarouselState,
        kind: InteractionKind,
        actions: &mut Vec<CarouselAction>,
    ) {
        state.interactions.set(kind, false);
        if state.status != AutoplayStatus::Paused
            || state.interactions.holds_pause(self.config.pause_on_interaction)
            || state.resume_pending
        {
            return;
        }
        if self.config.resume_delay.is_zero() {
            self.run(state, actions);
        } else {
            state.resume_pending = true;
            actions.push(CarouselAction::StartTimer {
                timer: CarouselTimer::Resume,
                delay: self.config.resume_delay,
            });
        }
    }

    fn on_navigate(
        &self,
        state: &mut CarouselState,
        navigation: Navigation,
        actions: &mut Vec<CarouselAction>,
    ) {
        if state.is_static() {
            return;
        }
        if state.transition_in_flight {
            actions.push(CarouselAction::NavigationRejected);
            return;
        }
        let target = match navigation {
            Navigation::Next => self.forward_target(state),
            Navigation::Previous => self.backward_target(state),
            Navigation::GoTo(index) => Some(self.goto_target(state, index)),
        };
        if let Some(to) = target {
            self.move_to(state, to, actions);
        }
        if state.status == AutoplayStatus::Running {
            self.continue_or_finish(state, actions);
        } else {
            self.restart_if_unfinished(state, actions);
        }
    }

    /// Re-clamp after the view or the list changed size and switch between
    /// animated and static rendering.
    fn reconcile(&self, state: &mut CarouselState, actions: &mut Vec<CarouselAction>) {
        let clamped = state.start.min(state.last_start());
        if clamped != state.start {
            actions.push(CarouselAction::Moved {
                from: state.start,
                to: clamped,
            });
            state.start = clamped;
        }

        if !self.can_autoplay(state) {
            if state.status == AutoplayStatus::Running {
                actions.push(CarouselAction::StopTimer {
                    timer: CarouselTimer::Autoplay,
                });
            }
            if state.resume_pending {
                state.resume_pending = false;
                actions.push(CarouselAction::StopTimer {
                    timer: CarouselTimer::Resume,
                });
            }
            if matches!(
                state.status,
                AutoplayStatus::Running | AutoplayStatus::Paused | AutoplayStatus::Finished
            ) {
                state.status = AutoplayStatus::Idle;
            }
            return;
        }

        if state.status == AutoplayStatus::Idle {
            self.run_or_hold(state, actions);
        } else {
            self.restart_if_unfinished(state, actions);
        }
    }

    /// A finished carousel that is no longer on its last window autoplays
    /// again.
    fn restart_if_unfinished(&self, state: &mut CarouselState, actions: &mut Vec<CarouselAction>) {
        if state.status == AutoplayStatus::Finished
            && state.start < state.last_start()
            && self.can_autoplay(state)
        {
            self.run_or_hold(state, actions);
        }
    }

    fn run_or_hold(&self, state: &mut CarouselState, actions: &mut Vec<CarouselAction>) {
        if state.interactions.holds_pause(self.config.pause_on_interaction) {
            state.status = AutoplayStatus::Paused;
        } else {
            self.run(state, actions);
        }
    }

    fn can_autoplay(&self, state: &CarouselState) -> bool {
        self.config.autoplay && state.mounted && !state.is_static()
    }

    fn run(&self, state: &mut CarouselState, actions: &mut Vec<CarouselAction>) {
        state.status = AutoplayStatus::Running;
        self.arm_autoplay(actions);
    }

    fn arm_autoplay(&self, actions: &mut Vec<CarouselAction>) {
        actions.push(CarouselAction::StartTimer {
            timer: CarouselTimer::Autoplay,
            delay: self.config.interval,
        });
    }

    /// Without loop mode autoplay stops on the last window.
    fn continue_or_finish(&self, state: &mut CarouselState, actions: &mut Vec<CarouselAction>) {
        if !self.config.loop_enabled && state.start >= state.last_start() {
            state.status = AutoplayStatus::Finished;
            actions.push(CarouselAction::StopTimer {
                timer: CarouselTimer::Autoplay,
            });
        } else {
            self.arm_autoplay(actions);
        }
    }

    fn move_to(&self, state: &mut CarouselState, to: usize, actions: &mut Vec<CarouselAction>) {
        if to == state.start {
            return;
        }
        actions.push(CarouselAction::Moved {
            from: state.start,
            to,
        });
        state.start = to;
        if !self.config.transition.is_zero() {
            state.transition_in_flight = true;
            actions.push(CarouselAction::StartTimer {
                timer: CarouselTimer::Transition,
                delay: self.config.transition,
            });
        }
    }

    fn forward_target(&self, state: &CarouselState) -> Option<usize> {
        let last = state.last_start();
        let next = state.start + state.items_per_view;
        if next <= last {
            Some(next)
        } else if self.config.loop_enabled {
            Some(0)
        } else if state.start < last {
            Some(last)
        } else {
            None
        }
    }

    fn backward_target(&self, state: &CarouselState) -> Option<usize> {
        if state.start == 0 {
            self.config.loop_enabled.then(|| state.last_start())
        } else {
            Some(state.start.saturating_sub(state.items_per_view))
        }
    }

    fn goto_target(&self, state: &CarouselState, index: usize) -> usize {
        let index = if self.config.loop_enabled && state.item_count > 0 {
            index % state.item_count
        } else {
            index
        };
        index.min(state.last_start())
    }
}

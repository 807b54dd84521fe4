use serde::{Deserialize, Serialize};

use super::RegistrationState;

/// Display status of one stepper bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepMarker {
    Completed,
    Current,
    Upcoming,
}

/// Progress stepper projection of the flow state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub current: usize,
    pub total: usize,
    pub markers: Vec<StepMarker>,
    pub finished: bool,
}

impl ProgressSnapshot {
    /// Project `state` onto `total` stepper bubbles.
    ///
    /// Bubbles strictly before the current step are `Completed`. Once the flow
    /// is finished every bubble is `Completed`.
    pub fn project(state: &RegistrationState, total: usize) -> Self {
        let (current, finished) = match state {
            RegistrationState::InProgress { step } => (*step, false),
            RegistrationState::Completed => (total, true),
        };
        let markers = (1..=total)
            .map(|index| {
                if finished || index < current {
                    StepMarker::Completed
                } else if index == current {
                    StepMarker::Current
                } else {
                    StepMarker::Upcoming
                }
            })
            .collect();
        Self {
            current,
            total,
            markers,
            finished,
        }
    }

    pub fn completed_steps(&self) -> usize {
        self.markers
            .iter()
            .filter(|m| **m == StepMarker::Completed)
            .count()
    }

    /// Width of the connecting bar, in percent.
    pub fn fill_percent(&self) -> u8 {
        if self.finished {
            return 100;
        }
        if self.total <= 1 {
            return 0;
        }
        let percent = (self.current.saturating_sub(1) * 100) / (self.total - 1);
        percent.min(100) as u8
    }
}

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Autoplay status of a carousel.
///
/// 自动播放状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutoplayStatus {
    /// Timer armed, advancing on every tick.
    Running,
    /// Suspended by a user interaction.
    Paused,
    /// Not animating: list fits the view, autoplay disabled, or unmounted.
    Idle,
    /// Reached the last window without loop mode.
    Finished,
}

/// User interactions that may suspend autoplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractionKind {
    Hover,
    Focus,
    Drag,
}

/// Interactions currently in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveInteractions {
    pub hover: bool,
    pub focus: bool,
    pub drag: bool,
}

impl ActiveInteractions {
    pub fn set(&mut self, kind: InteractionKind, active: bool) {
        match kind {
            InteractionKind::Hover => self.hover = active,
            InteractionKind::Focus => self.focus = active,
            InteractionKind::Drag => self.drag = active,
        }
    }

    /// Whether any interaction that pauses autoplay is still active.
    pub fn holds_pause(&self, pause_on_interaction: bool) -> bool {
        self.drag || (pause_on_interaction && (self.hover || self.focus))
    }
}

/// Runtime state of one carousel instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselState {
    pub mounted: bool,
    /// First visible item.
    pub start: usize,
    pub item_count: usize,
    pub items_per_view: usize,
    pub viewport_width: u32,
    pub status: AutoplayStatus,
    pub interactions: ActiveInteractions,
    pub transition_in_flight: bool,
    pub resume_pending: bool,
}

impl CarouselState {
    pub fn unmounted() -> Self {
        Self {
            mounted: false,
            start: 0,
            item_count: 0,
            items_per_view: 1,
            viewport_width: 0,
            status: AutoplayStatus::Idle,
            interactions: ActiveInteractions::default(),
            transition_in_flight: false,
            resume_pending: false,
        }
    }

    /// Largest start index that still fills the view.
    pub fn last_start(&self) -> usize {
        self.item_count.saturating_sub(self.items_per_view)
    }

    /// The whole list fits in one view, so nothing ever moves.
    pub fn is_static(&self) -> bool {
        self.item_count <= self.items_per_view
    }

    pub fn visible(&self) -> Range<usize> {
        let end = (self.start + self.items_per_view).min(self.item_count);
        self.start.min(end)..end
    }
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::unmounted()
    }
}

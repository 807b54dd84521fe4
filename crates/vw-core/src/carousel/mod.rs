//! Carousel domain module.
//!
//! Responsive, autoplaying window over a fixed item list.

mod config;
mod state;
pub mod state_machine;

pub use config::{Breakpoint, BreakpointTable, CarouselConfig, CarouselPreset};
pub use state::{ActiveInteractions, AutoplayStatus, CarouselState, InteractionKind};
pub use state_machine::{
    CarouselAction, CarouselEvent, CarouselStateMachine, CarouselTimer, Navigation,
};

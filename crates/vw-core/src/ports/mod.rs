//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and the infrastructure
//! implementations, so the domain stays independent of timers, channels and
//! logging sinks.

mod carousel_timer;
mod clock;
mod submission;

pub use carousel_timer::{CarouselTimerPort, TimerExpiry};
pub use clock::ClockPort;
pub use submission::SubmissionPort;

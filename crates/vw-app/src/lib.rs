//! Visdom Wave application layer
//!
//! This crate drives the pure state machines from `vw-core` and executes the
//! actions they emit against the ports.

pub mod usecases;

pub use usecases::carousel::{spawn_carousel, CarouselController, CarouselHandle};
pub use usecases::forms::SubmitForm;
pub use usecases::registration::RegistrationFlow;

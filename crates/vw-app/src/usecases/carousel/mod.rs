mod controller;
mod runtime;

pub use controller::CarouselController;
pub use runtime::{run_carousel, spawn_carousel, CarouselHandle};

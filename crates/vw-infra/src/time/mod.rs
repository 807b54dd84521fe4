mod carousel_timer;
mod system_clock;

pub use carousel_timer::TokioCarouselTimer;
pub use system_clock::SystemClock;

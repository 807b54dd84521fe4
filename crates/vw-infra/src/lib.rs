pub mod submission;
pub mod time;

pub use submission::{ChannelCollector, TracingCollector};
pub use time::{SystemClock, TokioCarouselTimer};

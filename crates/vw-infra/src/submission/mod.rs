mod channel_collector;
mod tracing_collector;

pub use channel_collector::ChannelCollector;
pub use tracing_collector::TracingCollector;

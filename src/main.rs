use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use visdomwave_lib::bootstrap::{init_tracing_subscriber, load_config, wire_services};
use vw_core::AppConfig;
use vw_infra::TracingCollector;

const CONFIG_ENV: &str = "VISDOMWAVE_CONFIG";

/// Load the config (first argument, else `$VISDOMWAVE_CONFIG`, else
/// defaults), wire every service and report what was resolved.
fn main() -> anyhow::Result<()> {
    let config = match config_path() {
        Some(path) => load_config(&path)?,
        None => AppConfig::default(),
    };
    init_tracing_subscriber(&config.logging)?;

    let services = wire_services(&config, Arc::new(TracingCollector))?;

    for step in services.catalog().steps() {
        info!(
            step = step.index,
            title = %step.title,
            fields = step.schema.fields().len(),
            transition = ?step.transition,
            "registration step"
        );
    }
    for (preset, carousel) in services.carousel_configs() {
        info!(
            carousel = preset.name(),
            autoplay = carousel.autoplay,
            interval_ms = carousel.interval.as_millis() as u64,
            resume_delay_ms = carousel.resume_delay.as_millis() as u64,
            transition_ms = carousel.transition.as_millis() as u64,
            loop_enabled = carousel.loop_enabled,
            pause_on_interaction = carousel.pause_on_interaction,
            breakpoints = ?carousel.breakpoints.entries(),
            "carousel resolved"
        );
    }
    Ok(())
}

fn config_path() -> Option<PathBuf> {
    std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
}

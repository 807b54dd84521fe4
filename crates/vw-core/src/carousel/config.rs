use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::CarouselSettings;
use crate::error::ConfigurationError;

/// Items shown at once from `min_width` pixels upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub min_width: u32,
    pub items_per_view: usize,
}

impl Breakpoint {
    pub const fn new(min_width: u32, items_per_view: usize) -> Self {
        Self {
            min_width,
            items_per_view,
        }
    }
}

/// Responsive items-per-view table, sorted by width.
///
/// The first entry always starts at 0 px, so every viewport width resolves
/// to exactly one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakpointTable(Vec<Breakpoint>);

impl BreakpointTable {
    pub fn new(mut breakpoints: Vec<Breakpoint>) -> Result<Self, ConfigurationError> {
        if breakpoints.is_empty() {
            return Err(ConfigurationError::EmptyBreakpoints);
        }
        breakpoints.sort_by_key(|b| b.min_width);
        if breakpoints[0].min_width != 0 {
            return Err(ConfigurationError::UncoveredViewport(0));
        }
        for pair in breakpoints.windows(2) {
            if pair[0].min_width == pair[1].min_width {
                return Err(ConfigurationError::DuplicateBreakpoint(pair[1].min_width));
            }
        }
        if let Some(b) = breakpoints.iter().find(|b| b.items_per_view == 0) {
            return Err(ConfigurationError::ZeroItemsPerView(b.min_width));
        }
        Ok(Self(breakpoints))
    }

    /// A table with a single entry covering every width.
    pub fn fixed(items_per_view: usize) -> Result<Self, ConfigurationError> {
        Self::new(vec![Breakpoint::new(0, items_per_view)])
    }

    pub fn items_per_view(&self, viewport_width: u32) -> usize {
        self.0
            .iter()
            .rev()
            .find(|b| b.min_width <= viewport_width)
            .map(|b| b.items_per_view)
            .unwrap_or(self.0[0].items_per_view)
    }

    pub fn entries(&self) -> &[Breakpoint] {
        &self.0
    }
}

/// Carousel behavior knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselConfig {
    /// Advance automatically on a timer.
    pub autoplay: bool,
    /// Delay between two autoplay advances.
    pub interval: Duration,
    /// Grace period between the end of an interaction and autoplay resuming.
    pub resume_delay: Duration,
    /// Length of the slide animation; zero disables the in-flight guard.
    pub transition: Duration,
    /// Wrap from the last window back to the first.
    pub loop_enabled: bool,
    /// Hover and focus pause autoplay. Dragging always does.
    pub pause_on_interaction: bool,
    pub breakpoints: BreakpointTable,
}

impl CarouselConfig {
    pub fn new(interval: Duration, breakpoints: BreakpointTable) -> Result<Self, ConfigurationError> {
        if interval.is_zero() {
            return Err(ConfigurationError::ZeroInterval);
        }
        Ok(Self {
            autoplay: true,
            interval,
            resume_delay: Duration::from_millis(500),
            transition: Duration::ZERO,
            loop_enabled: true,
            pause_on_interaction: true,
            breakpoints,
        })
    }

    pub fn with_resume_delay(mut self, delay: Duration) -> Self {
        self.resume_delay = delay;
        self
    }

    pub fn with_transition(mut self, transition: Duration) -> Self {
        self.transition = transition;
        self
    }

    pub fn with_loop(mut self, enabled: bool) -> Self {
        self.loop_enabled = enabled;
        self
    }

    pub fn with_pause_on_interaction(mut self, enabled: bool) -> Self {
        self.pause_on_interaction = enabled;
        self
    }

    pub fn with_autoplay(mut self, enabled: bool) -> Self {
        self.autoplay = enabled;
        self
    }

    /// Overlay file settings on top of this configuration.
    pub fn with_settings(mut self, settings: &CarouselSettings) -> Result<Self, ConfigurationError> {
        if let Some(ms) = settings.interval_ms {
            if ms == 0 {
                return Err(ConfigurationError::ZeroInterval);
            }
            self.interval = Duration::from_millis(ms);
        }
        if let Some(ms) = settings.resume_delay_ms {
            self.resume_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = settings.transition_ms {
            self.transition = Duration::from_millis(ms);
        }
        if let Some(enabled) = settings.autoplay {
            self.autoplay = enabled;
        }
        if let Some(enabled) = settings.loop_enabled {
            self.loop_enabled = enabled;
        }
        if let Some(enabled) = settings.pause_on_interaction {
            self.pause_on_interaction = enabled;
        }
        if let Some(breakpoints) = &settings.breakpoints {
            self.breakpoints = BreakpointTable::new(breakpoints.clone())?;
        }
        Ok(self)
    }
}

/// Carousels found on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarouselPreset {
    /// Patents page: fast cycle, one to three cards.
    Patents,
    /// Home page curriculum strip: up to four boards side by side.
    Curriculum,
    /// About page "what drives us": one card, never pauses.
    Values,
}

impl CarouselPreset {
    pub const ALL: [CarouselPreset; 3] = [
        CarouselPreset::Patents,
        CarouselPreset::Curriculum,
        CarouselPreset::Values,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CarouselPreset::Patents => "patents",
            CarouselPreset::Curriculum => "curriculum",
            CarouselPreset::Values => "values",
        }
    }

    pub fn config(&self) -> Result<CarouselConfig, ConfigurationError> {
        let config = match self {
            CarouselPreset::Patents => CarouselConfig::new(
                Duration::from_millis(1500),
                BreakpointTable::new(vec![
                    Breakpoint::new(0, 1),
                    Breakpoint::new(640, 2),
                    Breakpoint::new(1280, 3),
                ])?,
            )?
            .with_transition(Duration::from_millis(800)),
            CarouselPreset::Curriculum => CarouselConfig::new(
                Duration::from_millis(2000),
                BreakpointTable::new(vec![
                    Breakpoint::new(0, 1),
                    Breakpoint::new(640, 2),
                    Breakpoint::new(1024, 3),
                    Breakpoint::new(1280, 4),
                ])?,
            )?
            .with_transition(Duration::from_millis(400)),
            CarouselPreset::Values => {
                CarouselConfig::new(Duration::from_millis(3000), BreakpointTable::fixed(1)?)?
                    .with_transition(Duration::from_millis(700))
                    .with_pause_on_interaction(false)
            }
        };
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_picks_widest_matching_breakpoint() {
        let table = CarouselPreset::Curriculum.config().unwrap().breakpoints;
        assert_eq!(table.items_per_view(320), 1);
        assert_eq!(table.items_per_view(640), 2);
        assert_eq!(table.items_per_view(1100), 3);
        assert_eq!(table.items_per_view(1920), 4);
    }

    #[test]
    fn table_must_cover_narrow_viewports() {
        let err = BreakpointTable::new(vec![Breakpoint::new(480, 1)]).unwrap_err();
        assert_eq!(err, ConfigurationError::UncoveredViewport(0));
    }

    #[test]
    fn table_is_sorted_on_construction() {
        let table =
            BreakpointTable::new(vec![Breakpoint::new(768, 2), Breakpoint::new(0, 1)]).unwrap();
        assert_eq!(table.entries()[0].min_width, 0);
        assert_eq!(table.items_per_view(800), 2);
    }

    #[test]
    fn degenerate_tables_are_rejected() {
        assert_eq!(
            BreakpointTable::new(Vec::new()).unwrap_err(),
            ConfigurationError::EmptyBreakpoints
        );
        assert_eq!(
            BreakpointTable::new(vec![Breakpoint::new(0, 1), Breakpoint::new(0, 2)]).unwrap_err(),
            ConfigurationError::DuplicateBreakpoint(0)
        );
        assert_eq!(
            BreakpointTable::new(vec![Breakpoint::new(0, 0)]).unwrap_err(),
            ConfigurationError::ZeroItemsPerView(0)
        );
    }

    #[test]
    fn zero_interval_is_rejected() {
        let err = CarouselConfig::new(Duration::ZERO, BreakpointTable::fixed(1).unwrap()).unwrap_err();
        assert_eq!(err, ConfigurationError::ZeroInterval);
    }

    #[test]
    fn settings_override_preset_values() {
        let settings = CarouselSettings {
            interval_ms: Some(4000),
            loop_enabled: Some(false),
            breakpoints: Some(vec![Breakpoint::new(0, 2)]),
            ..CarouselSettings::default()
        };
        let config = CarouselPreset::Patents
            .config()
            .unwrap()
            .with_settings(&settings)
            .unwrap();
        assert_eq!(config.interval, Duration::from_millis(4000));
        assert!(!config.loop_enabled);
        assert!(config.pause_on_interaction);
        assert_eq!(config.breakpoints.items_per_view(1920), 2);
    }

    #[test]
    fn settings_with_uncovered_breakpoints_are_rejected() {
        let settings = CarouselSettings {
            breakpoints: Some(vec![Breakpoint::new(640, 2)]),
            ..CarouselSettings::default()
        };
        let err = CarouselPreset::Values
            .config()
            .unwrap()
            .with_settings(&settings)
            .unwrap_err();
        assert_eq!(err, ConfigurationError::UncoveredViewport(0));
    }

    #[test]
    fn all_presets_build() {
        for preset in CarouselPreset::ALL {
            assert!(preset.config().is_ok(), "{} preset", preset.name());
        }
    }
}

//! # Dependency Injection / 依赖注入模块
//!
//! Assembles the use cases from config, presets and infra adapters.
//!
//! This is the only place that depends on `vw-app` and `vw-infra` at once.
//! 这是唯一同时依赖 vw-app 与 vw-infra 的地方，只负责组装。

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{info, warn};

use vw_app::{spawn_carousel, CarouselController, CarouselHandle, RegistrationFlow, SubmitForm};
use vw_core::{
    carousel::{CarouselConfig, CarouselPreset},
    ports::{ClockPort, SubmissionPort},
    registration::StepCatalog,
    AppConfig, CarouselId, ConfigurationError,
};
use vw_infra::{SystemClock, TokioCarouselTimer};

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during service assembly
/// 组装服务时的错误（配置不合法）
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("invalid registration catalog: {0}")]
    Registration(#[source] ConfigurationError),

    #[error("invalid form schema: {0}")]
    Form(#[source] ConfigurationError),

    #[error("invalid configuration for carousel `{name}`: {source}")]
    Carousel {
        name: String,
        #[source]
        source: ConfigurationError,
    },
}

/// Assembled services shared by the pages.
pub struct AppServices {
    catalog: Arc<StepCatalog>,
    carousels: BTreeMap<CarouselPreset, CarouselConfig>,
    sign_in: Arc<SubmitForm>,
    contact: Arc<SubmitForm>,
    submissions: Arc<dyn SubmissionPort>,
    clock: Arc<dyn ClockPort>,
}

impl AppServices {
    /// A fresh sign-up session.
    pub fn registration_flow(&self) -> RegistrationFlow {
        RegistrationFlow::new(
            self.catalog.clone(),
            self.submissions.clone(),
            self.clock.clone(),
        )
    }

    pub fn sign_in(&self) -> Arc<SubmitForm> {
        self.sign_in.clone()
    }

    pub fn contact(&self) -> Arc<SubmitForm> {
        self.contact.clone()
    }

    pub fn catalog(&self) -> &StepCatalog {
        &self.catalog
    }

    pub fn carousel_config(&self, preset: CarouselPreset) -> Option<&CarouselConfig> {
        self.carousels.get(&preset)
    }

    pub fn carousel_configs(&self) -> impl Iterator<Item = (CarouselPreset, &CarouselConfig)> {
        self.carousels.iter().map(|(preset, config)| (*preset, config))
    }

    /// Start an event loop for one carousel instance on the current runtime.
    pub fn spawn_carousel(
        &self,
        preset: CarouselPreset,
    ) -> Option<(CarouselHandle, JoinHandle<anyhow::Result<()>>)> {
        let config = self.carousels.get(&preset)?.clone();
        let id = CarouselId::from(format!("{}-{}", preset.name(), CarouselId::new()));
        let (timer, expiries) = TokioCarouselTimer::new(id.clone());
        let controller = CarouselController::new(id, config, Box::new(timer));
        Some(spawn_carousel(controller, expiries))
    }
}

/// Build the carousel configurations: preset defaults overlaid with the
/// matching `[carousel.<name>]` section.
pub fn resolve_carousels(
    config: &AppConfig,
) -> WiringResult<BTreeMap<CarouselPreset, CarouselConfig>> {
    for name in config.carousels.keys() {
        if !CarouselPreset::ALL.iter().any(|preset| preset.name() == name) {
            warn!(carousel = %name, "config section for unknown carousel ignored");
        }
    }

    CarouselPreset::ALL
        .iter()
        .map(|preset| {
            let name = preset.name();
            let to_error = |source| WiringError::Carousel {
                name: name.to_string(),
                source,
            };
            let mut resolved = preset.config().map_err(to_error)?;
            if let Some(settings) = config.carousel(name) {
                resolved = resolved.with_settings(settings).map_err(to_error)?;
            }
            Ok((*preset, resolved))
        })
        .collect()
}

/// Wire every service against the given submission collector.
pub fn wire_services(
    config: &AppConfig,
    submissions: Arc<dyn SubmissionPort>,
) -> WiringResult<AppServices> {
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);
    let catalog = Arc::new(StepCatalog::standard().map_err(WiringError::Registration)?);
    let sign_in = SubmitForm::sign_in(submissions.clone(), clock.clone()).map_err(WiringError::Form)?;
    let contact = SubmitForm::contact(submissions.clone(), clock.clone()).map_err(WiringError::Form)?;
    let carousels = resolve_carousels(config)?;

    info!(
        registration_steps = catalog.total_steps(),
        carousels = carousels.len(),
        "services wired"
    );

    Ok(AppServices {
        catalog,
        carousels,
        sign_in: Arc::new(sign_in),
        contact: Arc::new(contact),
        submissions,
        clock,
    })
}

//! Visdom Wave bootstrap
//!
//! Config loading, tracing setup and service wiring on top of the
//! `vw-core` / `vw-app` / `vw-infra` crates.

pub mod bootstrap;

pub use bootstrap::{init_tracing_subscriber, load_config, wire_services, AppServices};

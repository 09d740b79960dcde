//! Backend runtime entry point and public API surface.
//!
//! This crate owns the backend lifecycle: it loads configuration, wires the
//! notification store, feedback dispatcher and compositor surface mirror
//! together, routes bridge messages to services, and tears everything down
//! in order on shutdown.

mod app;
mod compositor;
mod config;
mod effects;
mod readiness;
mod runtime;
mod services;
mod state;

pub use crate::config::{ConfigError, LoadedConfig, load_config};
pub use crate::runtime::run;

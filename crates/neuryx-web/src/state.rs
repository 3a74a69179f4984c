//! Shared application state for the web server.

use std::sync::Arc;

use neuryx_common::Domain;
use neuryx_core::DomainEngine;

use crate::config::ServiceConfig;

/// Shared state injected into every Axum handler. Both engines are
/// immutable after startup, so concurrent reads need no synchronization.
pub struct AppState {
    pub alzheimer: DomainEngine,
    pub parkinson: DomainEngine,
}

impl AppState {
    /// Build both domain engines from config, running the startup inference
    /// check on each loaded artifact.
    pub fn from_config(config: &ServiceConfig) -> anyhow::Result<Self> {
        let mut alzheimer = DomainEngine::from_artifact_path(
            Domain::Alzheimer,
            config.models.alzheimer_path.as_deref(),
        )?;
        alzheimer.smoke_check();

        let mut parkinson = DomainEngine::from_artifact_path(
            Domain::Parkinson,
            config.models.parkinson_path.as_deref(),
        )?;
        parkinson.smoke_check();

        Ok(Self {
            alzheimer,
            parkinson,
        })
    }
}

pub type SharedState = Arc<AppState>;

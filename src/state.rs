//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{DynUrlService, RegistrySettings, UrlService};
use crate::domain::repositories::{CounterRepository, UrlRepository};

#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<DynUrlService>,
}

impl AppState {
    /// Wires the URL service over the given repositories.
    pub fn new(
        url_repository: Arc<dyn UrlRepository>,
        counter_repository: Arc<dyn CounterRepository>,
        settings: RegistrySettings,
    ) -> Self {
        Self {
            url_service: Arc::new(UrlService::new(
                url_repository,
                counter_repository,
                settings,
            )),
        }
    }
}

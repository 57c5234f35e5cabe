use std::sync::Arc;

use crate::clients::{FeedbackBackend, NavigationCache, Renderer};
use crate::config::Config;

/// Shared application state injected into all handlers.
///
/// The config snapshot and collaborators are built once at startup and
/// shared read-only across concurrent requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub renderer: Arc<dyn Renderer>,
    pub backend: Arc<dyn FeedbackBackend>,
    pub navigation: Arc<dyn NavigationCache>,
}

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::routing::get;

use feedback_controller::clients::{
    BackendError, FeedbackBackend, FeedbackMessage, NullNavigationCache, PageTemplate,
    RenderError, Renderer,
};
use feedback_controller::config::Config;
use feedback_controller::handlers::{
    add_feedback_handler, feedback_thanks_handler, get_feedback_handler, health_handler,
};
use feedback_controller::model::{FeedbackPage, Page};
use feedback_controller::state::AppState;

pub const SITE_DOMAIN: &str = "ons.gov.uk";

pub fn test_config() -> Config {
    Config {
        bind_addr: "0.0.0.0:25200".to_string(),
        api_router_url: "http://localhost:23200/v1".to_string(),
        site_domain: SITE_DOMAIN.to_string(),
        service_auth_token: "test-auth-token".to_string(),
        enable_new_nav_bar: false,
        graceful_shutdown_timeout_secs: 5,
        supported_languages: vec!["en".to_string(), "cy".to_string()],
        log_level: "info".to_string(),
        log_format: "text".to_string(),
    }
}

/// Renderer double that records every build call.
pub struct RecordingRenderer {
    calls: Mutex<Vec<(FeedbackPage, PageTemplate)>>,
}

impl RecordingRenderer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<(FeedbackPage, PageTemplate)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Renderer for RecordingRenderer {
    fn build_page(
        &self,
        page: &FeedbackPage,
        template: PageTemplate,
    ) -> Result<String, RenderError> {
        self.calls.lock().unwrap().push((page.clone(), template));
        Ok(format!("<html><!-- {} --></html>", template.name()))
    }

    fn new_base_page_model(&self) -> Page {
        Page::default()
    }
}

/// Feedback API double that records submissions and can be told to fail.
pub struct RecordingBackend {
    calls: Mutex<Vec<FeedbackMessage>>,
    fail_status: Option<u16>,
    healthy: bool,
}

impl RecordingBackend {
    pub fn ok() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            fail_status: None,
            healthy: true,
        })
    }

    pub fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            fail_status: Some(status),
            healthy: true,
        })
    }

    pub fn unhealthy() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            fail_status: None,
            healthy: false,
        })
    }

    pub fn calls(&self) -> Vec<FeedbackMessage> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl FeedbackBackend for RecordingBackend {
    async fn post_feedback(&self, message: &FeedbackMessage) -> Result<(), BackendError> {
        self.calls.lock().unwrap().push(message.clone());
        match self.fail_status {
            Some(code) => Err(BackendError::Status(code)),
            None => Ok(()),
        }
    }

    async fn health_check(&self) -> bool {
        self.healthy
    }
}

pub fn create_test_state(
    renderer: Arc<RecordingRenderer>,
    backend: Arc<RecordingBackend>,
) -> AppState {
    AppState {
        config: Arc::new(test_config()),
        renderer,
        backend,
        navigation: Arc::new(NullNavigationCache::new()),
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route(
            "/feedback",
            get(get_feedback_handler).post(add_feedback_handler),
        )
        .route(
            "/feedback/thanks",
            get(feedback_thanks_handler).post(add_feedback_handler),
        )
        .route("/health", get(health_handler))
        .with_state(state)
}

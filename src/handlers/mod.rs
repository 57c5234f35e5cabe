//! HTTP handlers for the feedback pages and the health endpoint.
//!
//! - [`feedback`] - Form display and submission orchestration
//! - [`thanks`] - Post-submission acknowledgement page
//! - [`health`] - Service health report

pub mod feedback;
pub mod health;
pub mod thanks;

pub use feedback::{add_feedback_handler, get_feedback_handler};
pub use health::health_handler;
pub use thanks::feedback_thanks_handler;

use axum::http::{HeaderMap, header};

use crate::model::FeedbackPage;
use crate::state::AppState;

/// Resolves the request language from the `lang` cookie set by upstream
/// middleware, constrained to the configured supported languages.
pub(crate) fn request_language(headers: &HeaderMap, supported: &[String]) -> String {
    let default = supported.first().map(String::as_str).unwrap_or("en");

    let Some(cookies) = headers.get(header::COOKIE).and_then(|v| v.to_str().ok()) else {
        return default.to_string();
    };

    for pair in cookies.split(';') {
        if let Some((name, value)) = pair.trim().split_once('=')
            && name == "lang"
            && supported.iter().any(|s| s == value)
        {
            return value.to_string();
        }
    }

    default.to_string()
}

/// The referring page captured at form-display time, empty when absent.
pub(crate) fn referer(headers: &HeaderMap) -> String {
    headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Lenient single-parameter lookup for display-only query values.
pub(crate) fn query_param(query: Option<&str>, name: &str) -> String {
    let Some(query) = query else {
        return String::new();
    };

    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
        .unwrap_or_default()
}

/// Attaches navigation bar content when the feature flag is enabled.
///
/// Lookup failures are logged and ignored; the page renders without
/// navigation content.
pub(crate) async fn attach_navigation(state: &AppState, page: &mut FeedbackPage, lang: &str) {
    if !state.config.enable_new_nav_bar {
        return;
    }

    match state.navigation.mapped_navigation_content(lang).await {
        Ok(content) => page.navigation = content,
        Err(e) => {
            tracing::warn!(error = %e, "navigation content unavailable, rendering without it");
        }
    }
}

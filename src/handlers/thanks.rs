//! Handler for the post-submission acknowledgement page.

use axum::{
    extract::{RawQuery, State},
    http::{HeaderMap, Uri},
    response::Html,
};

use crate::clients::PageTemplate;
use crate::error::AppError;
use crate::handlers::{attach_navigation, query_param, referer, request_language};
use crate::mapper;
use crate::state::AppState;

/// Renders the thanks page.
///
/// # Endpoint
///
/// `GET /feedback/thanks`
///
/// The `returnTo` query parameter is attacker-controlled: it is only honored
/// as a navigable target when it is the whole-site token or passes the
/// same-site guard; anything else falls back to the referrer, and missing
/// both, the public homepage. The template escapes whatever is echoed.
pub async fn feedback_thanks_handler(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Result<Html<String>, AppError> {
    let lang = request_language(&headers, &state.config.supported_languages);
    let return_to = query_param(query.as_deref(), "returnTo");

    let base = state.renderer.new_base_page_model();
    let mut page = mapper::create_feedback_thanks(
        base,
        uri.path(),
        &lang,
        &referer(&headers),
        &return_to,
        &state.config.site_domain,
    );
    attach_navigation(&state, &mut page, &lang).await;

    let body = state.renderer.build_page(&page, PageTemplate::FeedbackThanks)?;
    Ok(Html(body))
}

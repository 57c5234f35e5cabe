//! Handlers for displaying the feedback form and routing submissions.

use axum::{
    extract::{RawForm, RawQuery, State},
    http::{StatusCode, Uri, header},
    response::{Html, IntoResponse, Response},
};

use crate::clients::{FeedbackMessage, PageTemplate};
use crate::domain::form::{FeedbackForm, WHOLE_SITE};
use crate::domain::validation::{ValidationError, validate_form};
use crate::error::AppError;
use crate::handlers::{attach_navigation, query_param, referer, request_language};
use crate::mapper::{self, DEFAULT_HOMEPAGE};
use crate::state::AppState;

/// Renders the feedback form.
///
/// # Endpoint
///
/// `GET /feedback`
///
/// The `Referer` header seeds the "specific page" URL field and the back
/// link; an optional `service` query parameter injects an extra "this
/// service" radio option.
pub async fn get_feedback_handler(
    State(state): State<AppState>,
    uri: Uri,
    headers: axum::http::HeaderMap,
    RawQuery(query): RawQuery,
) -> Result<Html<String>, AppError> {
    let lang = request_language(&headers, &state.config.supported_languages);
    let service = query_param(query.as_deref(), "service");

    let form = FeedbackForm {
        url: referer(&headers),
        ..FeedbackForm::default()
    };

    render_feedback_page(&state, uri.path(), &service, Vec::new(), form, &lang).await
}

/// Handles a feedback submission end-to-end.
///
/// # Endpoint
///
/// `POST /feedback` (also wired to `POST /feedback/thanks`)
///
/// # Outcomes
///
/// - malformed query/body encoding: 400, nothing rendered or submitted
/// - undecodable fields: 500
/// - validation errors: form re-rendered inline with errors, 200
/// - feedback API failure: the API's status code, no redirect
/// - success: 301 to the homepage (whole-site feedback) or to the thanks
///   page carrying the submitted URL
///
/// No retries anywhere on this path; a failed submission is terminal for
/// the request.
pub async fn add_feedback_handler(
    State(state): State<AppState>,
    uri: Uri,
    headers: axum::http::HeaderMap,
    RawQuery(query): RawQuery,
    RawForm(body): RawForm,
) -> Result<Response, AppError> {
    let lang = request_language(&headers, &state.config.supported_languages);

    // Malformed encoding is a transport failure, never a field error.
    ensure_well_formed(query.as_deref().unwrap_or_default().as_bytes())?;
    ensure_well_formed(&body)?;

    let mut form: FeedbackForm =
        serde_urlencoded::from_bytes(&body).map_err(|e| AppError::FormDecode(e.to_string()))?;

    let errors = validate_form(&mut form, &state.config.site_domain);
    if !errors.is_empty() {
        let service = query_param(query.as_deref(), "service");
        let page =
            render_feedback_page(&state, uri.path(), &service, errors, form, &lang).await?;
        return Ok(page.into_response());
    }

    if form.url.is_empty() {
        form.url = WHOLE_SITE.to_string();
    }

    let message = FeedbackMessage {
        is_page_useful: false,
        is_general_feedback: form.url == WHOLE_SITE,
        ons_url: form.url.clone(),
        feedback: form.description.clone(),
        name: form.name.clone(),
        email_address: form.email.clone(),
    };
    state.backend.post_feedback(&message).await?;

    let target = if form.url == WHOLE_SITE {
        DEFAULT_HOMEPAGE.to_string()
    } else {
        let return_to = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("returnTo", &form.url)
            .finish();
        format!("/feedback/thanks?{return_to}")
    };

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, target)]).into_response())
}

/// Rejects urlencoded input with malformed percent-escapes or non-UTF-8
/// content, which the lenient decoders would otherwise silently repair.
fn ensure_well_formed(bytes: &[u8]) -> Result<(), AppError> {
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hex = |b: Option<&u8>| b.and_then(|b| (*b as char).to_digit(16));
                let (Some(hi), Some(lo)) = (hex(bytes.get(i + 1)), hex(bytes.get(i + 2))) else {
                    return Err(AppError::FormParse("invalid percent-escape".to_string()));
                };
                decoded.push((hi * 16 + lo) as u8);
                i += 3;
            }
            b'+' => {
                decoded.push(b' ');
                i += 1;
            }
            b => {
                decoded.push(b);
                i += 1;
            }
        }
    }

    if String::from_utf8(decoded).is_err() {
        return Err(AppError::FormParse("form data is not valid UTF-8".to_string()));
    }
    Ok(())
}

/// Builds and renders the feedback form page, shared by the GET handler and
/// the re-render-with-errors path of the POST handler.
async fn render_feedback_page(
    state: &AppState,
    path: &str,
    service: &str,
    errors: Vec<ValidationError>,
    form: FeedbackForm,
    lang: &str,
) -> Result<Html<String>, AppError> {
    let base = state.renderer.new_base_page_model();
    let mut page = mapper::create_get_feedback(base, path, service, errors, form, lang);
    attach_navigation(state, &mut page, lang).await;

    let body = state.renderer.build_page(&page, PageTemplate::Feedback)?;
    Ok(Html(body))
}

//! Maps request data onto the page models handed to the renderer.

use crate::domain::form::{FeedbackForm, WHOLE_SITE};
use crate::domain::site_url::{is_site_domain_url, normalise_url};
use crate::domain::validation::ValidationError;
use crate::model::{FeedbackPage, Page};

/// Public homepage used when no better redirect target is known.
pub const DEFAULT_HOMEPAGE: &str = "https://www.ons.gov.uk";

/// Maximum length of the metadata description; longer page URLs keep only
/// their tail, which is the most specific part.
const MAX_METADATA_DESCRIPTION: usize = 50;

/// Label for the extra "this service" radio option, keyed by the `service`
/// query parameter.
pub fn service_description(service: &str) -> Option<&'static str> {
    match service {
        "cmd" => Some("customising data by applying filters"),
        "dev" => Some("ONS developer"),
        "search" => Some("search"),
        _ => None,
    }
}

/// Builds the feedback form page model, with or without validation errors.
pub fn create_get_feedback(
    base: Page,
    path: &str,
    service: &str,
    errors: Vec<ValidationError>,
    form: FeedbackForm,
    lang: &str,
) -> FeedbackPage {
    let mut page = base;
    page.page_type = "feedback".to_string();
    page.language = lang.to_string();
    page.uri = path.to_string();
    page.title = "Feedback".to_string();
    page.description = tail(&form.url, MAX_METADATA_DESCRIPTION);

    FeedbackPage {
        page,
        previous_url: form.url.clone(),
        service_description: service_description(service).unwrap_or_default().to_string(),
        form,
        errors,
        ..FeedbackPage::default()
    }
}

/// Builds the thanks page model, sanitising the attacker-controlled
/// `returnTo` query parameter into a navigable target.
pub fn create_feedback_thanks(
    base: Page,
    path: &str,
    lang: &str,
    referrer: &str,
    return_to: &str,
    site_domain: &str,
) -> FeedbackPage {
    let mut page = base;
    page.page_type = "feedback".to_string();
    page.language = lang.to_string();
    page.uri = path.to_string();
    page.title = "Thank you".to_string();

    let referrer = if referrer.is_empty() {
        DEFAULT_HOMEPAGE
    } else {
        referrer
    };

    FeedbackPage {
        page,
        previous_url: referrer.to_string(),
        return_to: sanitise_return_to(return_to, referrer, site_domain),
        ..FeedbackPage::default()
    }
}

/// Resolves `returnTo` to a target that is safe to navigate to.
///
/// Only the whole-site token (resolved to the homepage) or a same-site URL
/// (normalised) are honored; anything else falls back to the referrer
/// captured at form-display time, never to the raw attacker string.
fn sanitise_return_to(return_to: &str, referrer: &str, site_domain: &str) -> String {
    if return_to == WHOLE_SITE {
        DEFAULT_HOMEPAGE.to_string()
    } else if return_to.is_empty() {
        referrer.to_string()
    } else if is_site_domain_url(return_to, site_domain) {
        normalise_url(return_to)
    } else {
        referrer.to_string()
    }
}

/// The last `max` characters of `s`.
fn tail(s: &str, max: usize) -> String {
    let count = s.chars().count();
    if count <= max {
        return s.to_string();
    }
    s.chars().skip(count - max).collect()
}

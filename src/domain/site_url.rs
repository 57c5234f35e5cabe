//! Same-site URL checks.
//!
//! Used in two places: validating the "specific page" URL field, and
//! sanitising the post-submission `returnTo` redirect target. The check is
//! suffix-based on a label boundary (`"." + domain`), not a substring
//! search, so `notons.gov.uk.evil.com` never passes for `ons.gov.uk`.

use url::Url;

/// Adds an `https://` scheme to scheme-less input (e.g. `host.name/path`).
///
/// Input that already carries an HTTP(S) scheme is returned unchanged, so
/// the transform is idempotent. Pure string manipulation; no validation of
/// well-formedness beyond the prefix check.
pub fn normalise_url(url_string: &str) -> String {
    if url_string.starts_with("http://") || url_string.starts_with("https://") {
        return url_string.to_string();
    }
    format!("https://{url_string}")
}

/// True when `url_string` names a URL whose host is `site_domain` or a
/// subdomain of it.
///
/// Fails closed: empty input, an unparseable URL, or an empty configured
/// domain is never treated as same-site. The input is normalised first, so
/// scheme-less values like `cy.ons.gov.uk/path` are accepted.
pub fn is_site_domain_url(url_string: &str, site_domain: &str) -> bool {
    if url_string.is_empty() || site_domain.is_empty() {
        return false;
    }

    let normalised = normalise_url(url_string);
    let Ok(parsed) = Url::parse(&normalised) else {
        return false;
    };
    let Some(host) = parsed.host_str() else {
        return false;
    };

    host == site_domain || host.ends_with(&format!(".{site_domain}"))
}

//! Core feedback domain: the in-flight form, same-site URL checks, and
//! field validation.
//!
//! - [`form`] - The submitted feedback form and its well-known field values
//! - [`site_url`] - URL normalisation and the same-site allow check
//! - [`validation`] - Ordered, cumulative form validation

pub mod form;
pub mod site_url;
pub mod validation;

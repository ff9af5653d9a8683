//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Returns the content hash for main.css.
///
/// The hash is computed at build time from the CSS file content.
///
/// Usage in templates: `{{ ""|css_hash }}`
#[askama::filter_fn]
pub fn css_hash(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(env!("CSS_HASH"))
}

/// Adds sizing parameters to an Unsplash photo URL.
///
/// Other URLs pass through unchanged.
///
/// Usage in templates: `{{ product.image|unsplash }}`
#[askama::filter_fn]
pub fn unsplash(url: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let url = url.to_string();
    if url.starts_with("https://images.unsplash.com/") && !url.contains('?') {
        Ok(format!("{url}?auto=format&fit=crop&w=800&q=80"))
    } else {
        Ok(url)
    }
}

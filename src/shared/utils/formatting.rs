use crate::shared::errors::{AppError, AppResult};

/// Rounds to a single decimal place with half-up semantics.
///
/// Idempotent: feeding the result back in returns the same value.
pub fn round_single_decimal(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    (value * 10.0).round() / 10.0
}

/// Formats a count with thousands separators, e.g. `1234567` -> `"1,234,567"`.
pub fn format_count(count: usize) -> String {
    let digits = count.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(ch);
    }
    formatted
}

/// Turns an anime name into a URL slug by replacing spaces with hyphens.
pub fn format_url(name: &str) -> String {
    name.replace(' ', "-")
}

/// Reverses [`format_url`]: hyphens back to spaces, then percent-decoding.
pub fn parse_url_slug(slug: &str) -> AppResult<String> {
    let spaced = slug.replace('-', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .map_err(|err| AppError::InvalidInput(format!("Invalid slug encoding: {}", err)))
}

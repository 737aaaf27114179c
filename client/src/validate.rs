//! Pre-submission link validation.

use lazy_regex::regex_is_match;

/// Rejection reasons for a candidate link. Surfaced to the user directly;
/// a rejected link never reaches the remote program.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("No link was provided")]
    EmptyInput,
    #[error("Only links hosted on giphy.com are supported")]
    UnsupportedSource,
}

/// Validates a candidate link, returning the trimmed link on acceptance.
///
/// Accepts `http`/`https`, any subdomain chain, the exact `giphy.com`
/// second-level domain, and an arbitrary path/query/fragment after it.
pub fn validate_link(raw: &str) -> Result<&str, ValidationError> {
    let link = raw.trim();

    if link.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    if !regex_is_match!(
        r"^https?://([A-Za-z0-9-]+\.)*giphy\.com(/[A-Za-z0-9\-._~:/?#\[\]@!$&'()*+,;=]*)?$",
        link
    ) {
        return Err(ValidationError::UnsupportedSource);
    }

    Ok(link)
}

//! Common validation utilities.

use validator::ValidationError;

lazy_static::lazy_static! {
    /// A slug is an absolute URL path: leading slash, no whitespace, no query or fragment.
    pub static ref SLUG_REGEX: regex::Regex = regex::Regex::new(r"^/[^\s?#]*$").unwrap();

    /// Loose phone format: optional leading plus, then digits, spaces, dashes or parentheses.
    pub static ref PHONE_REGEX: regex::Regex = regex::Regex::new(r"^\+?[0-9 ()\-]{7,20}$").unwrap();
}

/// Maximum slug length accepted on save.
pub const MAX_SLUG_LENGTH: usize = 200;

/// Validates a page slug.
///
/// Lookup is an exact string match, so the slug is stored as given; this only
/// rejects values that could never be navigated to.
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if slug.len() > MAX_SLUG_LENGTH {
        let mut err = ValidationError::new("slug_length");
        err.message = Some(format!("Slug must be at most {} characters", MAX_SLUG_LENGTH).into());
        return Err(err);
    }
    if SLUG_REGEX.is_match(slug) {
        Ok(())
    } else {
        let mut err = ValidationError::new("slug_format");
        err.message =
            Some("Slug must start with '/' and contain no whitespace, '?' or '#'".into());
        Err(err)
    }
}

/// Validates that a string has non-whitespace content.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Value must not be blank".into());
        Err(err)
    } else {
        Ok(())
    }
}

/// Validates a contact phone number.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_REGEX.is_match(phone.trim()) {
        Ok(())
    } else {
        let mut err = ValidationError::new("phone_format");
        err.message = Some("Phone number must contain 7-20 digits".into());
        Err(err)
    }
}

/// Validates an outbound relay endpoint: relays always go over HTTPS.
pub fn validate_https_url(url: &str) -> Result<(), ValidationError> {
    if url.starts_with("https://") && url.len() > "https://".len() {
        Ok(())
    } else {
        let mut err = ValidationError::new("https_required");
        err.message = Some("URL must use HTTPS protocol".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_slug_accepts_paths() {
        assert!(validate_slug("/").is_ok());
        assert!(validate_slug("/about").is_ok());
        assert!(validate_slug("/blog/tea-trends-2024").is_ok());
        assert!(validate_slug("/Promo").is_ok());
    }

    #[test]
    fn test_validate_slug_rejects_bad_paths() {
        assert!(validate_slug("").is_err());
        assert!(validate_slug("about").is_err());
        assert!(validate_slug("/about us").is_err());
        assert!(validate_slug("/about?x=1").is_err());
        assert!(validate_slug("/about#team").is_err());
    }

    #[test]
    fn test_validate_slug_length() {
        let long = format!("/{}", "a".repeat(MAX_SLUG_LENGTH));
        let err = validate_slug(&long).unwrap_err();
        assert_eq!(err.code, "slug_length");
    }

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Ramesh").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   ").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("9876543210").is_ok());
        assert!(validate_phone("+91 98765 43210").is_ok());
        assert!(validate_phone("(040) 555-1234").is_ok());
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("call me").is_err());
    }

    #[test]
    fn test_validate_https_url() {
        assert!(validate_https_url("https://formspree.io/f/xeejvlgq").is_ok());
        assert!(validate_https_url("http://formspree.io/f/xeejvlgq").is_err());
        assert!(validate_https_url("https://").is_err());
    }
}

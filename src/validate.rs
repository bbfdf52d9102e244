use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{ApiError, ApiResult};

pub fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

pub fn email(field: &'static str, value: &str) -> ApiResult<()> {
    if !is_valid_email(value) {
        return Err(ApiError::validation(field, "must be a valid email address"));
    }
    Ok(())
}

/// Non-empty string with an upper length bound (characters, not bytes).
pub fn text(field: &'static str, value: &str, max: usize) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(field, "must not be empty"));
    }
    if value.chars().count() > max {
        return Err(ApiError::validation(
            field,
            format!("must be at most {max} characters"),
        ));
    }
    Ok(())
}

pub fn rating(field: &'static str, value: i32) -> ApiResult<()> {
    if !(1..=5).contains(&value) {
        return Err(ApiError::validation(field, "must be between 1 and 5"));
    }
    Ok(())
}

/// Comments attach to either an article or a gallery project.
pub fn content_type(field: &'static str, value: &str) -> ApiResult<()> {
    if value != "article" && value != "project" {
        return Err(ApiError::validation(
            field,
            "must be \"article\" or \"project\"",
        ));
    }
    Ok(())
}

pub fn password(field: &'static str, value: &str) -> ApiResult<()> {
    if value.len() < 6 {
        return Err(ApiError::validation(field, "must be at least 6 characters"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_accepts_plain_addresses() {
        assert!(is_valid_email("user@example.com"));
        assert!(email("email", "user@example.com").is_ok());
    }

    #[test]
    fn email_rejects_garbage() {
        for bad in ["", "no-at-sign", "two@@example.com ", "a@b", "spa ce@x.com"] {
            assert!(email("email", bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        assert!(rating("rating", 0).is_err());
        assert!(rating("rating", 1).is_ok());
        assert!(rating("rating", 5).is_ok());
        assert!(rating("rating", 6).is_err());
    }

    #[test]
    fn content_type_is_a_closed_set() {
        assert!(content_type("content_type", "article").is_ok());
        assert!(content_type("content_type", "project").is_ok());
        assert!(content_type("content_type", "page").is_err());
        assert!(content_type("content_type", "Article").is_err());
    }

    #[test]
    fn text_enforces_presence_and_bound() {
        assert!(text("title", "hello", 255).is_ok());
        assert!(text("title", "   ", 255).is_err());
        assert!(text("title", &"x".repeat(256), 255).is_err());
        assert!(text("title", &"x".repeat(255), 255).is_ok());
    }

    #[test]
    fn validation_error_names_the_field() {
        let err = rating("rating", 9).unwrap_err();
        match err {
            ApiError::Validation { field, .. } => assert_eq!(field, "rating"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

//! Request and response shapes shared by every collection.

use serde::{Deserialize, Deserializer, Serialize};

/// Acknowledgement body for submit-style endpoints that have no entity to
/// return (contact form, newsletter).
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}

impl Pagination {
    /// Values sane enough to put straight into LIMIT/OFFSET.
    pub fn clamped(&self) -> (i64, i64) {
        (self.skip.max(0), self.limit.clamp(1, 500))
    }
}

/// Deserializer for PATCH fields on nullable columns, where "field not sent"
/// must stay distinct from "field sent as null":
///
/// - absent        -> `None`           (leave the column alone)
/// - `"x": null`   -> `Some(None)`     (null the column)
/// - `"x": value`  -> `Some(Some(v))`
///
/// Use with `#[serde(default, deserialize_with = "double_option")]`.
pub fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default)]
        title: Option<String>,
        #[serde(default, deserialize_with = "double_option")]
        color: Option<Option<String>>,
    }

    #[test]
    fn absent_field_stays_none() {
        let p: Patch = serde_json::from_str("{}").unwrap();
        assert!(p.title.is_none());
        assert!(p.color.is_none());
    }

    #[test]
    fn explicit_null_is_some_none() {
        let p: Patch = serde_json::from_str(r#"{"color": null}"#).unwrap();
        assert_eq!(p.color, Some(None));
    }

    #[test]
    fn explicit_value_is_some_some() {
        let p: Patch = serde_json::from_str(r##"{"color": "#fff", "title": "t"}"##).unwrap();
        assert_eq!(p.color, Some(Some("#fff".to_string())));
        assert_eq!(p.title.as_deref(), Some("t"));
    }

    #[test]
    fn pagination_defaults_and_clamping() {
        let p: Pagination = serde_json::from_str("{}").unwrap();
        assert_eq!(p.skip, 0);
        assert_eq!(p.limit, 100);

        let p: Pagination = serde_json::from_str(r#"{"skip": -3, "limit": 9999}"#).unwrap();
        assert_eq!(p.clamped(), (0, 500));
    }
}

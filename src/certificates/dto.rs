use serde::Deserialize;

use super::repo::Certificate;
use crate::{
    dto::double_option,
    error::{ApiError, ApiResult},
    validate,
};

#[derive(Debug, Deserialize)]
pub struct CertificateBody {
    pub title: String,
    pub issuer: String,
    pub date: Option<String>,
    pub description: Option<String>,
    #[serde(default = "default_icon")]
    pub icon: String,
    pub color: Option<String>,
    pub gradient: Option<String>,
    pub image: Option<String>,
    pub slider_id: Option<i64>,
    pub kind: Option<String>,
    pub kind_label: Option<String>,
}

fn default_icon() -> String {
    "📜".into()
}

impl CertificateBody {
    pub fn validate(&self) -> ApiResult<()> {
        validate::text("title", &self.title, 255)?;
        validate::text("issuer", &self.issuer, 255)?;
        if let Some(kind) = &self.kind {
            validate_kind(kind)?;
        }
        Ok(())
    }
}

/// Sparse update. Plain `Option` for the non-nullable columns, double
/// `Option` where "clear this field" is meaningful.
#[derive(Debug, Default, Deserialize)]
pub struct CertificatePatch {
    pub title: Option<String>,
    pub issuer: Option<String>,
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub date: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub color: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub gradient: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub image: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub slider_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub kind: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub kind_label: Option<Option<String>>,
}

impl CertificatePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.issuer.is_none()
            && self.icon.is_none()
            && self.date.is_none()
            && self.description.is_none()
            && self.color.is_none()
            && self.gradient.is_none()
            && self.image.is_none()
            && self.slider_id.is_none()
            && self.kind.is_none()
            && self.kind_label.is_none()
    }

    pub fn validate(&self) -> ApiResult<()> {
        if let Some(title) = &self.title {
            validate::text("title", title, 255)?;
        }
        if let Some(issuer) = &self.issuer {
            validate::text("issuer", issuer, 255)?;
        }
        if let Some(Some(kind)) = &self.kind {
            validate_kind(kind)?;
        }
        Ok(())
    }

    /// Mutates only the fields that were present in the request.
    pub fn apply(&self, row: &mut Certificate) {
        if let Some(v) = &self.title {
            row.title = v.clone();
        }
        if let Some(v) = &self.issuer {
            row.issuer = v.clone();
        }
        if let Some(v) = &self.icon {
            row.icon = v.clone();
        }
        if let Some(v) = &self.date {
            row.date = v.clone();
        }
        if let Some(v) = &self.description {
            row.description = v.clone();
        }
        if let Some(v) = &self.color {
            row.color = v.clone();
        }
        if let Some(v) = &self.gradient {
            row.gradient = v.clone();
        }
        if let Some(v) = &self.image {
            row.image = v.clone();
        }
        if let Some(v) = &self.slider_id {
            row.slider_id = *v;
        }
        if let Some(v) = &self.kind {
            row.kind = v.clone();
        }
        if let Some(v) = &self.kind_label {
            row.kind_label = v.clone();
        }
    }
}

fn validate_kind(kind: &str) -> ApiResult<()> {
    if kind != "standard" && kind != "certificate" {
        return Err(ApiError::validation(
            "kind",
            "must be \"standard\" or \"certificate\"",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    fn row() -> Certificate {
        Certificate {
            id: 1,
            title: "Rust Certification".into(),
            issuer: "Rust Foundation".into(),
            date: Some("2023".into()),
            description: None,
            icon: "📜".into(),
            color: Some("#b7410e".into()),
            gradient: None,
            image: None,
            slider_id: None,
            kind: Some("certificate".into()),
            kind_label: None,
            created_at: OffsetDateTime::UNIX_EPOCH,
            updated_at: None,
        }
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let patch: CertificatePatch = serde_json::from_str("{}").unwrap();
        let mut after = row();
        patch.apply(&mut after);
        let before = row();
        assert_eq!(after.title, before.title);
        assert_eq!(after.date, before.date);
        assert_eq!(after.color, before.color);
        assert_eq!(after.kind, before.kind);
    }

    #[test]
    fn null_clears_while_absent_preserves() {
        let patch: CertificatePatch =
            serde_json::from_str(r#"{"color": null, "title": "Renamed"}"#).unwrap();
        let mut after = row();
        patch.apply(&mut after);
        assert_eq!(after.color, None);
        assert_eq!(after.title, "Renamed");
        // date was not in the request and must keep its value
        assert_eq!(after.date.as_deref(), Some("2023"));
    }

    #[test]
    fn kind_is_a_closed_set() {
        let patch: CertificatePatch = serde_json::from_str(r#"{"kind": "diploma"}"#).unwrap();
        assert!(patch.validate().is_err());
        let patch: CertificatePatch = serde_json::from_str(r#"{"kind": "standard"}"#).unwrap();
        assert!(patch.validate().is_ok());
        // clearing the kind entirely is allowed
        let patch: CertificatePatch = serde_json::from_str(r#"{"kind": null}"#).unwrap();
        assert!(patch.validate().is_ok());
    }
}

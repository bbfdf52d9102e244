use serde::Deserialize;

use super::repo::Service;
use crate::{dto::double_option, error::ApiResult, validate};

#[derive(Debug, Deserialize)]
pub struct ServiceBody {
    pub title: String,
    pub description: Option<String>,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default = "default_color")]
    pub color: String,
    pub gradient: Option<String>,
    pub image: Option<String>,
    pub slider_id: Option<i64>,
    #[serde(default)]
    pub features: Vec<String>,
    pub price: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_icon() -> String {
    "🎯".into()
}

fn default_color() -> String {
    "#667eea".into()
}

fn default_active() -> bool {
    true
}

impl ServiceBody {
    pub fn validate(&self) -> ApiResult<()> {
        validate::text("title", &self.title, 255)?;
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ServicePatch {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub icon: Option<String>,
    pub color: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub gradient: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub image: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub slider_id: Option<Option<i64>>,
    pub features: Option<Vec<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub price: Option<Option<String>>,
    pub sort_order: Option<i32>,
    pub active: Option<bool>,
}

impl ServicePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.icon.is_none()
            && self.color.is_none()
            && self.gradient.is_none()
            && self.image.is_none()
            && self.slider_id.is_none()
            && self.features.is_none()
            && self.price.is_none()
            && self.sort_order.is_none()
            && self.active.is_none()
    }

    pub fn validate(&self) -> ApiResult<()> {
        if let Some(title) = &self.title {
            validate::text("title", title, 255)?;
        }
        Ok(())
    }

    pub fn apply(&self, row: &mut Service) {
        if let Some(v) = &self.title {
            row.title = v.clone();
        }
        if let Some(v) = &self.description {
            row.description = v.clone();
        }
        if let Some(v) = &self.icon {
            row.icon = v.clone();
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
        if let Some(v) = &self.features {
            row.features = v.clone();
        }
        if let Some(v) = &self.price {
            row.price = v.clone();
        }
        if let Some(v) = self.sort_order {
            row.sort_order = v;
        }
        if let Some(v) = self.active {
            row.active = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    fn row() -> Service {
        Service {
            id: 7,
            title: "Consulting".into(),
            description: Some("Architecture reviews".into()),
            icon: "🎯".into(),
            color: "#667eea".into(),
            gradient: None,
            image: None,
            slider_id: Some(3),
            features: vec!["reviews".into()],
            price: Some("on request".into()),
            sort_order: 2,
            active: true,
            created_at: OffsetDateTime::UNIX_EPOCH,
            updated_at: None,
        }
    }

    #[test]
    fn deactivate_without_touching_content() {
        let patch: ServicePatch = serde_json::from_str(r#"{"active": false}"#).unwrap();
        let mut r = row();
        patch.apply(&mut r);
        assert!(!r.active);
        assert_eq!(r.title, "Consulting");
        assert_eq!(r.slider_id, Some(3));
    }

    #[test]
    fn null_detaches_the_slider() {
        let patch: ServicePatch = serde_json::from_str(r#"{"slider_id": null}"#).unwrap();
        let mut r = row();
        patch.apply(&mut r);
        assert_eq!(r.slider_id, None);
    }

    #[test]
    fn create_body_fills_defaults() {
        let b: ServiceBody = serde_json::from_str(r#"{"title": "Design"}"#).unwrap();
        assert_eq!(b.icon, "🎯");
        assert_eq!(b.color, "#667eea");
        assert!(b.active);
        assert!(b.features.is_empty());
    }
}

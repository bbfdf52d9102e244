use serde::Deserialize;

use crate::{error::ApiResult, validate};

#[derive(Debug, Deserialize)]
pub struct GalleryItemBody {
    pub title: String,
    pub description: String,
    pub full_description: Option<String>,
    #[serde(default = "default_icon")]
    pub icon: String,
    pub gradient: Option<String>,
    pub image: Option<String>,
    pub slider_id: Option<i64>,
    pub category: String,
    pub category_color: Option<String>,
    pub date: Option<String>,
    pub duration: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub model_url: Option<String>,
    #[serde(default = "default_model_type")]
    pub model_type: String,
    pub iframe_url: Option<String>,
}

fn default_icon() -> String {
    "🎨".into()
}

fn default_model_type() -> String {
    "auto".into()
}

impl GalleryItemBody {
    pub fn validate(&self) -> ApiResult<()> {
        validate::text("title", &self.title, 255)?;
        validate::text("description", &self.description, 10_000)?;
        validate::text("category", &self.category, 100)?;
        Ok(())
    }
}

use serde::Deserialize;

use crate::{error::ApiResult, validate};

#[derive(Debug, Deserialize)]
pub struct VideoBody {
    pub title: String,
    pub description: Option<String>,
    pub video_url: String,
    pub thumbnail: Option<String>,
    pub duration: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub sort_order: i32,
}

fn default_active() -> bool {
    true
}

impl VideoBody {
    pub fn validate(&self) -> ApiResult<()> {
        validate::text("title", &self.title, 255)?;
        validate::text("video_url", &self.video_url, 500)?;
        Ok(())
    }
}

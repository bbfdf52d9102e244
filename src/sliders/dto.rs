use serde::Deserialize;

use crate::{error::ApiResult, validate};

#[derive(Debug, Deserialize)]
pub struct SliderBody {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl SliderBody {
    pub fn validate(&self) -> ApiResult<()> {
        validate::text("name", &self.name, 255)?;
        Ok(())
    }
}

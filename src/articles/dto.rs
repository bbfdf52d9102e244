use serde::Deserialize;

use crate::{error::ApiResult, validate};

/// Create and full-replace share this shape: every mutable field is required
/// except the cosmetic ones, which carry defaults.
#[derive(Debug, Deserialize)]
pub struct ArticleBody {
    pub title: String,
    pub excerpt: String,
    pub full_content: Option<String>,
    pub category: String,
    #[serde(default = "default_icon")]
    pub icon: String,
    pub gradient: Option<String>,
    pub image: Option<String>,
    pub slider_id: Option<i64>,
    pub author: String,
    pub author_avatar: Option<String>,
    pub author_role: Option<String>,
    pub read_time: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    pub iframe_url: Option<String>,
    pub model_url: Option<String>,
    #[serde(default = "default_model_type")]
    pub model_type: String,
}

fn default_icon() -> String {
    "📝".into()
}

fn default_model_type() -> String {
    "auto".into()
}

impl ArticleBody {
    pub fn validate(&self) -> ApiResult<()> {
        validate::text("title", &self.title, 255)?;
        validate::text("excerpt", &self.excerpt, 10_000)?;
        validate::text("category", &self.category, 100)?;
        validate::text("author", &self.author, 100)?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct ArticleListQuery {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    pub featured: Option<bool>,
}

fn default_limit() -> i64 {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body() -> ArticleBody {
        serde_json::from_str(
            r#"{
                "title": "Getting started",
                "excerpt": "A short intro",
                "category": "tutorials",
                "author": "Jane"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn defaults_fill_in_cosmetics() {
        let b = body();
        assert_eq!(b.icon, "📝");
        assert_eq!(b.model_type, "auto");
        assert!(!b.featured);
        assert!(b.tags.is_empty());
        assert!(b.validate().is_ok());
    }

    #[test]
    fn missing_required_field_fails_to_parse() {
        let err = serde_json::from_str::<ArticleBody>(r#"{"title": "only a title"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn empty_title_fails_validation() {
        let mut b = body();
        b.title = "  ".into();
        assert!(b.validate().is_err());
    }
}

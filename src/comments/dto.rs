use serde::Deserialize;

use super::repo::Comment;
use crate::{error::ApiResult, validate};

#[derive(Debug, Deserialize)]
pub struct CommentBody {
    pub name: String,
    pub email: String,
    pub content: String,
    pub rating: i32,
    pub content_type: String,
    pub content_id: i64,
}

impl CommentBody {
    pub fn validate(&self) -> ApiResult<()> {
        validate::text("name", &self.name, 100)?;
        validate::email("email", &self.email)?;
        validate::text("content", &self.content, 10_000)?;
        validate::rating("rating", self.rating)?;
        validate::content_type("content_type", &self.content_type)?;
        Ok(())
    }
}

/// Admin-side sparse edit. The content reference is immutable once posted;
/// only the submitted text, contact fields and moderation state move.
#[derive(Debug, Default, Deserialize)]
pub struct CommentPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub content: Option<String>,
    pub rating: Option<i32>,
    pub approved: Option<bool>,
}

impl CommentPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.content.is_none()
            && self.rating.is_none()
            && self.approved.is_none()
    }

    pub fn validate(&self) -> ApiResult<()> {
        if let Some(name) = &self.name {
            validate::text("name", name, 100)?;
        }
        if let Some(email) = &self.email {
            validate::email("email", email)?;
        }
        if let Some(content) = &self.content {
            validate::text("content", content, 10_000)?;
        }
        if let Some(rating) = self.rating {
            validate::rating("rating", rating)?;
        }
        Ok(())
    }

    pub fn apply(&self, row: &mut Comment) {
        if let Some(v) = &self.name {
            row.name = v.clone();
        }
        if let Some(v) = &self.email {
            row.email = v.clone();
        }
        if let Some(v) = &self.content {
            row.content = v.clone();
        }
        if let Some(v) = self.rating {
            row.rating = v;
        }
        if let Some(v) = self.approved {
            row.approved = v;
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CommentListQuery {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    pub content_type: Option<String>,
    pub content_id: Option<i64>,
}

fn default_limit() -> i64 {
    100
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    fn body(rating: i32, content_type: &str) -> CommentBody {
        CommentBody {
            name: "Sam".into(),
            email: "sam@example.com".into(),
            content: "Really helpful article.".into(),
            rating,
            content_type: content_type.into(),
            content_id: 42,
        }
    }

    #[test]
    fn boundary_ratings_on_create() {
        assert!(body(0, "article").validate().is_err());
        assert!(body(1, "article").validate().is_ok());
        assert!(body(5, "project").validate().is_ok());
        assert!(body(6, "project").validate().is_err());
    }

    #[test]
    fn content_type_outside_the_set_is_rejected() {
        assert!(body(3, "page").validate().is_err());
    }

    #[test]
    fn patch_rating_is_validated_too() {
        let patch = CommentPatch {
            rating: Some(6),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let patch: CommentPatch = serde_json::from_str("{}").unwrap();
        let mut row = Comment {
            id: 1,
            name: "Sam".into(),
            email: "sam@example.com".into(),
            content: "text".into(),
            rating: 4,
            approved: false,
            content_type: "article".into(),
            content_id: 42,
            created_at: OffsetDateTime::UNIX_EPOCH,
            updated_at: None,
        };
        patch.apply(&mut row);
        assert_eq!(row.rating, 4);
        assert!(!row.approved);
        assert_eq!(row.name, "Sam");
    }
}

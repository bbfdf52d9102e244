use serde::Deserialize;

use crate::{error::ApiResult, validate};

#[derive(Debug, Deserialize)]
pub struct TestimonialBody {
    pub name: String,
    pub role: String,
    pub avatar: Option<String>,
    pub text: String,
    #[serde(default = "default_rating")]
    pub rating: i32,
    pub date: Option<String>,
    pub project: Option<String>,
}

fn default_rating() -> i32 {
    5
}

impl TestimonialBody {
    pub fn validate(&self) -> ApiResult<()> {
        validate::text("name", &self.name, 100)?;
        validate::text("role", &self.role, 100)?;
        validate::text("text", &self.text, 10_000)?;
        validate::rating("rating", self.rating)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(rating: i32) -> TestimonialBody {
        TestimonialBody {
            name: "Ada".into(),
            role: "CTO".into(),
            avatar: None,
            text: "Great work, delivered on time.".into(),
            rating,
            date: None,
            project: None,
        }
    }

    #[test]
    fn rating_defaults_to_five() {
        let b: TestimonialBody =
            serde_json::from_str(r#"{"name": "A", "role": "B", "text": "C"}"#).unwrap();
        assert_eq!(b.rating, 5);
    }

    #[test]
    fn boundary_ratings() {
        assert!(body(0).validate().is_err());
        assert!(body(1).validate().is_ok());
        assert!(body(5).validate().is_ok());
        assert!(body(6).validate().is_err());
    }
}

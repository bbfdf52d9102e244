use serde::Deserialize;

use crate::{error::ApiResult, validate};

#[derive(Debug, Deserialize)]
pub struct ContactBody {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactBody {
    pub fn validate(&self) -> ApiResult<()> {
        validate::text("name", &self.name, 100)?;
        validate::email("email", &self.email)?;
        validate::text("subject", &self.subject, 255)?;
        validate::text("message", &self.message, 10_000)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_email_before_anything_else_mutates() {
        let body = ContactBody {
            name: "A".into(),
            email: "not-an-email".into(),
            subject: "Hi".into(),
            message: "Hello there".into(),
        };
        assert!(body.validate().is_err());
    }
}

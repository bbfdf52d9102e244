use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::repo::User;

/// Login body, form-encoded per the OAuth2 password convention: the
/// credential field is called `username` even though it carries the email.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

/// User as returned to admin clients; never includes the password hash.
#[derive(Debug, Serialize)]
pub struct UserOut {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub is_admin: bool,
    pub created_at: OffsetDateTime,
}

impl From<User> for UserOut {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            full_name: u.full_name,
            is_active: u.is_active,
            is_admin: u.is_admin,
            created_at: u.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

/// Full replace of an account. A new password is the one optional piece:
/// omitting it keeps the stored hash.
#[derive(Debug, Deserialize)]
pub struct ReplaceUser {
    pub email: String,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub is_admin: bool,
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_response_shape() {
        let body = serde_json::to_value(TokenResponse {
            access_token: "abc".into(),
            token_type: "bearer",
        })
        .unwrap();
        assert_eq!(body["access_token"], "abc");
        assert_eq!(body["token_type"], "bearer");
    }

    #[test]
    fn user_out_never_leaks_the_hash() {
        let user = User {
            id: Uuid::new_v4(),
            email: "user@example.com".into(),
            password_hash: "$argon2id$secret".into(),
            full_name: None,
            is_active: true,
            is_admin: false,
            created_at: OffsetDateTime::UNIX_EPOCH,
        };
        let json = serde_json::to_string(&UserOut::from(user)).unwrap();
        assert!(!json.contains("argon2"));
        assert!(!json.contains("password"));
    }

    #[test]
    fn login_form_uses_the_oauth2_username_field() {
        let form: LoginForm = serde_json::from_str(
            r#"{"username": "admin@example.com", "password": "admin123"}"#,
        )
        .unwrap();
        assert_eq!(form.username, "admin@example.com");
        assert_eq!(form.password, "admin123");
    }
}

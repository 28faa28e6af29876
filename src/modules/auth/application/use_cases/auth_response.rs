use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserRole};

#[derive(Debug, Clone, Serialize)]
pub struct AuthUserInfo {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
}

impl From<&User> for AuthUserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

/// Issued on successful registration or login.
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: AuthUserInfo,
}

impl AuthResponse {
    pub fn bearer(access_token: String, expires_in: i64, user: &User) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            expires_in,
            user: AuthUserInfo::from(user),
        }
    }
}

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::societies::Society;
use crate::domain::entities::users::{User, UserRole};
use crate::domain::models::LoginOutcome;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub role: UserRole,
    pub society_id: Option<String>,
    pub is_society_officer: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            email,
            first_name,
            last_name,
            phone,
            role,
            society_id,
            is_active,
            created_at,
            updated_at,
        } = user;

        Self {
            id,
            email,
            first_name,
            last_name,
            phone,
            is_society_officer: role.is_society_officer(),
            role,
            society_id,
            is_active,
            created_at,
            updated_at,
        }
    }
}

/// 계정 활성화 응답
#[derive(Debug, Clone, Serialize)]
pub struct ActivationResponse {
    pub user: UserResponse,
    pub message: String,
}

/// 로그인 응답
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub society: Option<Society>,
    pub message: String,
}

impl From<LoginOutcome> for LoginResponse {
    fn from(outcome: LoginOutcome) -> Self {
        Self {
            message: format!("{}님 환영합니다", outcome.user.full_name()),
            user: UserResponse::from(outcome.user),
            society: outcome.society,
        }
    }
}

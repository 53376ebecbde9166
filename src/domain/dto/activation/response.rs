use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::tokens::{ActivationToken, TokenState};
use crate::domain::entities::users::UserRole;

/// 활성화 페이지가 미리 보여줄 토큰 정보
///
/// 토큰 문자열 자체는 다시 내려보내지 않습니다.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationTokenResponse {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub society_id: String,
    pub expires_at: DateTime<Utc>,
    pub state: TokenState,
}

impl ActivationTokenResponse {
    pub fn new(token: ActivationToken, state: TokenState) -> Self {
        Self {
            email: token.email,
            first_name: token.first_name,
            last_name: token.last_name,
            role: token.role,
            society_id: token.society_id,
            expires_at: token.expires_at,
            state,
        }
    }
}

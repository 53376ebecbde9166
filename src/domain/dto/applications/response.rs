//! 신청서 관련 응답 DTO

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::societies::Society;
use crate::domain::entities::users::UserRole;
use crate::domain::models::ApprovalOutcome;

/// 승인 응답에 포함되는 활성화 토큰 정보
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedTokenResponse {
    pub token: String,
    pub email: String,
    pub role: UserRole,
    pub expires_at: DateTime<Utc>,
    pub activation_url: String,
}

/// 승인 응답
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalResponse {
    pub society: Society,
    pub activation_token: IssuedTokenResponse,
    pub message: String,
}

impl ApprovalResponse {
    pub fn new(outcome: ApprovalOutcome, activation_url: String) -> Self {
        let token = outcome.activation_token;
        Self {
            message: format!("{} 신청서가 승인되었습니다", outcome.society.name),
            society: outcome.society,
            activation_token: IssuedTokenResponse {
                token: token.token,
                email: token.email,
                role: token.role,
                expires_at: token.expires_at,
                activation_url,
            },
        }
    }
}

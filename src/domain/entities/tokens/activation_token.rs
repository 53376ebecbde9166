//! Activation Token Entity
//!
//! 승인된 조합의 대표자가 로그인 계정을 만들 때 사용하는 일회용 토큰입니다.
//!
//! # 토큰 수명
//!
//! ```text
//! issued(unused) ──activate──▶ used
//!        │
//!        └── now > expiresAt ──▶ expired
//! ```
//!
//! 만료는 저장되지 않고 확인 시점의 시각으로 계산됩니다.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::UserRole;
use crate::errors::AppError;

/// 확인 시점의 토큰 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenState {
    Unused,
    Used,
    Expired,
}

/// 토큰 수신자 신원 정보
#[derive(Debug, Clone, PartialEq)]
pub struct TokenRecipient {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationToken {
    pub id: String,
    pub application_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub role: UserRole,
    pub society_id: String,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub is_used: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_at: Option<DateTime<Utc>>,
}

impl ActivationToken {
    pub fn issue(
        id: String,
        application_id: &str,
        society_id: &str,
        recipient: TokenRecipient,
        token: String,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<Self, AppError> {
        let expires_at = now.checked_add_signed(ttl).ok_or_else(|| {
            AppError::InternalError(format!("Activation token expiry out of range (ttl {}h)", ttl.num_hours()))
        })?;

        Ok(Self {
            id,
            application_id: application_id.to_string(),
            email: recipient.email,
            first_name: recipient.first_name,
            last_name: recipient.last_name,
            phone: recipient.phone,
            role: recipient.role,
            society_id: society_id.to_string(),
            token,
            expires_at,
            is_used: false,
            created_at: now,
            used_at: None,
        })
    }

    /// 사용 여부를 만료보다 먼저 판정합니다.
    pub fn state_at(&self, now: DateTime<Utc>) -> TokenState {
        if self.is_used {
            TokenState::Used
        } else if now > self.expires_at {
            TokenState::Expired
        } else {
            TokenState::Unused
        }
    }

    /// 사용 가능한 토큰인지 확인합니다.
    pub fn ensure_redeemable(&self, now: DateTime<Utc>) -> Result<(), AppError> {
        match self.state_at(now) {
            TokenState::Unused => Ok(()),
            TokenState::Used => Err(AppError::ActivationTokenUsed),
            TokenState::Expired => Err(AppError::ActivationTokenExpired),
        }
    }

    /// 토큰을 사용 처리합니다.
    pub fn redeem(&mut self, now: DateTime<Utc>) -> Result<(), AppError> {
        self.ensure_redeemable(now)?;
        self.is_used = true;
        self.used_at = Some(now);
        Ok(())
    }
}

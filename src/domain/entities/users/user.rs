//! User Entity Implementation
//!
//! 플랫폼 관리자, 조합 임원, 조합원을 하나의 사용자 모델로 표현합니다.
//! 로그인 아이디는 이메일이며, 비밀번호 해시는 사용자 레코드와 분리된
//! 자격 증명 컬렉션에 저장됩니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::tokens::ActivationToken;

/// 사용자 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    CoopkonnectAdmin,
    SocietyPresident,
    SocietySecretary,
    SocietyTreasurer,
    SocietyMember,
    PendingMember,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::CoopkonnectAdmin => "coopkonnect_admin",
            UserRole::SocietyPresident => "society_president",
            UserRole::SocietySecretary => "society_secretary",
            UserRole::SocietyTreasurer => "society_treasurer",
            UserRole::SocietyMember => "society_member",
            UserRole::PendingMember => "pending_member",
        }
    }

    /// 신청서의 대표자 직책으로 임원 역할을 찾습니다.
    ///
    /// 앞뒤 공백과 대소문자를 무시하며, president/secretary/treasurer 외에는 `None`입니다.
    pub fn officer_for_position(position: &str) -> Option<Self> {
        match position.trim().to_lowercase().as_str() {
            "president" => Some(UserRole::SocietyPresident),
            "secretary" => Some(UserRole::SocietySecretary),
            "treasurer" => Some(UserRole::SocietyTreasurer),
            _ => None,
        }
    }

    /// 조합 임원(회장, 총무, 재무) 여부
    pub fn is_society_officer(&self) -> bool {
        matches!(
            self,
            UserRole::SocietyPresident | UserRole::SocietySecretary | UserRole::SocietyTreasurer
        )
    }
}

/// 사용자 엔티티
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    /// 로그인 아이디 겸 연락처
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub society_id: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// 활성화 토큰의 신원 정보로 활성 사용자를 만듭니다. 이메일은 선택한 로그인 아이디입니다.
    pub fn from_activation(
        id: String,
        token: &ActivationToken,
        username: &str,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email: username.to_string(),
            first_name: token.first_name.clone(),
            last_name: token.last_name.clone(),
            phone: token.phone.clone(),
            role: token.role,
            society_id: Some(token.society_id.clone()),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn belongs_to(&self, society_id: &str) -> bool {
        self.society_id.as_deref() == Some(society_id)
    }

    pub fn deactivate(&mut self, now: DateTime<Utc>) {
        self.is_active = false;
        self.updated_at = now;
    }
}

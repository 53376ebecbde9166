//! Member Invitation Entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::UserRole;

/// 초대 상태. 현재는 `Pending`만 생성됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Expired,
}

/// 조합 임원이 예비 조합원에게 보낸 초대
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberInvitation {
    pub id: String,
    pub society_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub invited_by: String,
    pub invited_date: DateTime<Utc>,
    pub status: InvitationStatus,
    pub invitation_code: String,
}

impl MemberInvitation {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

//! Email Notification Entity
//!
//! 실제 발송 없이 기록만 남기는 이메일 감사 로그 항목입니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailType {
    SocietyApproval,
    SocietyRejection,
    SocietySuspension,
    MemberInvitation,
    MemberApproval,
}

impl EmailType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmailType::SocietyApproval => "society_approval",
            EmailType::SocietyRejection => "society_rejection",
            EmailType::SocietySuspension => "society_suspension",
            EmailType::MemberInvitation => "member_invitation",
            EmailType::MemberApproval => "member_approval",
        }
    }
}

/// 발송 결과. 기록 전용 구현에서는 항상 `Sent`입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailStatus {
    Sent,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailNotification {
    pub id: String,
    pub to: String,
    pub subject: String,
    pub content: String,
    #[serde(rename = "type")]
    pub email_type: EmailType,
    pub sent_date: DateTime<Utc>,
    pub status: EmailStatus,
}

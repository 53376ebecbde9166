//! Society Application Entity
//!
//! 협동조합 등록 신청서와 심사 상태 머신입니다.
//! 신청서는 접수 시 `pending`으로 생성되고, 심사에서 정확히 한 번
//! `approved` 또는 `rejected`로 전이되며, 삭제되지 않습니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// 신청서 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
    /// 저장 형식에는 존재하지만 현재 어떤 연산도 이 상태로 전이시키지 않습니다.
    Suspended,
}

/// 관리자의 심사 결정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Suspended => "suspended",
        }
    }

    /// 심사 결정을 적용한 다음 상태를 계산합니다.
    ///
    /// 허용되는 전이는 `pending → approved`와 `pending → rejected`뿐이며,
    /// 나머지는 모두 [`AppError::ConflictError`]입니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let next = ApplicationStatus::Pending.review(ReviewDecision::Approve)?;
    /// assert_eq!(next, ApplicationStatus::Approved);
    /// assert!(next.review(ReviewDecision::Reject).is_err());
    /// ```
    pub fn review(self, decision: ReviewDecision) -> Result<Self, AppError> {
        match (self, decision) {
            (ApplicationStatus::Pending, ReviewDecision::Approve) => Ok(ApplicationStatus::Approved),
            (ApplicationStatus::Pending, ReviewDecision::Reject) => Ok(ApplicationStatus::Rejected),
            (
                current @ (ApplicationStatus::Approved
                | ApplicationStatus::Rejected
                | ApplicationStatus::Suspended),
                _,
            ) => Err(AppError::ConflictError(format!(
                "Application has already been reviewed (status: {})",
                current.as_str()
            ))),
        }
    }
}

/// 신청자가 제출하는 내용
///
/// 식별자, 상태, 접수일을 제외한 신청서 본문입니다.
/// 정책 값은 입력 그대로 문자열로 보관하고, 승인 시점에 숫자로 해석합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocietyApplicationForm {
    // 조합 정보
    pub society_name: String,
    pub description: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub established_year: String,

    // 대표자 정보
    pub rep_first_name: String,
    pub rep_last_name: String,
    pub rep_position: String,
    pub rep_email: String,
    pub rep_phone: String,

    // 은행 정보
    pub bank_name: String,
    pub account_number: String,
    pub account_name: String,

    // 대출 정책
    pub interest_rate: String,
    pub loan_term_months: String,
    pub minimum_membership_months: String,
    pub membership_fee: String,
}

/// 협동조합 등록 신청서
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocietyApplication {
    pub id: String,
    #[serde(flatten)]
    pub form: SocietyApplicationForm,
    pub status: ApplicationStatus,
    pub applied_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

impl SocietyApplication {
    /// 새 `pending` 신청서
    pub fn new(id: String, form: SocietyApplicationForm, applied_date: DateTime<Utc>) -> Self {
        Self {
            id,
            form,
            status: ApplicationStatus::Pending,
            applied_date,
            reviewed_date: None,
            reviewed_by: None,
            rejection_reason: None,
        }
    }

    /// 심사 결정을 기록합니다. 전이가 불가능하면 아무것도 바꾸지 않고 에러를 반환합니다.
    pub fn record_review(
        &mut self,
        decision: ReviewDecision,
        reviewer_id: &str,
        reviewed_at: DateTime<Utc>,
        rejection_reason: Option<String>,
    ) -> Result<(), AppError> {
        let next = self.status.review(decision)?;

        self.status = next;
        self.reviewed_date = Some(reviewed_at);
        self.reviewed_by = Some(reviewer_id.to_string());
        self.rejection_reason = match decision {
            ReviewDecision::Reject => rejection_reason,
            ReviewDecision::Approve => None,
        };
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::SocietyApplicationForm;

    /// 테스트용 최소 신청서 본문
    pub fn form(society_name: &str, rep_email: &str, rep_position: &str) -> SocietyApplicationForm {
        SocietyApplicationForm {
            society_name: society_name.to_string(),
            description: "Test cooperative".to_string(),
            address: "1 Test Street".to_string(),
            phone: "+234-800-000-0001".to_string(),
            email: "info@test.coop".to_string(),
            website: None,
            established_year: "2021".to_string(),
            rep_first_name: "Ada".to_string(),
            rep_last_name: "Obi".to_string(),
            rep_position: rep_position.to_string(),
            rep_email: rep_email.to_string(),
            rep_phone: "+234-800-000-0002".to_string(),
            bank_name: "first-bank".to_string(),
            account_number: "1234567890".to_string(),
            account_name: society_name.to_string(),
            interest_rate: "2.5".to_string(),
            loan_term_months: "12".to_string(),
            minimum_membership_months: "6".to_string(),
            membership_fee: "5000".to_string(),
        }
    }
}

//! 신청서 관련 요청 DTO

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::applications::SocietyApplicationForm;
use crate::utils::string_utils::deserialize_optional_string;

/// 협동조합 등록 신청 요청
///
/// 필드 단위 검증은 여기서 끝내고, 서비스는 검증된 본문만 받습니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitApplicationRequest {
    #[validate(length(min = 1, max = 200, message = "조합 이름을 입력해주세요"))]
    pub society_name: String,

    #[validate(length(min = 1, message = "조합 소개를 입력해주세요"))]
    pub description: String,

    #[validate(length(min = 1, message = "주소를 입력해주세요"))]
    pub address: String,

    #[validate(length(min = 1, message = "전화번호를 입력해주세요"))]
    pub phone: String,

    #[validate(email(message = "유효한 조합 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(url(message = "유효한 웹사이트 주소를 입력해주세요"))]
    pub website: Option<String>,

    #[validate(custom(function = "validate_established_year"))]
    pub established_year: String,

    #[validate(length(min = 1, message = "대표자 이름을 입력해주세요"))]
    pub rep_first_name: String,

    #[validate(length(min = 1, message = "대표자 성을 입력해주세요"))]
    pub rep_last_name: String,

    #[validate(length(min = 1, message = "대표자 직책을 입력해주세요"))]
    pub rep_position: String,

    #[validate(email(message = "유효한 대표자 이메일 주소를 입력해주세요"))]
    pub rep_email: String,

    #[validate(length(min = 1, message = "대표자 전화번호를 입력해주세요"))]
    pub rep_phone: String,

    #[validate(length(min = 1, message = "은행을 선택해주세요"))]
    pub bank_name: String,

    #[validate(length(min = 1, message = "계좌번호를 입력해주세요"))]
    pub account_number: String,

    #[validate(length(min = 1, message = "예금주를 입력해주세요"))]
    pub account_name: String,

    #[validate(length(min = 1, message = "이자율을 입력해주세요"))]
    pub interest_rate: String,

    #[validate(length(min = 1, message = "대출 기간을 입력해주세요"))]
    pub loan_term_months: String,

    #[validate(length(min = 1, message = "최소 가입 기간을 입력해주세요"))]
    pub minimum_membership_months: String,

    #[validate(length(min = 1, message = "가입비를 입력해주세요"))]
    pub membership_fee: String,
}

fn validate_established_year(year: &str) -> Result<(), ValidationError> {
    let trimmed = year.trim();
    if trimmed.len() != 4 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new("invalid_year")
            .with_message("설립 연도는 4자리 숫자여야 합니다".into()));
    }
    Ok(())
}

impl From<SubmitApplicationRequest> for SocietyApplicationForm {
    fn from(req: SubmitApplicationRequest) -> Self {
        Self {
            society_name: req.society_name.trim().to_string(),
            description: req.description,
            address: req.address,
            phone: req.phone,
            email: req.email.trim().to_string(),
            website: req.website,
            established_year: req.established_year.trim().to_string(),
            rep_first_name: req.rep_first_name.trim().to_string(),
            rep_last_name: req.rep_last_name.trim().to_string(),
            rep_position: req.rep_position,
            rep_email: req.rep_email.trim().to_string(),
            rep_phone: req.rep_phone,
            bank_name: req.bank_name,
            account_number: req.account_number,
            account_name: req.account_name,
            interest_rate: req.interest_rate,
            loan_term_months: req.loan_term_months,
            minimum_membership_months: req.minimum_membership_months,
            membership_fee: req.membership_fee,
        }
    }
}

/// 신청서 승인 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ApproveApplicationRequest {
    #[validate(length(min = 1, message = "심사자 ID가 필요합니다"))]
    pub reviewed_by: String,
}

/// 신청서 거절 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RejectApplicationRequest {
    #[validate(length(min = 1, message = "심사자 ID가 필요합니다"))]
    pub reviewed_by: String,

    #[validate(custom(function = "validate_reason"))]
    pub reason: String,
}

pub(crate) fn validate_reason(reason: &str) -> Result<(), ValidationError> {
    if reason.trim().is_empty() {
        return Err(ValidationError::new("missing_reason")
            .with_message("사유를 입력해주세요".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_body() -> serde_json::Value {
        json!({
            "societyName": "Test Coop",
            "description": "A test cooperative",
            "address": "1 Test Street",
            "phone": "+234-800-000-0001",
            "email": "info@test.coop",
            "website": "",
            "establishedYear": "2021",
            "repFirstName": "Ada",
            "repLastName": "Obi",
            "repPosition": "president",
            "repEmail": "ada@test.coop",
            "repPhone": "+234-800-000-0002",
            "bankName": "first-bank",
            "accountNumber": "1234567890",
            "accountName": "Test Coop",
            "interestRate": "2.5",
            "loanTermMonths": "12",
            "minimumMembershipMonths": "6",
            "membershipFee": "5000"
        })
    }

    #[test]
    fn test_valid_submission() {
        let req: SubmitApplicationRequest = serde_json::from_value(valid_body()).unwrap();

        assert!(req.validate().is_ok());
        assert_eq!(req.website, None);
    }

    #[test]
    fn test_invalid_submission_fields() {
        let mut body = valid_body();
        body["repEmail"] = json!("not-an-email");
        body["establishedYear"] = json!("20x1");
        body["societyName"] = json!("");
        let req: SubmitApplicationRequest = serde_json::from_value(body).unwrap();

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("rep_email"));
        assert!(fields.contains_key("established_year"));
        assert!(fields.contains_key("society_name"));
    }

    #[test]
    fn test_reject_requires_reason() {
        let req = RejectApplicationRequest {
            reviewed_by: "admin-1".into(),
            reason: "   ".into(),
        };

        assert!(req.validate().is_err());
    }
}

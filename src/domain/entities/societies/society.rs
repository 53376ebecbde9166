//! Society Entity
//!
//! 승인된 신청서로부터 정확히 한 번 생성되는 협동조합 레코드입니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::applications::SocietyApplication;
use crate::utils::string_utils::{parse_leading_float, parse_leading_int};

/// 조합 정산 계좌
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    pub bank_name: String,
    pub account_number: String,
    pub account_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing_number: Option<String>,
}

/// 협동조합
///
/// 대출 정책 값은 신청서 문자열을 관대하게 파싱한 결과이며,
/// 숫자로 읽을 수 없던 값은 `None`(JSON `null`)으로 남습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Society {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub bank_account: BankAccount,
    pub is_active: bool,
    pub interest_rate: Option<f64>,
    pub loan_term_months: Option<i64>,
    pub minimum_membership_months: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Society {
    /// 승인된 신청서로 활성 조합을 만듭니다.
    pub fn from_application(id: String, application: &SocietyApplication, now: DateTime<Utc>) -> Self {
        let form = &application.form;

        let interest_rate = parse_leading_float(&form.interest_rate);
        let loan_term_months = parse_leading_int(&form.loan_term_months);
        let minimum_membership_months = parse_leading_int(&form.minimum_membership_months);

        for (field, raw, parsed) in [
            ("interestRate", &form.interest_rate, interest_rate.is_some()),
            ("loanTermMonths", &form.loan_term_months, loan_term_months.is_some()),
            (
                "minimumMembershipMonths",
                &form.minimum_membership_months,
                minimum_membership_months.is_some(),
            ),
        ] {
            if !parsed {
                log::warn!(
                    "⚠️ 신청서 {}의 {} 값 '{}'을(를) 숫자로 해석할 수 없어 비워 둡니다",
                    application.id, field, raw
                );
            }
        }

        Self {
            id,
            name: form.society_name.clone(),
            description: form.description.clone(),
            logo: None,
            banner: None,
            address: form.address.clone(),
            phone: form.phone.clone(),
            email: form.email.clone(),
            bank_account: BankAccount {
                bank_name: form.bank_name.clone(),
                account_number: form.account_number.clone(),
                account_name: form.account_name.clone(),
                routing_number: None,
            },
            is_active: true,
            interest_rate,
            loan_term_months,
            minimum_membership_months,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn deactivate(&mut self, now: DateTime<Utc>) {
        self.is_active = false;
        self.updated_at = now;
    }
}

//! 서비스 연산의 입력/결과 모델

use serde::Serialize;

use crate::domain::entities::societies::Society;
use crate::domain::entities::tokens::ActivationToken;
use crate::domain::entities::users::{User, UserRole};

/// 승인 결과: 새로 만든 조합과 대표자용 활성화 토큰
#[derive(Debug, Clone, PartialEq)]
pub struct ApprovalOutcome {
    pub society: Society,
    pub activation_token: ActivationToken,
}

/// 상태별 신청서 수 (관리자 대시보드)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSummary {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    pub suspended: usize,
}

/// 로그인 확인 결과
#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    pub user: User,
    pub society: Option<Society>,
}

/// 초대할 예비 조합원 정보
#[derive(Debug, Clone, PartialEq)]
pub struct MemberInvite {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::dto::applications::request::validate_reason;
use crate::domain::entities::users::UserRole;
use crate::domain::models::MemberInvite;

/// 조합 정지 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SuspendSocietyRequest {
    #[validate(length(min = 1, message = "처리자 ID가 필요합니다"))]
    pub suspended_by: String,

    #[validate(custom(function = "validate_reason"))]
    pub reason: String,
}

/// 조합원 초대 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InviteMemberRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 50, message = "성은 1-50자 사이여야 합니다"))]
    pub last_name: String,

    #[serde(default = "default_invite_role")]
    #[validate(custom(function = "validate_invite_role"))]
    pub role: UserRole,

    #[validate(length(min = 1, message = "초대자 ID가 필요합니다"))]
    pub invited_by: String,
}

fn default_invite_role() -> UserRole {
    UserRole::SocietyMember
}

/// 초대로 줄 수 있는 역할은 일반 회원, 총무, 재무뿐입니다.
fn validate_invite_role(role: &UserRole) -> Result<(), ValidationError> {
    match role {
        UserRole::SocietyMember | UserRole::SocietySecretary | UserRole::SocietyTreasurer => Ok(()),
        _ => Err(ValidationError::new("invalid_invite_role")
            .with_message("초대할 수 없는 역할입니다".into())),
    }
}

impl InviteMemberRequest {
    /// 서비스 입력과 초대자 ID로 분리합니다.
    pub fn into_parts(self) -> (MemberInvite, String) {
        (
            MemberInvite {
                email: self.email.trim().to_string(),
                first_name: self.first_name.trim().to_string(),
                last_name: self.last_name.trim().to_string(),
                role: self.role,
            },
            self.invited_by,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invite_role_defaults_to_member() {
        let req: InviteMemberRequest = serde_json::from_str(
            r#"{"email":"m@x.com","firstName":"Mo","lastName":"Ade","invitedBy":"u-1"}"#,
        )
        .unwrap();

        assert!(req.validate().is_ok());
        assert_eq!(req.role, UserRole::SocietyMember);
    }

    #[test]
    fn test_invite_role_is_limited_to_member_roles() {
        let with_role = |role: &str| -> InviteMemberRequest {
            serde_json::from_value(serde_json::json!({
                "email": "m@x.com",
                "firstName": "Mo",
                "lastName": "Ade",
                "role": role,
                "invitedBy": "u-1"
            }))
            .unwrap()
        };

        assert!(with_role("society_secretary").validate().is_ok());
        assert!(with_role("society_treasurer").validate().is_ok());

        for role in ["coopkonnect_admin", "society_president", "pending_member"] {
            let errors = with_role(role).validate().unwrap_err();
            assert!(errors.field_errors().contains_key("role"), "{} should be rejected", role);
        }
    }

    #[test]
    fn test_suspend_requires_reason() {
        let req = SuspendSocietyRequest {
            suspended_by: "admin-1".into(),
            reason: "".into(),
        };

        assert!(req.validate().is_err());
    }
}

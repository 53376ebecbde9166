use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 계정 활성화 요청
///
/// 비밀번호 최소 길이와 확인 값 일치는 여기서 검사합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_passwords_match"))]
pub struct ActivateAccountRequest {
    #[validate(length(min = 1, message = "활성화 토큰이 필요합니다"))]
    pub token: String,

    #[validate(email(message = "로그인 아이디는 유효한 이메일 주소여야 합니다"))]
    pub username: String,

    #[validate(length(min = 6, message = "비밀번호는 최소 6자 이상이어야 합니다"))]
    pub password: String,

    pub confirm_password: String,
}

fn validate_passwords_match(req: &ActivateAccountRequest) -> Result<(), ValidationError> {
    if req.password != req.confirm_password {
        return Err(ValidationError::new("passwords_mismatch")
            .with_message("비밀번호가 일치하지 않습니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(password: &str, confirm: &str) -> ActivateAccountRequest {
        ActivateAccountRequest {
            token: "tok".into(),
            username: "test@x.com".into(),
            password: password.into(),
            confirm_password: confirm.into(),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request("abcdef", "abcdef").validate().is_ok());
    }

    #[test]
    fn test_short_password_rejected() {
        let errors = request("abc", "abc").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_mismatched_confirmation_rejected() {
        assert!(request("abcdef", "abcdeg").validate().is_err());
    }
}

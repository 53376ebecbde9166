//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 협동조합 온보딩 워크플로우를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 서비스 계층에서 발생한
//! 에러를 그대로 HTTP 응답으로 변환합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn approve(id: &str) -> Result<Society, AppError> {
//!     let application = repo.find_by_id(id).await?
//!         .ok_or_else(|| AppError::NotFound("Application not found".to_string()))?;
//!     // ...
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 워크플로우에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 활성화 토큰 관련 에러는 클라이언트가 구분해서 처리할 수 있도록 별도 variant로 둡니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 키-값 저장소 읽기/쓰기 또는 JSON 변환 실패 (500)
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 또는 허용되지 않는 상태 전이 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 로그인 실패 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 존재하지 않는 활성화 토큰 (404)
    #[error("Invalid activation token")]
    InvalidActivationToken,

    /// 이미 사용된 활성화 토큰 (409)
    #[error("Activation token has already been used")]
    ActivationTokenUsed,

    /// 만료된 활성화 토큰 (410 Gone)
    #[error("Activation token has expired")]
    ActivationTokenExpired,

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러에 대응하는 HTTP 상태 코드
    pub fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) | AppError::InvalidActivationToken => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) | AppError::ActivationTokenUsed => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::ActivationTokenExpired => StatusCode::GONE,
            AppError::StorageError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        AppError::status_code(self)
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 `{"error": ...}` JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(AppError::status_code(self))
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 저장소 에러로 변환합니다.
    fn storage_context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn storage_context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| {
            log::error!("❌ {}: {}", msg, e);
            AppError::StorageError(format!("{}: {}", msg, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("Email is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("Application not found".to_string());

        assert_eq!(error.error_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_activation_token_error_responses() {
        assert_eq!(
            AppError::InvalidActivationToken.error_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::ActivationTokenUsed.error_response().status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::ActivationTokenExpired.error_response().status(),
            StatusCode::GONE
        );
    }

    #[test]
    fn test_activation_token_error_messages() {
        assert_eq!(AppError::InvalidActivationToken.to_string(), "Invalid activation token");
        assert_eq!(
            AppError::ActivationTokenUsed.to_string(),
            "Activation token has already been used"
        );
        assert_eq!(AppError::ActivationTokenExpired.to_string(), "Activation token has expired");
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("Invalid password".to_string());

        assert_eq!(error.error_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_storage_error_response() {
        let error = AppError::StorageError("disk full".to_string());

        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_storage_context_trait() {
        let result: Result<(), &str> = Err("broken pipe");

        match result.storage_context("저장소 쓰기 실패") {
            Err(AppError::StorageError(msg)) => assert!(msg.contains("broken pipe")),
            other => panic!("Expected StorageError, got {:?}", other),
        }
    }
}

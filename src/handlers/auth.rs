//! 로그인 HTTP 핸들러
//!
//! 이메일과 비밀번호만 확인합니다. 세션이나 토큰은 발급하지 않으며,
//! 응답에는 사용자 정보와 소속 조합이 담깁니다.

use actix_web::{HttpResponse, post, web};
use validator::Validate;

use crate::core::context::AppContext;
use crate::domain::dto::users::{LoginRequest, LoginResponse};
use crate::errors::AppError;

/// # Endpoint
/// `POST /api/v1/auth/login`
#[post("/login")]
pub async fn login(
    ctx: web::Data<AppContext>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    log::info!("로그인 시도 - 사용자: {}", payload.email);

    let outcome = ctx
        .user_service
        .authenticate(payload.email.trim(), &payload.password)
        .await?;

    Ok(HttpResponse::Ok().json(LoginResponse::from(outcome)))
}

//! 계정 활성화 HTTP 핸들러

use actix_web::{HttpResponse, get, post, web};
use validator::Validate;

use crate::core::context::AppContext;
use crate::domain::dto::activation::{ActivateAccountRequest, ActivationTokenResponse};
use crate::domain::dto::users::{ActivationResponse, UserResponse};
use crate::errors::AppError;

/// 활성화 페이지 진입 시 토큰 상태 확인
#[get("/{token}")]
pub async fn get_activation_token(
    ctx: web::Data<AppContext>,
    token: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let (activation, state) = ctx.activation_service.get_activation_token(&token).await?;
    Ok(HttpResponse::Ok().json(ActivationTokenResponse::new(activation, state)))
}

#[post("")]
pub async fn activate_account(
    ctx: web::Data<AppContext>,
    payload: web::Json<ActivateAccountRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let user = ctx
        .activation_service
        .activate_account(&payload.token, &payload.username, &payload.password)
        .await?;

    Ok(HttpResponse::Created().json(ActivationResponse {
        user: UserResponse::from(user),
        message: "계정이 활성화되었습니다. 이제 로그인할 수 있습니다".to_string(),
    }))
}

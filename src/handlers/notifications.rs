//! 발송된 이메일 기록 조회 핸들러

use actix_web::{HttpResponse, get, web};

use crate::core::context::AppContext;
use crate::errors::AppError;

#[get("")]
pub async fn list_notifications(ctx: web::Data<AppContext>) -> Result<HttpResponse, AppError> {
    let notifications = ctx.email_service.list_notifications().await?;
    Ok(HttpResponse::Ok().json(notifications))
}

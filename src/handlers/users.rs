//! 사용자 조회 HTTP 핸들러

use actix_web::{HttpResponse, get, web};

use crate::core::context::AppContext;
use crate::domain::dto::users::{UserListQuery, UserResponse};
use crate::errors::AppError;

#[get("")]
pub async fn list_users(
    ctx: web::Data<AppContext>,
    query: web::Query<UserListQuery>,
) -> Result<HttpResponse, AppError> {
    let users: Vec<UserResponse> = ctx
        .user_service
        .list_users(query.society_id.as_deref())
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(users))
}

#[get("/{email}")]
pub async fn get_user_by_email(
    ctx: web::Data<AppContext>,
    email: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = ctx.user_service.get_user_by_email(&email).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

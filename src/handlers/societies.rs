//! 협동조합 HTTP 핸들러 (조회, 정지, 소속 사용자, 초대)

use actix_web::{HttpResponse, get, post, web};
use validator::Validate;

use crate::core::context::AppContext;
use crate::domain::dto::societies::{InviteMemberRequest, SuspendSocietyRequest};
use crate::domain::dto::users::UserResponse;
use crate::errors::AppError;

#[get("")]
pub async fn list_societies(ctx: web::Data<AppContext>) -> Result<HttpResponse, AppError> {
    let societies = ctx.society_service.list_societies().await?;
    Ok(HttpResponse::Ok().json(societies))
}

#[get("/{society_id}")]
pub async fn get_society(
    ctx: web::Data<AppContext>,
    society_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let society = ctx.society_service.get_society(&society_id).await?;
    Ok(HttpResponse::Ok().json(society))
}

#[post("/{society_id}/suspend")]
pub async fn suspend_society(
    ctx: web::Data<AppContext>,
    society_id: web::Path<String>,
    payload: web::Json<SuspendSocietyRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let society = ctx
        .society_service
        .suspend_society(&society_id, payload.suspended_by.trim(), payload.reason.trim())
        .await?;

    Ok(HttpResponse::Ok().json(society))
}

#[get("/{society_id}/users")]
pub async fn list_society_users(
    ctx: web::Data<AppContext>,
    society_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let users: Vec<UserResponse> = ctx
        .user_service
        .list_users(Some(&society_id))
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(users))
}

#[post("/{society_id}/invitations")]
pub async fn invite_member(
    ctx: web::Data<AppContext>,
    society_id: web::Path<String>,
    payload: web::Json<InviteMemberRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let (invite, invited_by) = payload.into_inner().into_parts();
    let invitation = ctx
        .invitation_service
        .invite_member(&society_id, invite, &invited_by)
        .await?;

    Ok(HttpResponse::Created().json(invitation))
}

#[get("/{society_id}/invitations")]
pub async fn list_society_invitations(
    ctx: web::Data<AppContext>,
    society_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let invitations = ctx.invitation_service.list_invitations(Some(&society_id)).await?;
    Ok(HttpResponse::Ok().json(invitations))
}

//! 전체 초대 목록 조회 핸들러

use actix_web::{HttpResponse, get, web};
use serde::Deserialize;

use crate::core::context::AppContext;
use crate::errors::AppError;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationListQuery {
    pub society_id: Option<String>,
}

#[get("")]
pub async fn list_invitations(
    ctx: web::Data<AppContext>,
    query: web::Query<InvitationListQuery>,
) -> Result<HttpResponse, AppError> {
    let invitations = ctx
        .invitation_service
        .list_invitations(query.society_id.as_deref())
        .await?;
    Ok(HttpResponse::Ok().json(invitations))
}

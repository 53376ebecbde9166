//! 신청서 HTTP 핸들러

use actix_web::{HttpResponse, get, post, web};
use validator::Validate;

use crate::config::ActivationConfig;
use crate::core::context::AppContext;
use crate::domain::dto::applications::{
    ApprovalResponse, ApproveApplicationRequest, RejectApplicationRequest, SubmitApplicationRequest,
};
use crate::errors::AppError;

#[post("")]
pub async fn submit_application(
    ctx: web::Data<AppContext>,
    payload: web::Json<SubmitApplicationRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let application = ctx
        .application_service
        .submit_application(payload.into_inner().into())
        .await?;

    Ok(HttpResponse::Created().json(application))
}

#[get("")]
pub async fn list_applications(ctx: web::Data<AppContext>) -> Result<HttpResponse, AppError> {
    let applications = ctx.application_service.list_applications().await?;
    Ok(HttpResponse::Ok().json(applications))
}

#[get("/summary")]
pub async fn application_summary(ctx: web::Data<AppContext>) -> Result<HttpResponse, AppError> {
    let summary = ctx.application_service.application_summary().await?;
    Ok(HttpResponse::Ok().json(summary))
}

#[get("/{application_id}")]
pub async fn get_application(
    ctx: web::Data<AppContext>,
    application_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let application = ctx.application_service.get_application(&application_id).await?;
    Ok(HttpResponse::Ok().json(application))
}

#[post("/{application_id}/approve")]
pub async fn approve_application(
    ctx: web::Data<AppContext>,
    application_id: web::Path<String>,
    payload: web::Json<ApproveApplicationRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let outcome = ctx
        .application_service
        .approve_application(&application_id, payload.reviewed_by.trim())
        .await?;
    let activation_url = ActivationConfig::activation_url(&outcome.activation_token.token);

    Ok(HttpResponse::Ok().json(ApprovalResponse::new(outcome, activation_url)))
}

#[post("/{application_id}/reject")]
pub async fn reject_application(
    ctx: web::Data<AppContext>,
    application_id: web::Path<String>,
    payload: web::Json<RejectApplicationRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let application = ctx
        .application_service
        .reject_application(&application_id, payload.reviewed_by.trim(), payload.reason.trim())
        .await?;

    Ok(HttpResponse::Ok().json(application))
}

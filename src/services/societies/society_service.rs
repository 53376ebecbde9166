//! 협동조합 조회 및 정지 서비스

use std::sync::Arc;

use crate::core::clock::Clock;
use crate::domain::entities::societies::Society;
use crate::domain::models::EmailPayload;
use crate::errors::{AppError, AppResult};
use crate::repositories::societies::SocietyRepository;
use crate::repositories::users::UserRepository;
use crate::services::notifications::EmailService;

pub struct SocietyService {
    society_repo: Arc<SocietyRepository>,
    user_repo: Arc<UserRepository>,
    email_service: Arc<EmailService>,
    clock: Arc<dyn Clock>,
}

impl SocietyService {
    pub fn new(
        society_repo: Arc<SocietyRepository>,
        user_repo: Arc<UserRepository>,
        email_service: Arc<EmailService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            society_repo,
            user_repo,
            email_service,
            clock,
        }
    }

    pub async fn list_societies(&self) -> AppResult<Vec<Society>> {
        self.society_repo.find_all().await
    }

    pub async fn get_society(&self, id: &str) -> AppResult<Society> {
        self.society_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Society not found".to_string()))
    }

    /// 조합을 정지하고 소속 사용자 전원을 비활성화합니다.
    ///
    /// 첫 번째로 찾은 임원에게 정지 메일을 기록하며, 임원이 없으면 메일 없이 끝냅니다.
    /// 정지 해제 연산은 없습니다.
    pub async fn suspend_society(&self, society_id: &str, suspended_by: &str, reason: &str) -> AppResult<Society> {
        let now = self.clock.now();
        let mut society = self.get_society(society_id).await?;

        society.deactivate(now);
        self.society_repo.update(&society).await?;

        let deactivated = self.user_repo.deactivate_by_society(society_id, now).await?;

        log::info!(
            "⛔ 조합 정지: {} ({}) by {}, 비활성화된 사용자 {}명",
            society.name,
            society.id,
            suspended_by,
            deactivated.len()
        );

        match deactivated.iter().find(|u| u.role.is_society_officer()) {
            Some(officer) => {
                self.email_service
                    .send_email(EmailPayload::society_suspended(&officer.email, &society.name, reason))
                    .await?;
            }
            None => log::warn!("⚠️ 조합 {}에 임원이 없어 정지 메일을 생략합니다", society.id),
        }

        Ok(society)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::test_support::{approve_and_activate, test_context};
    use crate::domain::entities::notifications::EmailType;

    #[actix_web::test]
    async fn test_suspension_cascades_to_society_users_only() {
        let (ctx, _) = test_context();
        let (target, _) = approve_and_activate(&ctx, "Target Coop", "t@x.com", "president").await;
        let (other, _) = approve_and_activate(&ctx, "Other Coop", "o@x.com", "treasurer").await;

        let suspended = ctx
            .society_service
            .suspend_society(&target.id, "admin-1", "Compliance review")
            .await
            .unwrap();

        assert!(!suspended.is_active);
        assert!(!ctx.society_service.get_society(&target.id).await.unwrap().is_active);
        assert!(ctx.society_service.get_society(&other.id).await.unwrap().is_active);

        let target_user = ctx.user_service.get_user_by_email("t@x.com").await.unwrap();
        let other_user = ctx.user_service.get_user_by_email("o@x.com").await.unwrap();
        assert!(!target_user.is_active);
        assert!(other_user.is_active);

        let notifications = ctx.email_service.list_notifications().await.unwrap();
        let suspension = notifications
            .iter()
            .find(|n| n.email_type == EmailType::SocietySuspension)
            .unwrap();
        assert_eq!(suspension.to, "t@x.com");
        assert!(suspension.content.contains("Compliance review"));
    }

    #[actix_web::test]
    async fn test_suspension_without_officer_sends_no_mail() {
        let (ctx, _) = test_context();
        let app = ctx
            .application_service
            .submit_application(crate::domain::entities::applications::society_application::fixtures::form(
                "Quiet Coop", "q@x.com", "president",
            ))
            .await
            .unwrap();
        let outcome = ctx.application_service.approve_application(&app.id, "admin-1").await.unwrap();
        let before = ctx.email_service.list_notifications().await.unwrap().len();

        ctx.society_service
            .suspend_society(&outcome.society.id, "admin-1", "Inactive")
            .await
            .unwrap();

        assert_eq!(ctx.email_service.list_notifications().await.unwrap().len(), before);
    }

    #[actix_web::test]
    async fn test_suspend_unknown_society() {
        let (ctx, _) = test_context();

        let result = ctx.society_service.suspend_society("nope", "admin-1", "x").await;

        assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Society not found"));
    }
}

//! 협동조합 신청서 접수 및 심사 서비스
//!
//! 신청서의 생명주기 전체를 담당합니다.
//!
//! # Features
//!
//! - **접수**: `pending` 상태로 저장하고 관리자에게 알림 메일 기록
//! - **승인**: 조합 생성, 대표자 활성화 토큰 발급, 승인 메일 기록
//! - **거절**: 사유 저장 및 거절 메일 기록
//! - **요약**: 상태별 신청서 수 집계
//!
//! 심사는 `pending` 신청서에만 가능하며, 그 외 상태에서는 아무것도 바꾸지 않고
//! `ConflictError`를 반환합니다.

use std::sync::Arc;

use uuid::Uuid;

use crate::config::{ActivationConfig, PlatformConfig};
use crate::core::clock::Clock;
use crate::domain::entities::applications::{
    ApplicationStatus, ReviewDecision, SocietyApplication, SocietyApplicationForm,
};
use crate::domain::entities::societies::Society;
use crate::domain::entities::users::UserRole;
use crate::domain::models::{ApplicationSummary, ApprovalOutcome, EmailPayload};
use crate::errors::{AppError, AppResult};
use crate::repositories::applications::ApplicationRepository;
use crate::repositories::societies::SocietyRepository;
use crate::services::activation::ActivationService;
use crate::services::notifications::EmailService;

pub struct ApplicationService {
    application_repo: Arc<ApplicationRepository>,
    society_repo: Arc<SocietyRepository>,
    activation_service: Arc<ActivationService>,
    email_service: Arc<EmailService>,
    clock: Arc<dyn Clock>,
}

impl ApplicationService {
    pub fn new(
        application_repo: Arc<ApplicationRepository>,
        society_repo: Arc<SocietyRepository>,
        activation_service: Arc<ActivationService>,
        email_service: Arc<EmailService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            application_repo,
            society_repo,
            activation_service,
            email_service,
            clock,
        }
    }

    /// 신청서를 접수합니다. 중복 신청도 그대로 받습니다.
    pub async fn submit_application(&self, form: SocietyApplicationForm) -> AppResult<SocietyApplication> {
        let application = SocietyApplication::new(Uuid::new_v4().to_string(), form, self.clock.now());
        let application = self.application_repo.insert(application).await?;

        log::info!(
            "✅ 신청서 접수: {} ({})",
            application.form.society_name,
            application.id
        );

        self.email_service
            .send_email(EmailPayload::new_application_notice(
                &PlatformConfig::admin_email(),
                &application,
            ))
            .await?;

        Ok(application)
    }

    pub async fn list_applications(&self) -> AppResult<Vec<SocietyApplication>> {
        self.application_repo.find_all().await
    }

    pub async fn get_application(&self, id: &str) -> AppResult<SocietyApplication> {
        self.application_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Application not found".to_string()))
    }

    pub async fn application_summary(&self) -> AppResult<ApplicationSummary> {
        let applications = self.application_repo.find_all().await?;
        let mut summary = ApplicationSummary {
            total: applications.len(),
            ..Default::default()
        };

        for application in &applications {
            match application.status {
                ApplicationStatus::Pending => summary.pending += 1,
                ApplicationStatus::Approved => summary.approved += 1,
                ApplicationStatus::Rejected => summary.rejected += 1,
                ApplicationStatus::Suspended => summary.suspended += 1,
            }
        }

        Ok(summary)
    }

    /// 신청서를 승인하고 조합과 활성화 토큰을 만듭니다.
    pub async fn approve_application(&self, application_id: &str, approved_by: &str) -> AppResult<ApprovalOutcome> {
        let now = self.clock.now();
        let mut application = self.get_application(application_id).await?;

        application.record_review(ReviewDecision::Approve, approved_by, now, None)?;

        let society = Society::from_application(Uuid::new_v4().to_string(), &application, now);

        let role = UserRole::officer_for_position(&application.form.rep_position).unwrap_or_else(|| {
            log::warn!(
                "⚠️ 알 수 없는 대표자 직책 '{}' (신청서 {}), 회장 역할로 처리합니다",
                application.form.rep_position,
                application.id
            );
            UserRole::SocietyPresident
        });

        // 토큰까지 만들어진 뒤에만 저장합니다
        let activation_token = self
            .activation_service
            .prepare_token(&application, role, &society.id)?;

        self.application_repo.update(&application).await?;
        let society = self.society_repo.insert(society).await?;
        let activation_token = self.activation_service.issue_token(activation_token).await?;

        let activation_url = ActivationConfig::activation_url(&activation_token.token);
        self.email_service
            .send_email(EmailPayload::society_approved(
                &application,
                &activation_url,
                ActivationConfig::token_ttl_hours(),
            ))
            .await?;

        log::info!(
            "✅ 신청서 승인: {} → society {} (by {})",
            application.id,
            society.id,
            approved_by
        );

        Ok(ApprovalOutcome {
            society,
            activation_token,
        })
    }

    /// 신청서를 거절합니다. 조합이나 토큰은 만들지 않습니다.
    pub async fn reject_application(
        &self,
        application_id: &str,
        rejected_by: &str,
        reason: &str,
    ) -> AppResult<SocietyApplication> {
        let mut application = self.get_application(application_id).await?;

        application.record_review(
            ReviewDecision::Reject,
            rejected_by,
            self.clock.now(),
            Some(reason.to_string()),
        )?;
        self.application_repo.update(&application).await?;

        self.email_service
            .send_email(EmailPayload::society_rejected(&application, reason))
            .await?;

        log::info!("🚫 신청서 거절: {} (by {})", application.id, rejected_by);

        Ok(application)
    }
}

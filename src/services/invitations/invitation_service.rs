//! 조합원 초대 서비스
//!
//! 초대 기록과 초대 메일만 남깁니다. 초대 수락 흐름은 아직 없습니다.

use std::sync::Arc;

use uuid::Uuid;

use crate::config::ActivationConfig;
use crate::core::clock::Clock;
use crate::domain::entities::invitations::{InvitationStatus, MemberInvitation};
use crate::domain::models::{EmailPayload, MemberInvite};
use crate::errors::AppResult;
use crate::repositories::invitations::InvitationRepository;
use crate::repositories::societies::SocietyRepository;
use crate::repositories::users::UserRepository;
use crate::services::notifications::EmailService;
use crate::utils::secure_token::generate_invitation_code;

pub struct InvitationService {
    invitation_repo: Arc<InvitationRepository>,
    society_repo: Arc<SocietyRepository>,
    user_repo: Arc<UserRepository>,
    email_service: Arc<EmailService>,
    clock: Arc<dyn Clock>,
}

impl InvitationService {
    pub fn new(
        invitation_repo: Arc<InvitationRepository>,
        society_repo: Arc<SocietyRepository>,
        user_repo: Arc<UserRepository>,
        email_service: Arc<EmailService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            invitation_repo,
            society_repo,
            user_repo,
            email_service,
            clock,
        }
    }

    /// `pending` 초대를 기록하고 초대 메일을 남깁니다.
    ///
    /// 조합이나 초대자를 찾지 못해도 실패하지 않고 대체 문구로 메일을 만듭니다.
    pub async fn invite_member(
        &self,
        society_id: &str,
        invite: MemberInvite,
        invited_by: &str,
    ) -> AppResult<MemberInvitation> {
        let invitation = MemberInvitation {
            id: Uuid::new_v4().to_string(),
            society_id: society_id.to_string(),
            email: invite.email,
            first_name: invite.first_name,
            last_name: invite.last_name,
            role: invite.role,
            invited_by: invited_by.to_string(),
            invited_date: self.clock.now(),
            status: InvitationStatus::Pending,
            invitation_code: generate_invitation_code(),
        };
        let invitation = self.invitation_repo.insert(invitation).await?;

        log::info!(
            "✅ 조합원 초대: {} ({}) → society {}",
            invitation.full_name(),
            invitation.email,
            society_id
        );

        let society = self.society_repo.find_by_id(society_id).await?;
        let inviter = self.user_repo.find_by_id(invited_by).await?;
        if society.is_none() {
            log::warn!("⚠️ 초대 대상 조합 {}을(를) 찾을 수 없어 기본 이름을 사용합니다", society_id);
        }

        let inviter_name = inviter.map(|u| u.full_name());
        let payload = EmailPayload::member_invited(
            &invitation,
            inviter_name.as_deref(),
            society.as_ref().map(|s| s.name.as_str()),
            &ActivationConfig::invitation_url(&invitation.invitation_code),
        );
        self.email_service.send_email(payload).await?;

        Ok(invitation)
    }

    pub async fn list_invitations(&self, society_id: Option<&str>) -> AppResult<Vec<MemberInvitation>> {
        match society_id {
            Some(id) => self.invitation_repo.find_by_society(id).await,
            None => self.invitation_repo.find_all().await,
        }
    }
}

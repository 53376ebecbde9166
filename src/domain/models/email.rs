//! 이메일 알림 요청 모델과 본문 템플릿
//!
//! 서비스 계층은 여기서 만든 [`EmailPayload`]를 `EmailService::send_email`에 넘깁니다.

use crate::domain::entities::applications::SocietyApplication;
use crate::domain::entities::invitations::MemberInvitation;
use crate::domain::entities::notifications::EmailType;

/// 조합 정보를 찾지 못했을 때 사용하는 이름
pub const FALLBACK_SOCIETY_NAME: &str = "Cooperative Society";

/// 기록할 이메일 한 통
#[derive(Debug, Clone, PartialEq)]
pub struct EmailPayload {
    pub to: String,
    pub subject: String,
    pub content: String,
    pub email_type: EmailType,
}

impl EmailPayload {
    /// 신규 신청서 접수를 관리자에게 알립니다.
    pub fn new_application_notice(admin_email: &str, application: &SocietyApplication) -> Self {
        Self {
            to: admin_email.to_string(),
            subject: "New Society Application Submitted".to_string(),
            content: format!(
                "A new society application has been submitted by {}. Please review in the admin dashboard.",
                application.form.society_name
            ),
            email_type: EmailType::SocietyApproval,
        }
    }

    pub fn society_approved(application: &SocietyApplication, activation_url: &str, ttl_hours: i64) -> Self {
        Self {
            to: application.form.rep_email.clone(),
            subject: "Society Application Approved - Set Up Your Account".to_string(),
            content: format!(
                "Congratulations! Your society \"{}\" has been approved and is now active on Coopkonnect.\n\n\
                 To complete your account setup, please click the link below to create your login credentials:\n\n\
                 {}\n\n\
                 This activation link will expire in {} hours. If you don't activate your account within this time, \
                 please contact our support team.\n\n\
                 After setting up your account, you'll be able to access your society dashboard and start managing your cooperative.\n\n\
                 Best regards,\n\
                 Coopkonnect Team",
                application.form.society_name, activation_url, ttl_hours,
            ),
            email_type: EmailType::SocietyApproval,
        }
    }

    pub fn society_rejected(application: &SocietyApplication, reason: &str) -> Self {
        Self {
            to: application.form.rep_email.clone(),
            subject: "Society Application Update".to_string(),
            content: format!(
                "Thank you for your interest in Coopkonnect. Unfortunately, your society application for \"{}\" \
                 has not been approved at this time.\n\n\
                 Reason: {}\n\n\
                 You may resubmit your application after addressing the concerns mentioned above.\n\n\
                 Best regards,\n\
                 Coopkonnect Team",
                application.form.society_name, reason,
            ),
            email_type: EmailType::SocietyRejection,
        }
    }

    pub fn society_suspended(officer_email: &str, society_name: &str, reason: &str) -> Self {
        Self {
            to: officer_email.to_string(),
            subject: "Society Account Suspended".to_string(),
            content: format!(
                "Your society \"{}\" has been temporarily suspended.\n\n\
                 Reason: {}\n\n\
                 Please contact support for more information.\n\n\
                 Best regards,\n\
                 Coopkonnect Team",
                society_name, reason,
            ),
            email_type: EmailType::SocietySuspension,
        }
    }

    /// 초대 메일. 조합이나 초대자를 찾지 못하면 대체 문구를 사용합니다.
    pub fn member_invited(
        invitation: &MemberInvitation,
        inviter_name: Option<&str>,
        society_name: Option<&str>,
        invitation_url: &str,
    ) -> Self {
        let society_name = society_name.unwrap_or(FALLBACK_SOCIETY_NAME);
        let inviter_name = inviter_name.unwrap_or("a society officer");

        Self {
            to: invitation.email.clone(),
            subject: format!("Invitation to Join {}", society_name),
            content: format!(
                "You have been invited by {} to join {} on Coopkonnect.\n\n\
                 Click the link below to accept your invitation:\n\
                 {}\n\n\
                 This invitation will expire in 7 days.\n\n\
                 Best regards,\n\
                 {} Team",
                inviter_name, society_name, invitation_url, society_name,
            ),
            email_type: EmailType::MemberInvitation,
        }
    }
}

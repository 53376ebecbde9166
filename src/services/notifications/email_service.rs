//! 이메일 알림 서비스
//!
//! 실제 메일 전송 없이 로그를 남기고 감사 기록을 추가합니다.
//! 결과 상태는 항상 `sent`입니다.

use std::sync::Arc;

use uuid::Uuid;

use crate::core::clock::Clock;
use crate::domain::entities::notifications::{EmailNotification, EmailStatus};
use crate::domain::models::EmailPayload;
use crate::errors::AppResult;
use crate::repositories::notifications::NotificationRepository;

pub struct EmailService {
    notification_repo: Arc<NotificationRepository>,
    clock: Arc<dyn Clock>,
}

impl EmailService {
    pub fn new(notification_repo: Arc<NotificationRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { notification_repo, clock }
    }

    pub async fn send_email(&self, payload: EmailPayload) -> AppResult<EmailNotification> {
        let notification = EmailNotification {
            id: Uuid::new_v4().to_string(),
            to: payload.to,
            subject: payload.subject,
            content: payload.content,
            email_type: payload.email_type,
            sent_date: self.clock.now(),
            status: EmailStatus::Sent,
        };

        log::info!(
            "📧 이메일 기록 [{}] to={} subject=\"{}\"",
            notification.email_type.as_str(),
            notification.to,
            notification.subject
        );
        log::debug!("📧 본문:\n{}", notification.content);

        self.notification_repo.append(notification).await
    }

    pub async fn list_notifications(&self) -> AppResult<Vec<EmailNotification>> {
        self.notification_repo.find_all().await
    }
}

use std::sync::Arc;

use crate::db::{CollectionKey, Database};
use crate::domain::entities::notifications::EmailNotification;
use crate::errors::AppResult;

/// 이메일 감사 로그 (추가 전용)
pub struct NotificationRepository {
    db: Arc<Database>,
}

impl NotificationRepository {
    const KEY: CollectionKey = CollectionKey::EmailNotifications;

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> AppResult<Vec<EmailNotification>> {
        self.db.load(Self::KEY).await
    }

    pub async fn append(&self, notification: EmailNotification) -> AppResult<EmailNotification> {
        let mut notifications = self.find_all().await?;
        notifications.push(notification.clone());
        self.db.save(Self::KEY, &notifications).await?;
        Ok(notification)
    }
}

//! 사용자 리포지토리

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::db::{CollectionKey, Database};
use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult};

pub struct UserRepository {
    db: Arc<Database>,
}

impl UserRepository {
    const KEY: CollectionKey = CollectionKey::Users;

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        self.db.load(Self::KEY).await
    }

    /// 이메일은 대소문자를 구분하지 않고 비교합니다.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .find_all()
            .await?
            .into_iter()
            .find(|u| u.email.eq_ignore_ascii_case(email.trim())))
    }

    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        Ok(self.find_all().await?.into_iter().find(|u| u.id == id))
    }

    pub async fn find_by_society(&self, society_id: &str) -> AppResult<Vec<User>> {
        Ok(self
            .find_all()
            .await?
            .into_iter()
            .filter(|u| u.belongs_to(society_id))
            .collect())
    }

    pub async fn insert(&self, user: User) -> AppResult<User> {
        let mut users = self.find_all().await?;
        if users.iter().any(|u| u.email.eq_ignore_ascii_case(&user.email)) {
            return Err(AppError::ConflictError(
                "이미 등록된 이메일입니다".to_string()
            ));
        }
        users.push(user.clone());
        self.db.save(Self::KEY, &users).await?;
        Ok(user)
    }

    /// 조합 소속 사용자 전원을 비활성화하고, 비활성화된 사용자 목록을 반환합니다.
    pub async fn deactivate_by_society(
        &self,
        society_id: &str,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<User>> {
        let mut users = self.find_all().await?;
        let mut affected = Vec::new();

        for user in users.iter_mut().filter(|u| u.belongs_to(society_id)) {
            user.deactivate(now);
            affected.push(user.clone());
        }

        self.db.save(Self::KEY, &users).await?;
        Ok(affected)
    }
}

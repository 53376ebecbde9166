//! 활성화 토큰 리포지토리
//!
//! 토큰은 삭제되지 않으며, 사용 처리 시 한 번만 갱신됩니다.

use std::sync::Arc;

use crate::db::{CollectionKey, Database};
use crate::domain::entities::tokens::ActivationToken;
use crate::errors::{AppError, AppResult};

pub struct ActivationTokenRepository {
    db: Arc<Database>,
}

impl ActivationTokenRepository {
    const KEY: CollectionKey = CollectionKey::ActivationTokens;

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> AppResult<Vec<ActivationToken>> {
        self.db.load(Self::KEY).await
    }

    pub async fn find_by_token(&self, token: &str) -> AppResult<Option<ActivationToken>> {
        Ok(self.find_all().await?.into_iter().find(|t| t.token == token))
    }

    pub async fn find_by_application(&self, application_id: &str) -> AppResult<Vec<ActivationToken>> {
        Ok(self
            .find_all()
            .await?
            .into_iter()
            .filter(|t| t.application_id == application_id)
            .collect())
    }

    pub async fn insert(&self, token: ActivationToken) -> AppResult<ActivationToken> {
        let mut tokens = self.find_all().await?;
        tokens.push(token.clone());
        self.db.save(Self::KEY, &tokens).await?;
        Ok(token)
    }

    pub async fn update(&self, token: &ActivationToken) -> AppResult<()> {
        let mut tokens = self.find_all().await?;
        let slot = tokens
            .iter_mut()
            .find(|t| t.id == token.id)
            .ok_or(AppError::InvalidActivationToken)?;
        *slot = token.clone();
        self.db.save(Self::KEY, &tokens).await
    }
}

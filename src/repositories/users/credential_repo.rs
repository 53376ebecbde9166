//! 자격 증명 리포지토리
//!
//! 로그인 아이디 → bcrypt 해시 맵을 `coopkonnect_credentials` 키 하나에 저장합니다.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::db::{CollectionKey, Database};
use crate::errors::AppResult;

pub struct CredentialRepository {
    db: Arc<Database>,
}

impl CredentialRepository {
    const KEY: CollectionKey = CollectionKey::Credentials;

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    async fn load(&self) -> AppResult<BTreeMap<String, String>> {
        self.db.load(Self::KEY).await
    }

    fn normalize(username: &str) -> String {
        username.trim().to_lowercase()
    }

    pub async fn contains(&self, username: &str) -> AppResult<bool> {
        Ok(self.load().await?.contains_key(&Self::normalize(username)))
    }

    pub async fn find_hash(&self, username: &str) -> AppResult<Option<String>> {
        Ok(self.load().await?.remove(&Self::normalize(username)))
    }

    pub async fn store(&self, username: &str, password_hash: String) -> AppResult<()> {
        let mut credentials = self.load().await?;
        credentials.insert(Self::normalize(username), password_hash);
        self.db.save(Self::KEY, &credentials).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_usernames_are_normalized() {
        let repo = CredentialRepository::new(Arc::new(Database::in_memory()));

        repo.store(" Rep@Coop.com ", "hash".to_string()).await.unwrap();

        assert!(repo.contains("rep@coop.com").await.unwrap());
        assert_eq!(repo.find_hash("REP@COOP.COM").await.unwrap(), Some("hash".to_string()));
        assert_eq!(repo.find_hash("other@coop.com").await.unwrap(), None);
    }
}

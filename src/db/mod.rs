//! Collection Storage Module
//!
//! 모든 워크플로우 데이터는 고정된 키 아래 JSON 문자열로 저장되는 "컬렉션"입니다.
//! [`KeyValueStore`]가 실제 보관소(메모리, 파일, Redis)를 추상화하고,
//! [`Database`]가 그 위에서 타입 안전한 컬렉션 읽기/쓰기를 제공합니다.
//!
//! # 환경 변수 설정
//!
//! ```bash
//! export STORAGE_BACKEND="file"     # memory, file, redis
//! export DATA_DIR="./data"
//! export REDIS_URL="redis://localhost:6379"
//! ```
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::db::{CollectionKey, Database};
//!
//! let database = Database::connect().await?;
//! let applications: Vec<SocietyApplication> =
//!     database.load(CollectionKey::SocietyApplications).await?;
//! database.save(CollectionKey::SocietyApplications, &applications).await?;
//! ```
//!
//! 키가 없으면 빈 컬렉션(`Default`)을 돌려주며, 저장소 오류와 손상된 JSON은
//! [`AppError::StorageError`]로 그대로 전파됩니다.

pub mod file_store;
pub mod memory_store;
pub mod redis_store;

use std::sync::Arc;

use async_trait::async_trait;
use log::info;
use serde::{Serialize, de::DeserializeOwned};

use crate::config::{StorageBackend, StorageConfig};
use crate::errors::{AppError, AppResult, ErrorContext};

pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;

/// 문자열 키 → JSON 문자열 보관소
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// 로그와 헬스 체크에 표시할 백엔드 이름
    fn backend_name(&self) -> &'static str;

    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    async fn set(&self, key: &str, value: String) -> AppResult<()>;

    /// 키 삭제. 없는 키는 성공으로 취급합니다.
    async fn remove(&self, key: &str) -> AppResult<()>;
}

/// 영속화되는 컬렉션의 고정 키
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKey {
    SocietyApplications,
    MemberInvitations,
    EmailNotifications,
    ActivationTokens,
    Users,
    Societies,
    Credentials,
}

impl CollectionKey {
    pub const ALL: [CollectionKey; 7] = [
        CollectionKey::SocietyApplications,
        CollectionKey::MemberInvitations,
        CollectionKey::EmailNotifications,
        CollectionKey::ActivationTokens,
        CollectionKey::Users,
        CollectionKey::Societies,
        CollectionKey::Credentials,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKey::SocietyApplications => "coopkonnect_society_applications",
            CollectionKey::MemberInvitations => "coopkonnect_member_invitations",
            CollectionKey::EmailNotifications => "coopkonnect_email_notifications",
            CollectionKey::ActivationTokens => "coopkonnect_activation_tokens",
            CollectionKey::Users => "coopkonnect_users",
            CollectionKey::Societies => "coopkonnect_societies",
            CollectionKey::Credentials => "coopkonnect_credentials",
        }
    }
}

/// 타입 있는 컬렉션 저장소
///
/// 리포지토리 계층은 이 타입만 사용하며, 어떤 백엔드가 주입되었는지 알지 못합니다.
#[derive(Clone)]
pub struct Database {
    store: Arc<dyn KeyValueStore>,
}

impl Database {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// 메모리 백엔드 데이터베이스 (테스트용)
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// `StorageConfig`에 따라 백엔드를 생성하고 연결을 확인합니다.
    ///
    /// ## 사용 예제
    /// ```rust,ignore
    /// let database = Database::connect().await?;
    /// ```
    pub async fn connect() -> AppResult<Self> {
        let backend = StorageConfig::backend();

        let store: Arc<dyn KeyValueStore> = match backend {
            StorageBackend::Memory => Arc::new(MemoryStore::new()),
            StorageBackend::File => Arc::new(FileStore::open(StorageConfig::data_dir()).await?),
            StorageBackend::Redis => {
                Arc::new(RedisStore::connect(&StorageConfig::redis_url()).await?)
            }
        };

        info!("✅ 저장소 연결 성공: {}", store.backend_name());

        Ok(Self::new(store))
    }

    pub fn backend_name(&self) -> &'static str {
        self.store.backend_name()
    }

    /// 컬렉션을 읽습니다. 키가 없으면 `T::default()`를 반환합니다.
    pub async fn load<T>(&self, key: CollectionKey) -> AppResult<T>
    where
        T: DeserializeOwned + Default,
    {
        match self.store.get(key.as_str()).await? {
            Some(json) => serde_json::from_str(&json)
                .storage_context(&format!("'{}' 컬렉션 역직렬화 실패", key.as_str())),
            None => Ok(T::default()),
        }
    }

    /// 컬렉션 전체를 덮어씁니다.
    pub async fn save<T>(&self, key: CollectionKey, value: &T) -> AppResult<()>
    where
        T: Serialize + ?Sized,
    {
        let json = serde_json::to_string(value)
            .storage_context(&format!("'{}' 컬렉션 직렬화 실패", key.as_str()))?;
        self.store.set(key.as_str(), json).await
    }

    pub async fn contains(&self, key: CollectionKey) -> AppResult<bool> {
        Ok(self.store.get(key.as_str()).await?.is_some())
    }

    /// 모든 고정 키를 삭제합니다.
    pub async fn clear_all(&self) -> AppResult<()> {
        for key in CollectionKey::ALL {
            self.store.remove(key.as_str()).await?;
        }
        info!("🧹 모든 컬렉션 삭제 완료 ({})", self.backend_name());
        Ok(())
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("backend", &self.backend_name())
            .finish()
    }
}

/// 키 문자열이 파일 이름/Redis 키로 안전한지 확인합니다.
pub(crate) fn ensure_safe_key(key: &str) -> AppResult<()> {
    if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
        return Err(AppError::StorageError(format!("허용되지 않는 저장소 키: '{}'", key)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use serde::Deserialize;
    use std::collections::BTreeMap;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Sample {
        id: String,
        created_at: DateTime<Utc>,
        note: Option<String>,
    }

    #[actix_web::test]
    async fn test_missing_key_loads_default() {
        let db = Database::in_memory();

        let items: Vec<Sample> = db.load(CollectionKey::Users).await.unwrap();
        let map: BTreeMap<String, String> = db.load(CollectionKey::Credentials).await.unwrap();

        assert!(items.is_empty());
        assert!(map.is_empty());
        assert!(!db.contains(CollectionKey::Users).await.unwrap());
    }

    #[actix_web::test]
    async fn test_round_trip_preserves_dates() {
        let db = Database::in_memory();
        let created_at = Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap()
            + chrono::Duration::microseconds(123_456);
        let items = vec![
            Sample { id: "a".into(), created_at, note: Some("first".into()) },
            Sample { id: "b".into(), created_at, note: None },
        ];

        db.save(CollectionKey::Societies, &items).await.unwrap();
        let loaded: Vec<Sample> = db.load(CollectionKey::Societies).await.unwrap();

        assert_eq!(loaded, items);
    }

    #[actix_web::test]
    async fn test_corrupt_json_is_storage_error() {
        let store = Arc::new(MemoryStore::new());
        store
            .set(CollectionKey::Users.as_str(), "{not json".to_string())
            .await
            .unwrap();
        let db = Database::new(store);

        let result: AppResult<Vec<Sample>> = db.load(CollectionKey::Users).await;

        assert!(matches!(result, Err(AppError::StorageError(_))));
    }

    #[actix_web::test]
    async fn test_clear_all_removes_every_key() {
        let db = Database::in_memory();
        for key in CollectionKey::ALL {
            db.save(key, &Vec::<Sample>::new()).await.unwrap();
        }

        db.clear_all().await.unwrap();

        for key in CollectionKey::ALL {
            assert!(!db.contains(key).await.unwrap());
        }
    }

    #[test]
    fn test_collection_keys() {
        assert_eq!(
            CollectionKey::SocietyApplications.as_str(),
            "coopkonnect_society_applications"
        );
        assert_eq!(CollectionKey::ActivationTokens.as_str(), "coopkonnect_activation_tokens");
        assert!(CollectionKey::ALL.iter().all(|k| ensure_safe_key(k.as_str()).is_ok()));
        assert!(ensure_safe_key("../etc/passwd").is_err());
    }

    #[actix_web::test]
    async fn test_workflow_collections_survive_file_round_trip() {
        use crate::domain::entities::applications::society_application::fixtures;
        use crate::domain::entities::applications::{ReviewDecision, SocietyApplication};
        use crate::domain::entities::invitations::{InvitationStatus, MemberInvitation};
        use crate::domain::entities::notifications::{EmailNotification, EmailStatus, EmailType};
        use crate::domain::entities::tokens::{ActivationToken, TokenRecipient};
        use crate::domain::entities::users::UserRole;

        let at = Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap()
            + chrono::Duration::nanoseconds(123_456_789);

        let mut approved = SocietyApplication::new("app-1".into(), fixtures::form("Alpha", "a@x.com", "secretary"), at);
        approved.form.website = Some("https://alpha.coop".into());
        approved
            .record_review(ReviewDecision::Approve, "admin-1", at + chrono::Duration::milliseconds(7), None)
            .unwrap();
        let mut rejected = SocietyApplication::new("app-2".into(), fixtures::form("Beta", "b@x.com", "president"), at);
        rejected
            .record_review(ReviewDecision::Reject, "admin-1", at, Some("Incomplete bank details".into()))
            .unwrap();
        let applications = vec![approved, rejected];

        let mut token = ActivationToken::issue(
            "tok-1".into(),
            "app-1",
            "soc-1",
            TokenRecipient {
                email: "a@x.com".into(),
                first_name: "Ada".into(),
                last_name: "Obi".into(),
                phone: "+234".into(),
                role: UserRole::SocietySecretary,
            },
            "secret-token".into(),
            at,
            chrono::Duration::hours(72),
        )
        .unwrap();
        token.redeem(at + chrono::Duration::microseconds(1_500)).unwrap();
        let tokens = vec![token];

        let invitations = vec![MemberInvitation {
            id: "inv-1".into(),
            society_id: "soc-1".into(),
            email: "m@x.com".into(),
            first_name: "Mo".into(),
            last_name: "Ade".into(),
            role: UserRole::SocietyTreasurer,
            invited_by: "user-1".into(),
            invited_date: at,
            status: InvitationStatus::Pending,
            invitation_code: "code-1".into(),
        }];

        let notifications = vec![EmailNotification {
            id: "mail-1".into(),
            to: "a@x.com".into(),
            subject: "Society Application Approved - Alpha".into(),
            content: "Dear Ada,\n\nWelcome.".into(),
            email_type: EmailType::SocietySuspension,
            sent_date: at,
            status: EmailStatus::Sent,
        }];

        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(Arc::new(FileStore::open(dir.path()).await.unwrap()));
        db.save(CollectionKey::SocietyApplications, &applications).await.unwrap();
        db.save(CollectionKey::ActivationTokens, &tokens).await.unwrap();
        db.save(CollectionKey::MemberInvitations, &invitations).await.unwrap();
        db.save(CollectionKey::EmailNotifications, &notifications).await.unwrap();

        let reopened = Database::new(Arc::new(FileStore::open(dir.path()).await.unwrap()));
        let loaded_applications: Vec<SocietyApplication> =
            reopened.load(CollectionKey::SocietyApplications).await.unwrap();
        let loaded_tokens: Vec<ActivationToken> = reopened.load(CollectionKey::ActivationTokens).await.unwrap();
        let loaded_invitations: Vec<MemberInvitation> =
            reopened.load(CollectionKey::MemberInvitations).await.unwrap();
        let loaded_notifications: Vec<EmailNotification> =
            reopened.load(CollectionKey::EmailNotifications).await.unwrap();

        assert_eq!(loaded_applications, applications);
        assert_eq!(loaded_tokens, tokens);
        assert_eq!(loaded_tokens[0].used_at, Some(at + chrono::Duration::microseconds(1_500)));
        assert_eq!(loaded_invitations, invitations);
        assert_eq!(loaded_notifications, notifications);
    }
}

//! # Redis 키-값 저장소
//!
//! 컬렉션 JSON을 Redis 문자열 키에 그대로 저장합니다.
//!
//! ## 연결 관리
//!
//! Redis 연결은 멀티플렉싱을 사용하여 단일 TCP 연결에서
//! 여러 동시 요청을 효율적으로 처리합니다.

use async_trait::async_trait;
use redis::{AsyncCommands, Client};

use super::{KeyValueStore, ensure_safe_key};
use crate::errors::{AppResult, ErrorContext};

/// Redis 저장소 래퍼
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use crate::db::RedisStore;
///
/// let store = RedisStore::connect("redis://localhost:6379").await?;
/// store.set("coopkonnect_users", "[]".to_string()).await?;
/// ```
#[derive(Clone)]
pub struct RedisStore {
    client: Client,
}

impl RedisStore {
    /// 클라이언트를 만들고 PING으로 서버 가용성을 확인합니다.
    pub async fn connect(redis_url: &str) -> AppResult<Self> {
        let client = Client::open(redis_url).storage_context("Redis 클라이언트 생성 실패")?;

        let mut conn = client
            .get_multiplexed_async_connection()
            .await
            .storage_context("Redis 연결 실패")?;
        redis::cmd("PING")
            .query_async::<()>(&mut conn)
            .await
            .storage_context("Redis PING 실패")?;

        log::info!("✅ Redis 연결 성공");

        Ok(Self { client })
    }

    async fn connection(&self) -> AppResult<redis::aio::MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .storage_context("Redis 연결 실패")
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    fn backend_name(&self) -> &'static str {
        "redis"
    }

    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        ensure_safe_key(key)?;
        let mut conn = self.connection().await?;
        let value: Option<String> = conn
            .get(key)
            .await
            .storage_context(&format!("Redis GET 실패 ({})", key))?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: String) -> AppResult<()> {
        ensure_safe_key(key)?;
        let mut conn = self.connection().await?;
        let _: () = conn
            .set(key, value)
            .await
            .storage_context(&format!("Redis SET 실패 ({})", key))?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        ensure_safe_key(key)?;
        let mut conn = self.connection().await?;
        let _: () = conn
            .del(key)
            .await
            .storage_context(&format!("Redis DEL 실패 ({})", key))?;
        Ok(())
    }
}

//! 활성화 토큰 발급 및 계정 활성화 서비스
//!
//! 승인된 조합의 대표자에게 일회용 토큰을 발급하고,
//! 토큰을 제시한 사용자가 로그인 아이디와 비밀번호를 정하면 계정을 만듭니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! let token = activation_service.prepare_token(&application, role, &society.id)?;
//! let token = activation_service.issue_token(token).await?;
//! let user = activation_service
//!     .activate_account(&token.token, "rep@society.coop", "secret1")
//!     .await?;
//! ```

use std::sync::Arc;

use bcrypt::hash;
use uuid::Uuid;

use crate::config::ActivationConfig;
use crate::core::clock::Clock;
use crate::domain::entities::applications::SocietyApplication;
use crate::domain::entities::tokens::{ActivationToken, TokenRecipient, TokenState};
use crate::domain::entities::users::{User, UserRole};
use crate::errors::{AppError, AppResult};
use crate::repositories::tokens::ActivationTokenRepository;
use crate::repositories::users::{CredentialRepository, UserRepository};
use crate::utils::secure_token::generate_activation_token;

pub struct ActivationService {
    token_repo: Arc<ActivationTokenRepository>,
    user_repo: Arc<UserRepository>,
    credential_repo: Arc<CredentialRepository>,
    clock: Arc<dyn Clock>,
    bcrypt_cost: u32,
}

impl ActivationService {
    pub fn new(
        token_repo: Arc<ActivationTokenRepository>,
        user_repo: Arc<UserRepository>,
        credential_repo: Arc<CredentialRepository>,
        clock: Arc<dyn Clock>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            token_repo,
            user_repo,
            credential_repo,
            clock,
            bcrypt_cost,
        }
    }

    /// 신청서 대표자용 토큰을 만듭니다. 저장은 [`Self::issue_token`]에서 합니다.
    pub fn prepare_token(
        &self,
        application: &SocietyApplication,
        role: UserRole,
        society_id: &str,
    ) -> AppResult<ActivationToken> {
        let form = &application.form;
        ActivationToken::issue(
            Uuid::new_v4().to_string(),
            &application.id,
            society_id,
            TokenRecipient {
                email: form.rep_email.clone(),
                first_name: form.rep_first_name.clone(),
                last_name: form.rep_last_name.clone(),
                phone: form.rep_phone.clone(),
                role,
            },
            generate_activation_token(),
            self.clock.now(),
            ActivationConfig::token_ttl(),
        )
    }

    /// 준비된 토큰을 저장해 발급을 마칩니다.
    pub async fn issue_token(&self, token: ActivationToken) -> AppResult<ActivationToken> {
        let token = self.token_repo.insert(token).await?;

        log::info!(
            "🔑 활성화 토큰 발급: application={} email={} expires_at={}",
            token.application_id,
            token.email,
            token.expires_at.to_rfc3339()
        );

        Ok(token)
    }

    /// 활성화 페이지의 사전 확인용 조회
    ///
    /// 사용되었거나 만료된 토큰도 반환하며, 현재 상태를 함께 알려줍니다.
    pub async fn get_activation_token(&self, token: &str) -> AppResult<(ActivationToken, TokenState)> {
        let found = self
            .token_repo
            .find_by_token(token)
            .await?
            .ok_or(AppError::InvalidActivationToken)?;
        let state = found.state_at(self.clock.now());
        Ok((found, state))
    }

    /// 토큰을 사용해 계정을 만듭니다.
    ///
    /// # Errors
    ///
    /// * `InvalidActivationToken` - 존재하지 않는 토큰
    /// * `ActivationTokenUsed` - 이미 사용된 토큰
    /// * `ActivationTokenExpired` - 만료된 토큰
    /// * `ConflictError` - 이미 사용 중인 로그인 아이디 (토큰은 소모되지 않음)
    pub async fn activate_account(&self, token: &str, username: &str, password: &str) -> AppResult<User> {
        let start_time = std::time::Instant::now();
        let now = self.clock.now();
        let username = username.trim();

        let mut activation = self
            .token_repo
            .find_by_token(token)
            .await?
            .ok_or(AppError::InvalidActivationToken)?;

        activation.ensure_redeemable(now)?;

        if self.credential_repo.contains(username).await?
            || self.user_repo.find_by_email(username).await?.is_some()
        {
            return Err(AppError::ConflictError(
                "이미 사용 중인 로그인 아이디입니다".to_string()
            ));
        }

        let hash_start = std::time::Instant::now();
        let password_hash = hash(password, self.bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        activation.redeem(now)?;
        self.token_repo.update(&activation).await?;

        let user = User::from_activation(Uuid::new_v4().to_string(), &activation, username, now);
        let user = self.user_repo.insert(user).await?;
        self.credential_repo.store(username, password_hash).await?;

        log::info!(
            "✅ 계정 활성화 성공: {} ({}) society={} in {:?}",
            user.email,
            user.role.as_str(),
            activation.society_id,
            start_time.elapsed()
        );

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::test_support::test_context;
    use crate::domain::entities::applications::society_application::fixtures;
    use chrono::Duration;

    async fn approved_token(ctx: &crate::core::context::AppContext, rep_email: &str) -> ActivationToken {
        let application = ctx
            .application_service
            .submit_application(fixtures::form("Token Coop", rep_email, "treasurer"))
            .await
            .unwrap();
        ctx.application_service
            .approve_application(&application.id, "admin-1")
            .await
            .unwrap()
            .activation_token
    }

    #[actix_web::test]
    async fn test_activate_account_consumes_token_and_creates_user() {
        let (ctx, clock) = test_context();
        let token = approved_token(&ctx, "rep@token.coop").await;

        let user = ctx
            .activation_service
            .activate_account(&token.token, "rep@token.coop", "abcdef")
            .await
            .unwrap();

        assert!(user.is_active);
        assert_eq!(user.role, UserRole::SocietyTreasurer);
        assert_eq!(user.first_name, "Ada");
        assert_eq!(user.created_at, clock.now());

        let stored = ctx.token_repo.find_by_token(&token.token).await.unwrap().unwrap();
        assert!(stored.is_used);
        assert_eq!(stored.used_at, Some(clock.now()));

        let (_, state) = ctx.activation_service.get_activation_token(&token.token).await.unwrap();
        assert_eq!(state, TokenState::Used);
    }

    #[actix_web::test]
    async fn test_token_can_be_redeemed_only_once() {
        let (ctx, _) = test_context();
        let token = approved_token(&ctx, "rep@token.coop").await;

        ctx.activation_service
            .activate_account(&token.token, "rep@token.coop", "abcdef")
            .await
            .unwrap();
        let second = ctx
            .activation_service
            .activate_account(&token.token, "other@token.coop", "abcdef")
            .await;

        assert!(matches!(second, Err(AppError::ActivationTokenUsed)));
        assert_eq!(ctx.user_service.list_users(None).await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_unknown_and_expired_tokens() {
        let (ctx, clock) = test_context();
        let token = approved_token(&ctx, "rep@token.coop").await;

        let unknown = ctx
            .activation_service
            .activate_account("not-a-token", "rep@token.coop", "abcdef")
            .await;
        assert!(matches!(unknown, Err(AppError::InvalidActivationToken)));

        clock.advance(Duration::hours(72));
        let (_, state) = ctx.activation_service.get_activation_token(&token.token).await.unwrap();
        assert_eq!(state, TokenState::Unused);

        clock.advance(Duration::seconds(1));
        let expired = ctx
            .activation_service
            .activate_account(&token.token, "rep@token.coop", "abcdef")
            .await;
        assert!(matches!(expired, Err(AppError::ActivationTokenExpired)));

        let stored = ctx.token_repo.find_by_token(&token.token).await.unwrap().unwrap();
        assert!(!stored.is_used);
    }

    #[actix_web::test]
    async fn test_username_conflict_keeps_token_unused() {
        let (ctx, _) = test_context();
        let first = approved_token(&ctx, "first@token.coop").await;
        let second = approved_token(&ctx, "second@token.coop").await;
        ctx.activation_service
            .activate_account(&first.token, "shared@token.coop", "abcdef")
            .await
            .unwrap();

        let conflict = ctx
            .activation_service
            .activate_account(&second.token, "SHARED@token.coop", "abcdef")
            .await;

        assert!(matches!(conflict, Err(AppError::ConflictError(_))));
        let (_, state) = ctx.activation_service.get_activation_token(&second.token).await.unwrap();
        assert_eq!(state, TokenState::Unused);

        ctx.activation_service
            .activate_account(&second.token, "second@token.coop", "abcdef")
            .await
            .unwrap();
    }

    #[actix_web::test]
    async fn test_stored_credential_is_bcrypt_hash() {
        let (ctx, _) = test_context();
        let token = approved_token(&ctx, "rep@token.coop").await;

        ctx.activation_service
            .activate_account(&token.token, "rep@token.coop", "abcdef")
            .await
            .unwrap();

        let outcome = ctx.user_service.authenticate("rep@token.coop", "abcdef").await.unwrap();
        assert_eq!(outcome.user.email, "rep@token.coop");
    }
}

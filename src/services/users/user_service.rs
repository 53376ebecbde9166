//! 사용자 조회 및 로그인 확인 서비스
//!
//! 세션이나 토큰은 발급하지 않습니다. 자격 증명이 맞는지 확인하고
//! 사용자와 소속 조합 정보를 돌려줄 뿐입니다.

use std::sync::Arc;

use crate::domain::entities::users::User;
use crate::domain::models::LoginOutcome;
use crate::errors::{AppError, AppResult};
use crate::repositories::societies::SocietyRepository;
use crate::repositories::users::{CredentialRepository, UserRepository};

pub struct UserService {
    user_repo: Arc<UserRepository>,
    credential_repo: Arc<CredentialRepository>,
    society_repo: Arc<SocietyRepository>,
}

impl UserService {
    pub fn new(
        user_repo: Arc<UserRepository>,
        credential_repo: Arc<CredentialRepository>,
        society_repo: Arc<SocietyRepository>,
    ) -> Self {
        Self {
            user_repo,
            credential_repo,
            society_repo,
        }
    }

    pub async fn get_user_by_email(&self, email: &str) -> AppResult<User> {
        self.user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }

    /// 전체 또는 특정 조합 소속 사용자 목록
    pub async fn list_users(&self, society_id: Option<&str>) -> AppResult<Vec<User>> {
        match society_id {
            Some(id) => self.user_repo.find_by_society(id).await,
            None => self.user_repo.find_all().await,
        }
    }

    /// 이메일과 비밀번호를 확인합니다.
    ///
    /// 미등록 사용자, 비밀번호 불일치, 비활성 계정은 각각 다른 메시지의
    /// `AuthenticationError`로 구분됩니다.
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<LoginOutcome> {
        let start_time = std::time::Instant::now();

        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::AuthenticationError("User not found".to_string()))?;

        let password_hash = self
            .credential_repo
            .find_hash(&user.email)
            .await?
            .ok_or_else(|| AppError::AuthenticationError("Invalid password".to_string()))?;

        let verify_start = std::time::Instant::now();
        let is_valid = bcrypt::verify(password, &password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            return Err(AppError::AuthenticationError("Invalid password".to_string()));
        }

        if !user.is_active {
            return Err(AppError::AuthenticationError("Account is not active".to_string()));
        }

        let society = match user.society_id.as_deref() {
            Some(society_id) => self.society_repo.find_by_id(society_id).await?,
            None => None,
        };

        log::info!(
            "✅ 로그인 확인: {} ({}) in {:?}",
            user.email,
            user.role.as_str(),
            start_time.elapsed()
        );

        Ok(LoginOutcome { user, society })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::test_support::{approve_and_activate, test_context};

    #[actix_web::test]
    async fn test_authenticate_returns_user_and_society() {
        let (ctx, _) = test_context();
        let (society, _) = approve_and_activate(&ctx, "Login Coop", "l@x.com", "president").await;

        let outcome = ctx.user_service.authenticate("l@x.com", "abcdef").await.unwrap();

        assert_eq!(outcome.user.email, "l@x.com");
        assert_eq!(outcome.society.map(|s| s.id), Some(society.id));
    }

    #[actix_web::test]
    async fn test_authenticate_failures() {
        let (ctx, _) = test_context();
        let (society, _) = approve_and_activate(&ctx, "Login Coop", "l@x.com", "president").await;

        let unknown = ctx.user_service.authenticate("ghost@x.com", "abcdef").await;
        assert!(matches!(unknown, Err(AppError::AuthenticationError(m)) if m == "User not found"));

        let wrong = ctx.user_service.authenticate("l@x.com", "wrong-pass").await;
        assert!(matches!(wrong, Err(AppError::AuthenticationError(m)) if m == "Invalid password"));

        ctx.society_service.suspend_society(&society.id, "admin-1", "audit").await.unwrap();
        let inactive = ctx.user_service.authenticate("l@x.com", "abcdef").await;
        assert!(matches!(inactive, Err(AppError::AuthenticationError(m)) if m == "Account is not active"));
    }

    #[actix_web::test]
    async fn test_list_users_by_society() {
        let (ctx, _) = test_context();
        let (first, _) = approve_and_activate(&ctx, "First", "f@x.com", "president").await;
        approve_and_activate(&ctx, "Second", "s@x.com", "president").await;

        assert_eq!(ctx.user_service.list_users(None).await.unwrap().len(), 2);
        let members = ctx.user_service.list_users(Some(&first.id)).await.unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].email, "f@x.com");
    }
}

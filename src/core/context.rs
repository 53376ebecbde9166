//! 애플리케이션 컨텍스트
//!
//! 리포지토리와 서비스를 한 곳에서 조립합니다. 전역 상태 없이
//! 주입된 [`Database`]와 [`Clock`] 위에 모든 구성 요소를 만들며,
//! 핸들러는 `web::Data<AppContext>`로 필요한 서비스에 접근합니다.
//!
//! ```text
//! AppContext
//!  ├─ Database (memory | file | redis)
//!  ├─ Clock (system | fixed)
//!  ├─ repositories: applications, societies, tokens, users, credentials, invitations, notifications
//!  └─ services: email → activation → application, society, user, invitation, seeder
//! ```

use std::sync::Arc;

use super::clock::Clock;
use crate::db::Database;
use crate::repositories::applications::ApplicationRepository;
use crate::repositories::invitations::InvitationRepository;
use crate::repositories::notifications::NotificationRepository;
use crate::repositories::societies::SocietyRepository;
use crate::repositories::tokens::ActivationTokenRepository;
use crate::repositories::users::{CredentialRepository, UserRepository};
use crate::services::activation::ActivationService;
use crate::services::applications::ApplicationService;
use crate::services::invitations::InvitationService;
use crate::services::notifications::EmailService;
use crate::services::seed::DataSeeder;
use crate::services::societies::SocietyService;
use crate::services::users::UserService;

pub struct AppContext {
    pub database: Arc<Database>,
    pub clock: Arc<dyn Clock>,

    pub token_repo: Arc<ActivationTokenRepository>,

    pub email_service: Arc<EmailService>,
    pub activation_service: Arc<ActivationService>,
    pub application_service: Arc<ApplicationService>,
    pub society_service: Arc<SocietyService>,
    pub user_service: Arc<UserService>,
    pub invitation_service: Arc<InvitationService>,
    pub data_seeder: Arc<DataSeeder>,
}

impl AppContext {
    pub fn new(database: Arc<Database>, clock: Arc<dyn Clock>, bcrypt_cost: u32) -> Self {
        let application_repo = Arc::new(ApplicationRepository::new(database.clone()));
        let society_repo = Arc::new(SocietyRepository::new(database.clone()));
        let token_repo = Arc::new(ActivationTokenRepository::new(database.clone()));
        let user_repo = Arc::new(UserRepository::new(database.clone()));
        let credential_repo = Arc::new(CredentialRepository::new(database.clone()));
        let invitation_repo = Arc::new(InvitationRepository::new(database.clone()));
        let notification_repo = Arc::new(NotificationRepository::new(database.clone()));

        let email_service = Arc::new(EmailService::new(notification_repo, clock.clone()));

        let activation_service = Arc::new(ActivationService::new(
            token_repo.clone(),
            user_repo.clone(),
            credential_repo.clone(),
            clock.clone(),
            bcrypt_cost,
        ));

        let application_service = Arc::new(ApplicationService::new(
            application_repo.clone(),
            society_repo.clone(),
            activation_service.clone(),
            email_service.clone(),
            clock.clone(),
        ));

        let society_service = Arc::new(SocietyService::new(
            society_repo.clone(),
            user_repo.clone(),
            email_service.clone(),
            clock.clone(),
        ));

        let user_service = Arc::new(UserService::new(
            user_repo.clone(),
            credential_repo.clone(),
            society_repo.clone(),
        ));

        let invitation_service = Arc::new(InvitationService::new(
            invitation_repo,
            society_repo.clone(),
            user_repo.clone(),
            email_service.clone(),
            clock.clone(),
        ));

        let data_seeder = Arc::new(DataSeeder::new(
            database.clone(),
            application_repo,
            society_repo,
            user_repo,
            credential_repo,
            clock.clone(),
            bcrypt_cost,
        ));

        log::info!("🔧 AppContext 구성 완료 (storage: {})", database.backend_name());

        Self {
            database,
            clock,
            token_repo,
            email_service,
            activation_service,
            application_service,
            society_service,
            user_service,
            invitation_service,
            data_seeder,
        }
    }
}

//! 초기 데이터 생성기
//!
//! 서버 최초 기동 시 빈 컬렉션을 준비하고, 플랫폼 관리자 계정과
//! (설정에 따라) 데모 신청서, 데모 조합, 데모 회장 계정을 만듭니다.
//! 이미 존재하는 키는 건드리지 않으므로 여러 번 호출해도 안전합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! let report = ctx.data_seeder.ensure_initialized(&SeedOptions::from_env()).await?;
//! ```

use std::sync::Arc;

use bcrypt::hash;
use chrono::{DateTime, TimeZone, Utc};

use crate::config::PlatformConfig;
use crate::core::clock::Clock;
use crate::db::{CollectionKey, Database};
use crate::domain::entities::applications::{SocietyApplication, SocietyApplicationForm};
use crate::domain::entities::societies::{BankAccount, Society};
use crate::domain::entities::users::{User, UserRole};
use crate::errors::{AppError, AppResult};
use crate::repositories::applications::ApplicationRepository;
use crate::repositories::societies::SocietyRepository;
use crate::repositories::users::{CredentialRepository, UserRepository};
use crate::utils::display_terminal::{
    print_boxed_title, print_final_summary, print_step_complete, print_step_start, print_sub_task,
};

pub const ADMIN_USER_ID: &str = "admin-1";
pub const DEMO_SOCIETY_ID: &str = "demo-society-1";
pub const DEMO_PRESIDENT_ID: &str = "society-1";
pub const DEMO_PRESIDENT_EMAIL: &str = "president@teacherscoop.com";
const DEMO_PRESIDENT_PASSWORD: &str = "society123";

/// 초기 데이터 옵션
#[derive(Debug, Clone)]
pub struct SeedOptions {
    pub admin_email: String,
    pub admin_password: String,
    pub include_demo: bool,
}

impl SeedOptions {
    pub fn from_env() -> Self {
        Self {
            admin_email: PlatformConfig::admin_email(),
            admin_password: PlatformConfig::admin_password(),
            include_demo: PlatformConfig::seed_demo_data(),
        }
    }
}

/// 이번 호출에서 새로 만든 항목 수
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub applications: usize,
    pub users: usize,
    pub societies: usize,
}

pub struct DataSeeder {
    db: Arc<Database>,
    application_repo: Arc<ApplicationRepository>,
    society_repo: Arc<SocietyRepository>,
    user_repo: Arc<UserRepository>,
    credential_repo: Arc<CredentialRepository>,
    clock: Arc<dyn Clock>,
    bcrypt_cost: u32,
}

impl DataSeeder {
    pub fn new(
        db: Arc<Database>,
        application_repo: Arc<ApplicationRepository>,
        society_repo: Arc<SocietyRepository>,
        user_repo: Arc<UserRepository>,
        credential_repo: Arc<CredentialRepository>,
        clock: Arc<dyn Clock>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            db,
            application_repo,
            society_repo,
            user_repo,
            credential_repo,
            clock,
            bcrypt_cost,
        }
    }

    pub async fn ensure_initialized(&self, options: &SeedOptions) -> AppResult<SeedReport> {
        let mut report = SeedReport::default();

        print_boxed_title("CoopKonnect Data Initialization");

        print_step_start(1, "Society applications");
        if self.db.contains(CollectionKey::SocietyApplications).await? {
            print_sub_task(CollectionKey::SocietyApplications.as_str(), "exists");
        } else {
            let applications = if options.include_demo {
                demo_applications()
            } else {
                Vec::new()
            };
            self.application_repo.replace_all(&applications).await?;
            report.applications = applications.len();
            for application in &applications {
                print_sub_task(&application.form.society_name, "seeded");
            }
        }
        print_step_complete(1, "Society applications", report.applications);

        print_step_start(2, "Empty collections");
        let mut prepared = 0;
        for key in [
            CollectionKey::MemberInvitations,
            CollectionKey::EmailNotifications,
            CollectionKey::ActivationTokens,
            CollectionKey::Societies,
        ] {
            if !self.db.contains(key).await? {
                self.db.save(key, &Vec::<serde_json::Value>::new()).await?;
                print_sub_task(key.as_str(), "created");
                prepared += 1;
            }
        }
        print_step_complete(2, "Empty collections", prepared);

        print_step_start(3, "Platform accounts");
        if self.db.contains(CollectionKey::Users).await? {
            print_sub_task(CollectionKey::Users.as_str(), "exists");
        } else {
            self.db.save(CollectionKey::Users, &Vec::<User>::new()).await?;

            self.seed_user(admin_user(&options.admin_email, self.clock.now()), &options.admin_password)
                .await?;
            report.users += 1;

            if options.include_demo {
                if self.society_repo.find_by_id(DEMO_SOCIETY_ID).await?.is_none() {
                    self.society_repo.insert(demo_society(self.clock.now())).await?;
                    report.societies += 1;
                    print_sub_task(DEMO_SOCIETY_ID, "seeded");
                }
                self.seed_user(demo_president(self.clock.now()), DEMO_PRESIDENT_PASSWORD)
                    .await?;
                report.users += 1;
            }
        }
        print_step_complete(3, "Platform accounts", report.users);

        let totals = (
            self.application_repo.find_all().await?.len(),
            self.user_repo.find_all().await?.len(),
            self.society_repo.find_all().await?.len(),
        );
        print_final_summary(totals.0, totals.1, totals.2, self.db.backend_name());

        log::info!("✅ 초기 데이터 준비 완료: {:?}", report);
        Ok(report)
    }

    async fn seed_user(&self, user: User, password: &str) -> AppResult<()> {
        let password_hash = hash(password, self.bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        let user = self.user_repo.insert(user).await?;
        self.credential_repo.store(&user.email, password_hash).await?;
        print_sub_task(&user.email, "created");
        Ok(())
    }

    /// 모든 컬렉션을 삭제합니다. 다음 `ensure_initialized` 호출에서 다시 만들어집니다.
    pub async fn clear_all_data(&self) -> AppResult<()> {
        log::warn!("🧹 모든 워크플로우 데이터를 삭제합니다");
        self.db.clear_all().await
    }
}

fn utc_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

fn admin_user(email: &str, now: DateTime<Utc>) -> User {
    User {
        id: ADMIN_USER_ID.to_string(),
        email: email.to_string(),
        first_name: "Admin".to_string(),
        last_name: "User".to_string(),
        phone: "+234-800-000-0000".to_string(),
        role: UserRole::CoopkonnectAdmin,
        society_id: None,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

fn demo_president(now: DateTime<Utc>) -> User {
    User {
        id: DEMO_PRESIDENT_ID.to_string(),
        email: DEMO_PRESIDENT_EMAIL.to_string(),
        first_name: "Sarah".to_string(),
        last_name: "Johnson".to_string(),
        phone: "+234-801-111-2222".to_string(),
        role: UserRole::SocietyPresident,
        society_id: Some(DEMO_SOCIETY_ID.to_string()),
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

fn demo_society(now: DateTime<Utc>) -> Society {
    Society {
        id: DEMO_SOCIETY_ID.to_string(),
        name: "Lagos Teachers Cooperative Society".to_string(),
        description: "A cooperative society for educators in Lagos State".to_string(),
        logo: None,
        banner: None,
        address: "123 Education Avenue, Lagos".to_string(),
        phone: "+234-801-234-5678".to_string(),
        email: "info@teacherscoop.com".to_string(),
        bank_account: BankAccount {
            bank_name: "First Bank".to_string(),
            account_number: "1234567890".to_string(),
            account_name: "Lagos Teachers Cooperative Society".to_string(),
            routing_number: None,
        },
        is_active: true,
        interest_rate: Some(2.5),
        loan_term_months: Some(12),
        minimum_membership_months: Some(6),
        created_at: now,
        updated_at: now,
    }
}

fn demo_applications() -> Vec<SocietyApplication> {
    vec![
        SocietyApplication::new(
            "app-demo-1".to_string(),
            SocietyApplicationForm {
                society_name: "Lagos Teachers Cooperative Society".to_string(),
                description: "A cooperative society for educators in Lagos State".to_string(),
                address: "123 Education Avenue, Lagos".to_string(),
                phone: "+234-801-234-5678".to_string(),
                email: "info@lagoseducators.coop".to_string(),
                website: Some("https://lagoseducators.coop".to_string()),
                established_year: "2020".to_string(),
                rep_first_name: "Sarah".to_string(),
                rep_last_name: "Johnson".to_string(),
                rep_position: "president".to_string(),
                rep_email: "sarah@lagoseducators.coop".to_string(),
                rep_phone: "+234-801-111-2222".to_string(),
                bank_name: "first-bank".to_string(),
                account_number: "1234567890".to_string(),
                account_name: "Lagos Teachers Cooperative Society".to_string(),
                interest_rate: "2.5".to_string(),
                loan_term_months: "12".to_string(),
                minimum_membership_months: "6".to_string(),
                membership_fee: "5000".to_string(),
            },
            utc_date(2024, 3, 1),
        ),
        SocietyApplication::new(
            "app-demo-2".to_string(),
            SocietyApplicationForm {
                society_name: "Market Traders Association".to_string(),
                description: "Cooperative society for market traders and entrepreneurs".to_string(),
                address: "456 Commerce Street, Lagos".to_string(),
                phone: "+234-802-345-6789".to_string(),
                email: "info@markettraders.coop".to_string(),
                website: None,
                established_year: "2019".to_string(),
                rep_first_name: "Emmanuel".to_string(),
                rep_last_name: "Okafor".to_string(),
                rep_position: "secretary".to_string(),
                rep_email: "emmanuel@markettraders.coop".to_string(),
                rep_phone: "+234-802-222-3333".to_string(),
                bank_name: "access-bank".to_string(),
                account_number: "0987654321".to_string(),
                account_name: "Market Traders Association".to_string(),
                interest_rate: "3.0".to_string(),
                loan_term_months: "10".to_string(),
                minimum_membership_months: "6".to_string(),
                membership_fee: "3000".to_string(),
            },
            utc_date(2024, 3, 3),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::test_support::test_context;
    use crate::domain::entities::applications::ApplicationStatus;

    fn options(include_demo: bool) -> SeedOptions {
        SeedOptions {
            admin_email: "admin@coopkonnect.com".to_string(),
            admin_password: "admin123".to_string(),
            include_demo,
        }
    }

    #[actix_web::test]
    async fn test_seed_demo_data_once() {
        let (ctx, _) = test_context();

        let first = ctx.data_seeder.ensure_initialized(&options(true)).await.unwrap();
        let second = ctx.data_seeder.ensure_initialized(&options(true)).await.unwrap();

        assert_eq!(first, SeedReport { applications: 2, users: 2, societies: 1 });
        assert_eq!(second, SeedReport::default());

        let applications = ctx.application_service.list_applications().await.unwrap();
        assert_eq!(applications.len(), 2);
        assert!(applications.iter().all(|a| a.status == ApplicationStatus::Pending));
        assert!(ctx.society_service.get_society(DEMO_SOCIETY_ID).await.is_ok());
    }

    #[actix_web::test]
    async fn test_seeded_accounts_can_log_in() {
        let (ctx, _) = test_context();
        ctx.data_seeder.ensure_initialized(&options(true)).await.unwrap();

        let admin = ctx.user_service.authenticate("admin@coopkonnect.com", "admin123").await.unwrap();
        assert_eq!(admin.user.id, ADMIN_USER_ID);
        assert_eq!(admin.user.role, UserRole::CoopkonnectAdmin);
        assert!(admin.society.is_none());

        let president = ctx.user_service.authenticate(DEMO_PRESIDENT_EMAIL, "society123").await.unwrap();
        assert_eq!(president.society.map(|s| s.id), Some(DEMO_SOCIETY_ID.to_string()));
    }

    #[actix_web::test]
    async fn test_seed_without_demo_data() {
        let (ctx, _) = test_context();

        let report = ctx.data_seeder.ensure_initialized(&options(false)).await.unwrap();

        assert_eq!(report, SeedReport { applications: 0, users: 1, societies: 0 });
        assert!(ctx.application_service.list_applications().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_clear_all_data_allows_reseed() {
        let (ctx, _) = test_context();
        ctx.data_seeder.ensure_initialized(&options(true)).await.unwrap();

        ctx.data_seeder.clear_all_data().await.unwrap();
        assert!(ctx.user_service.list_users(None).await.unwrap().is_empty());

        let report = ctx.data_seeder.ensure_initialized(&options(true)).await.unwrap();
        assert_eq!(report.users, 2);
    }
}

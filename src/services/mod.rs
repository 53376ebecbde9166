//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 생성자로 리포지토리, 다른 서비스, [`Clock`](crate::core::clock::Clock)을 받으며,
//! [`AppContext`](crate::core::context::AppContext)가 한 번 조립해 `Arc`로 공유합니다.
//!
//! # Features
//!
//! - 신청서 접수, 승인, 거절 ([`applications`])
//! - 활성화 토큰 발급 및 계정 활성화 ([`activation`])
//! - 조합 조회 및 정지 ([`societies`])
//! - 사용자 조회 및 로그인 확인 ([`users`])
//! - 조합원 초대 ([`invitations`])
//! - 이메일 기록 ([`notifications`])
//! - 초기 데이터 생성 ([`seed`])
//!
//! # Examples
//!
//! ```rust,ignore
//! let ctx = AppContext::new(database, Arc::new(SystemClock), PasswordConfig::bcrypt_cost());
//! let application = ctx.application_service.submit_application(form).await?;
//! ```

pub mod activation;
pub mod applications;
pub mod invitations;
pub mod notifications;
pub mod seed;
pub mod societies;
pub mod users;

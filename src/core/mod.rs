//! # Core Module
//!
//! 서비스 조립과 시간 공급을 담당합니다.
//!
//! - [`clock`] - 현재 시각 추상화 (`SystemClock`, 테스트용 `FixedClock`)
//! - [`context`] - 리포지토리와 서비스를 명시적으로 연결하는 `AppContext`
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::core::{clock::SystemClock, context::AppContext};
//!
//! let database = Arc::new(Database::connect().await?);
//! let ctx = AppContext::new(database, Arc::new(SystemClock), PasswordConfig::bcrypt_cost());
//! ```

pub mod clock;
pub mod context;

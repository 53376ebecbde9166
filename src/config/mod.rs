//! # Configuration Module
//!
//! 협동조합 온보딩 서비스의 설정 관리를 담당하는 모듈입니다.
//! 모든 설정값은 환경 변수에서 읽으며, 값이 없으면 개발에 안전한 기본값을 사용합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 저장소, 비밀번호 해싱 설정
//! - [`platform_config`] - 활성화 토큰, 이메일 링크, 관리자 계정 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{ActivationConfig, ServerConfig, StorageConfig};
//!
//! let address = ServerConfig::bind_address();
//! let backend = StorageConfig::backend();
//! let ttl = ActivationConfig::token_ttl();
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 저장소 설정
//! export STORAGE_BACKEND="file"    # memory, file, redis
//! export DATA_DIR="./data"
//! export REDIS_URL="redis://localhost:6379"
//!
//! # 워크플로우 설정
//! export ACTIVATION_TOKEN_TTL_HOURS="72"
//! export APP_BASE_URL="https://coopkonnect.com"
//! export ADMIN_EMAIL="admin@coopkonnect.com"
//! export ADMIN_PASSWORD="change-me"
//! export SEED_DEMO_DATA="true"
//!
//! # 보안 설정
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export BCRYPT_COST="12"          # 4-15 범위
//! ```

pub mod data_config;
pub mod platform_config;

pub use data_config::*;
pub use platform_config::*;

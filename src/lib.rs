//! CoopKonnect 협동조합 온보딩 백엔드
//!
//! 협동조합 가입 신청서를 접수하고, 관리자가 승인하면 조합을 만들고
//! 대표자에게 일회용 활성화 토큰을 발급합니다. 대표자는 토큰으로 계정을 활성화하고,
//! 이후 회원을 초대하거나 로그인할 수 있습니다.
//!
//! # Features
//!
//! - **신청서 심사**: pending → approved / rejected 상태 전이
//! - **활성화 토큰**: 72시간 만료, 한 번만 사용 가능
//! - **역할 매핑**: 대표자 직책 → 조합 임원 역할
//! - **조합 정지**: 소속 사용자 일괄 비활성화 + 통지 메일
//! - **회원 초대**: 초대 코드와 링크 발급
//! - **저장소**: 메모리 / JSON 파일 / Redis 키-값 백엔드
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증 / 응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 워크플로 로직 (AppContext로 묶임)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 컬렉션 단위 JSON 읽기/쓰기
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  KeyValueStore  │ ← memory | file | redis
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use coopkonnect_backend::core::{clock::SystemClock, context::AppContext};
//! use coopkonnect_backend::db::Database;
//!
//! let ctx = AppContext::new(Arc::new(Database::in_memory()), Arc::new(SystemClock), 10);
//! let application = ctx.application_service.submit_application(form).await?;
//! let outcome = ctx.application_service.approve_application(&application.id, "admin-1").await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;

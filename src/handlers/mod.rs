//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들입니다. 각 핸들러는
//! `web::Data<AppContext>`에서 서비스를 꺼내 쓰고, 요청 DTO를 검증한 뒤
//! 결과를 JSON으로 돌려줍니다. 실패는 모두 [`AppError`](crate::errors::AppError)로 전파됩니다.
//!
//! ```text
//! Client ──▶ Handlers (이 모듈) ──▶ Services ──▶ Repositories ──▶ KeyValueStore
//! ```
//!
//! ## 모듈 구성
//!
//! - **`applications`**: 신청서 제출, 조회, 승인, 거절
//! - **`activation`**: 활성화 토큰 조회 및 계정 활성화
//! - **`societies`**: 조합 조회, 정지, 소속 사용자, 회원 초대
//! - **`invitations`**: 전체 초대 목록
//! - **`users`**: 사용자 조회
//! - **`auth`**: 로그인 확인
//! - **`notifications`**: 이메일 발송 기록

pub mod activation;
pub mod applications;
pub mod auth;
pub mod invitations;
pub mod notifications;
pub mod societies;
pub mod users;

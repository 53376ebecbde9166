//! 도메인 계층
//!
//! - [`entities`] - 영속화되는 레코드와 상태 머신
//! - [`models`] - 서비스 입력/결과와 이메일 템플릿
//! - [`dto`] - HTTP 요청/응답 형식

pub mod dto;
pub mod entities;
pub mod models;

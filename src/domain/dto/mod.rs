//! HTTP 요청/응답 DTO
//!
//! 요청 DTO는 `validator`로 필드를 검증한 뒤 서비스 입력으로 변환되고,
//! 응답 DTO는 엔티티에서 `From`으로 만들어집니다.

pub mod activation;
pub mod applications;
pub mod societies;
pub mod users;

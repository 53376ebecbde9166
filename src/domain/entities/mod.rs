//! 도메인 엔티티
//!
//! 저장소에 JSON(camelCase)으로 영속화되는 레코드들입니다.
//! 엔티티 간 관계는 `societyId`, `applicationId` 같은 식별자 복사로만 표현됩니다.

pub mod applications;
pub mod invitations;
pub mod notifications;
pub mod societies;
pub mod tokens;
pub mod users;

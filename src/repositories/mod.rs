//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 리포지토리는 [`Database`](crate::db::Database) 위에서 컬렉션 하나를 담당합니다.
//! 모든 쓰기는 컬렉션 전체를 읽고, 메모리에서 수정한 뒤, 통째로 다시 저장합니다.
//! 동시에 들어온 쓰기는 마지막 저장이 이깁니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::UserRepository;
//!
//! let user_repo = UserRepository::new(database.clone());
//! let user = user_repo.find_by_email("president@teacherscoop.com").await?;
//! ```

pub mod applications;
pub mod invitations;
pub mod notifications;
pub mod societies;
pub mod tokens;
pub mod users;

pub mod request;

pub use request::{InviteMemberRequest, SuspendSocietyRequest};

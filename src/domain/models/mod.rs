pub mod email;
pub mod workflow;

pub use email::EmailPayload;
pub use workflow::{ApplicationSummary, ApprovalOutcome, LoginOutcome, MemberInvite};

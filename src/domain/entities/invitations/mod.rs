pub mod member_invitation;

pub use member_invitation::{InvitationStatus, MemberInvitation};

pub mod invitation_service;

pub use invitation_service::InvitationService;

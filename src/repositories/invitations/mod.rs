pub mod invitation_repo;

pub use invitation_repo::InvitationRepository;

pub mod credential_repo;
pub mod user_repo;

pub use credential_repo::CredentialRepository;
pub use user_repo::UserRepository;

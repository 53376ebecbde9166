pub mod activation_token_repo;

pub use activation_token_repo::ActivationTokenRepository;

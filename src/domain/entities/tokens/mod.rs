pub mod activation_token;

pub use activation_token::{ActivationToken, TokenRecipient, TokenState};

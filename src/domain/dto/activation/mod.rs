pub mod request;
pub mod response;

pub use request::ActivateAccountRequest;
pub use response::ActivationTokenResponse;

pub mod request;
pub mod response;

pub use request::{LoginRequest, UserListQuery};
pub use response::{ActivationResponse, LoginResponse, UserResponse};

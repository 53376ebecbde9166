pub mod request;
pub mod response;

pub use request::{ApproveApplicationRequest, RejectApplicationRequest, SubmitApplicationRequest};
pub use response::{ApprovalResponse, IssuedTokenResponse};

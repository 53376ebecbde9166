pub mod email_notification;

pub use email_notification::{EmailNotification, EmailStatus, EmailType};

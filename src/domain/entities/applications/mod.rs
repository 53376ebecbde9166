pub mod society_application;

pub use society_application::{
    ApplicationStatus, ReviewDecision, SocietyApplication, SocietyApplicationForm,
};

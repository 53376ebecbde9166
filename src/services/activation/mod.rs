pub mod activation_service;

pub use activation_service::ActivationService;

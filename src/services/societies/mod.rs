pub mod society_service;

pub use society_service::SocietyService;

pub mod society_repo;

pub use society_repo::SocietyRepository;

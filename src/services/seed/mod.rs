pub mod data_seeder;

pub use data_seeder::{DataSeeder, SeedOptions, SeedReport};

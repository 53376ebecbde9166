pub mod society;

pub use society::{BankAccount, Society};

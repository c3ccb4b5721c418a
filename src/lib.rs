pub mod admin;
pub mod config;
pub mod database;
pub mod error;
pub mod signinglog;

pub use error::SigningLogError;

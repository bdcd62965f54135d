pub mod constants;
pub mod env;

pub use env::{ApiConfig, Environment};

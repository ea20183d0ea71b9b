pub mod config;
pub mod error;
pub mod finance;
pub mod llm;
pub mod server;
pub mod weather;

pub use error::{Error, Result};

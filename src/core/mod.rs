//! Core crate types and utilities

pub mod types;
pub mod error;
pub mod logging;
pub mod editing;

pub use types::*;
pub use error::Error;
pub use editing::EditingFlag;

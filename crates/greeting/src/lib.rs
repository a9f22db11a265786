//! Greeting payload for the greeting service.
//!
//! This crate provides:
//! - `GreetingResponse`, the single JSON entity served on `/`
//! - `encode`, the explicit JSON encode step used by the HTTP layer
//! - `GreetingError` for encoding failures

pub mod error;
pub mod response;

pub use error::{GreetingError, Result};
pub use response::{GREETING_MESSAGE, GreetingResponse, encode};

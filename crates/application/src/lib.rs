//! Application layer - Use cases and orchestration
//!
//! Defines the port the weather provider adapter implements and the
//! use cases the HTTP layer calls into.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;

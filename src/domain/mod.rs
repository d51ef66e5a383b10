//! Domain layer - Pure business abstractions
//!
//! This layer contains no runtime dependencies (no tokio, no storage).
//! Only trait definitions and domain error types.

pub mod errors;
pub mod repositories;

pub use errors::{DomainError, FieldViolation, ValidationError};
pub use repositories::*;

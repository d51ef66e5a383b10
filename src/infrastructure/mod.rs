//! Infrastructure layer - Runtime implementations
//!
//! This layer contains:
//! - Configuration loading (config)
//! - Repository implementations (repositories)
//! - Seed data (seed)
//! - Application state (state)

pub mod config;
pub mod repositories;
pub mod seed;
pub mod state;

pub use repositories::*;
pub use state::AppState;

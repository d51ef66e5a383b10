//! Services Layer
//!
//! Business logic behind the service log screens: validation, draft autosave
//! and recovery, submission, search and weekly stats. Called directly by the
//! UI-facing `api` module.

pub mod autosave;
pub mod draft_resume;
pub mod form_session;
pub mod ids;
pub mod log_service;
pub mod stats_service;
pub mod submission;
pub mod validation;

// Re-export for convenience
pub use autosave::SaveStatus;
pub use draft_resume::{ResumePrompt, filter_drafts, find_resumable, latest_of};
pub use form_session::FormSession;
pub use log_service::filter_logs;
pub use stats_service::{WeeklyStats, weekly_stats};
pub use submission::SessionMode;

//! UI-facing callback surface.
//!
//! Thin functions over [`AppState`](crate::infrastructure::AppState) that the
//! presentational layer calls from its tables, dialogs and forms.

pub mod drafts;
pub mod logs;

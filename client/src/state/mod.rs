//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`ui` for the theme, `search` for the query
//! and results) so components depend on small focused models.

pub mod search;
pub mod ui;

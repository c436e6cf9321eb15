//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped fetches and view state and delegates dialogs
//! to `components`.

pub mod dashboard;
pub mod guide;
pub mod lead;

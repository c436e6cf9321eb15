//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own SQL and row decoding so route handlers can stay
//! focused on request parsing and status-code translation.

pub mod leads;
pub mod transcripts;

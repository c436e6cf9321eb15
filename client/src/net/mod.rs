//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the server's JSON endpoints. Wire types are shared with the
//! server through the `records` crate.

pub mod api;

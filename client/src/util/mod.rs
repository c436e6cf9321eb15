//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `web` isolates browser APIs (clock, clipboard) from components. `palette`
//! and `guide_content` are pure data so they can be tested natively.

pub mod guide_content;
pub mod palette;
pub mod web;

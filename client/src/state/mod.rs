//! Client-side view state.
//!
//! DESIGN
//! ======
//! Plain structs held in `RwSignal`s. Domain state machines (editor, browser)
//! come from `records`; these modules only cover presentation concerns.

pub mod guide;
pub mod query;
pub mod toasts;

//! Utility helpers shared across site sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from section
//! components so the arithmetic stays testable without a DOM.

pub mod map_link;
pub mod scroll;

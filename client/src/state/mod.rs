//! Component-local state machines.
//!
//! DESIGN
//! ======
//! Each section owns its state exclusively; nothing here is shared through
//! context. Keeping the transitions in plain structs lets them be tested
//! without a reactive runtime, and components wrap them in `RwSignal`.

pub mod contact;
pub mod image;
pub mod nav;

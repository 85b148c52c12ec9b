//! Route-level pages.
//!
//! ARCHITECTURE
//! ============
//! Pages only assemble sections; rendering details live in `components`.

pub mod home;
pub mod not_found;

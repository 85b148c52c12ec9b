//! Static site copy.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything the sections render that is not user input lives here as
//! immutable `'static` data, defined once at startup.

pub mod business;
pub mod nav;
pub mod services;

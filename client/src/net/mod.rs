//! Outbound calls made by the page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site is static; the contact form is the only thing that would talk to
//! another service. Its collaborator seam lives here so the form component
//! only sees `Result<(), ContactError>`.

pub mod contact;

//! Page sections and the reusable pieces they share.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections render static `content` and keep whatever state they need to
//! themselves. The only cross-section coupling is the set of `SectionId`
//! anchors handed to the smooth-scroll helper.

pub mod contact_form;
pub mod footer;
pub mod hero;
pub mod location_panel;
pub mod nav_bar;
pub mod resilient_image;
pub mod services_list;

//! # herald-check
//!
//! Structural validation and content-integrity checks for email HTML.
//!
//! Both halves are pure functions of their inputs:
//! - [`validate`] runs six independent rule checks against one document and
//!   a [`RequirementsBundle`](herald_core::RequirementsBundle).
//! - [`check_integrity`] compares an original document against an
//!   AI-modified candidate and decides whether the edit preserved content.
//!
//! All matching is substring or regex based. "Present" means "appears
//! anywhere in the HTML"; nothing here builds a DOM.

pub mod html;
pub mod integrity;
pub mod validator;

pub use integrity::check_integrity;
pub use validator::validate;

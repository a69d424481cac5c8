//! Forms - contact form logic for the Lumen site
//!
//! This crate provides support for:
//! - Per-field validation rules with the site's inline error copy
//! - Whole-form validation collecting every failure
//! - Simulated submission against a flaky gateway
//! - Session-scoped draft autosave and a message character counter

mod counter;
mod draft;
mod error;
mod form;
mod rules;

pub use counter::*;
pub use draft::*;
pub use error::*;
pub use form::*;
pub use rules::*;

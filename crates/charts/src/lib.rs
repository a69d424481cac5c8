//! Charts - headless chart rendering for the Lumen site
//!
//! This crate provides support for:
//! - Generating bounded random-walk sample data
//! - Projecting scalar series onto surface coordinates
//! - Drawing line, area, bar, and donut charts against an abstract surface
//! - A registry of live charts with the update/resize/redraw protocol
//! - A periodic live-data feed with an explicit stop lifecycle
//! - A reveal (fade-in) animation helper
//!
//! The drawing surface is a capability trait ([`Surface`]) exposing only the
//! primitives the pipeline uses, so everything here runs and tests without a
//! real display.

mod anim;
mod error;
mod feed;
mod generate;
mod model;
mod project;
mod registry;
mod render;
mod surface;

pub use anim::*;
pub use error::*;
pub use feed::*;
pub use generate::*;
pub use model::*;
pub use project::*;
pub use registry::*;
pub use render::*;
pub use surface::*;

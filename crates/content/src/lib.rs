//! Headless browsing logic for the marketing site's blog and portfolio
//! pages: category filters, free-text search, load-more pagination,
//! reading-time estimates and social share links.

mod filter;
mod paging;
mod post;
mod share;

pub use filter::*;
pub use paging::*;
pub use post::*;
pub use share::*;

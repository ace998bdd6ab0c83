//! Job postings: page context from the content pipeline and the catalog that
//! serves it.

mod catalog;
mod context;
mod server_fns;

pub use catalog::*;
pub use context::*;
pub use server_fns::*;

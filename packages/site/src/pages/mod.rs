//! Site pages

mod contact;
mod job;
mod not_found;

pub use contact::*;
pub use job::*;
pub use not_found::*;

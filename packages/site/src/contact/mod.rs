//! Contact form: field state, validation, the submission state machine and
//! the form backend client.

mod encode;
mod form;
mod machine;
mod server_fns;
mod validation;

#[cfg(not(target_arch = "wasm32"))]
mod client;

#[cfg(not(target_arch = "wasm32"))]
pub use client::*;
pub use encode::*;
pub use form::*;
pub use machine::*;
pub use server_fns::*;
pub use validation::*;

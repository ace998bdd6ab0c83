//! Reusable UI components

mod button;
mod contact_form;
mod error_toaster;
mod input;
mod layout;

pub use button::*;
pub use contact_form::*;
pub use error_toaster::*;
pub use input::*;
pub use layout::*;

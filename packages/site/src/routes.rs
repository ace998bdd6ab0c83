//! Route definitions for the site

use dioxus::prelude::*;

use crate::pages::{Contact, Job, NotFound};

/// All site routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Contact {})]
    #[route("/contact")]
    Contact {},

    #[route("/careers/:board_code")]
    Job { board_code: String },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

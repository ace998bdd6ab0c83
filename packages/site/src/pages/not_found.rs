//! Not-found page

use dioxus::prelude::*;

use crate::routes::Route;

/// Catch-all route
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "No route matched");

    rsx! {
        NotFoundView {}
    }
}

#[component]
pub fn NotFoundView() -> Element {
    rsx! {
        div {
            class: "min-h-screen flex flex-col items-center justify-center text-center px-6",
            h1 { class: "text-4xl font-bold text-gray-900 mb-4", "Page not found" }
            p { class: "text-gray-600 mb-8", "The page you were looking for doesn't exist." }
            Link {
                to: Route::Contact {},
                class: "text-teal-600 hover:text-teal-700",
                "Get in touch"
            }
        }
    }
}

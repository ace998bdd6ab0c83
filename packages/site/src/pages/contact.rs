//! Contact page

use dioxus::prelude::*;

use crate::components::{ContactForm, Layout};

/// Contact page - the contact form inside the shared layout
#[component]
pub fn Contact() -> Element {
    rsx! {
        Layout {
            title: "Contact Us",
            hero: rsx! {
                p {
                    class: "mt-6 max-w-xl text-lg text-gray-300",
                    "Tell us about your project and we'll be in touch."
                }
            },
            ContactForm {}
        }
    }
}

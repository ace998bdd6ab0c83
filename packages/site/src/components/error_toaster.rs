//! Inline error display for the contact form

use dioxus::prelude::*;

use crate::contact::ErrorState;

/// Renders every error message on one line, separated by dashes.
/// Renders nothing when there are no errors.
#[component]
pub fn ErrorToaster(errors: Option<ErrorState>) -> Element {
    let Some(errors) = errors else {
        return rsx! {};
    };
    let last = errors.len().saturating_sub(1);

    rsx! {
        span {
            class: "w-full self-center text-center",
            role: "alert",
            for (i, message) in errors.messages().enumerate() {
                p {
                    key: "{i}",
                    class: "inline text-red-600",
                    "{message} "
                    if i != last {
                        span { "\u{a0}-\u{a0}" }
                    }
                }
            }
        }
    }
}

//! Call-to-action buttons

use dioxus::prelude::*;

const BUTTON_CLASS: &str = "inline-block px-10 py-4 bg-teal-500 text-white text-sm font-bold uppercase tracking-widest border border-teal-500 hover:bg-white hover:text-teal-500 transition-colors disabled:opacity-50";

/// Form button. Renders as a plain `button` unless `submit` is set.
#[component]
pub fn Button(
    #[props(default)] submit: bool,
    #[props(default)] disabled: bool,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let button_type = if submit { "submit" } else { "button" };

    rsx! {
        button {
            r#type: "{button_type}",
            class: "{BUTTON_CLASS} {class}",
            disabled: disabled,
            {children}
        }
    }
}

/// Button-styled link that opens `href` in a new browsing context
#[component]
pub fn ExternalButton(
    href: String,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    rsx! {
        a {
            href: "{href}",
            target: "_blank",
            rel: "noopener noreferrer",
            class: "{BUTTON_CLASS} {class}",
            {children}
        }
    }
}

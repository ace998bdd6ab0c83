//! Shared page layout

use dioxus::prelude::*;

/// Page shell: site header with the page title and hero content, followed by
/// the page body. `tall_header` stretches the header to nearly fill small
/// screens.
#[component]
pub fn Layout(
    title: String,
    #[props(default)] tall_header: bool,
    hero: Element,
    children: Element,
) -> Element {
    let header_height = if tall_header {
        "min-h-[93vh] md:min-h-0"
    } else {
        ""
    };

    rsx! {
        div {
            class: "min-h-screen bg-white text-gray-900",

            header {
                class: "bg-gray-900 text-white flex flex-col items-center justify-center text-center px-6 py-16 md:py-24 {header_height}",
                h1 {
                    class: "text-4xl md:text-6xl font-bold",
                    "{title}"
                }
                {hero}
            }

            {children}

            footer {
                class: "border-t border-gray-200 py-8 text-center text-sm text-gray-500",
                "\u{a9} Third and Grove"
            }
        }
    }
}

/// Full-width page section
#[component]
pub fn FullWidthSection(
    #[props(default)] class: String,
    children: Element,
) -> Element {
    rsx! {
        section {
            class: "w-full {class}",
            {children}
        }
    }
}

//! Contact form inputs

use dioxus::prelude::*;

use crate::contact::ContactField;

const FIELD_CLASS: &str = "w-full max-w-md md:max-w-none mb-4 px-4 py-3 border border-gray-300 text-base focus:outline-none focus:border-teal-500";

/// Single-line input bound to one contact field
#[component]
pub fn Input(field: ContactField, value: String, oninput: EventHandler<FormEvent>) -> Element {
    rsx! {
        input {
            r#type: field.input_type(),
            name: field.key(),
            placeholder: field.placeholder(),
            "aria-label": field.label(),
            value: "{value}",
            class: FIELD_CLASS,
            oninput: move |e| oninput.call(e)
        }
    }
}

/// Multi-line message box
#[component]
pub fn TextArea(field: ContactField, value: String, oninput: EventHandler<FormEvent>) -> Element {
    rsx! {
        textarea {
            name: field.key(),
            placeholder: field.placeholder(),
            "aria-label": field.label(),
            value: "{value}",
            rows: "6",
            "data-cy": "messageField",
            class: "{FIELD_CLASS} resize-none",
            oninput: move |e| oninput.call(e)
        }
    }
}

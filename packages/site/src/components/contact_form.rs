//! Contact form component

use dioxus::prelude::*;

use super::{Button, ErrorToaster, Input, TextArea};
use crate::contact::{submit_contact, ContactController, ContactField, SubmitAttempt};

/// Contact form: four inputs in a two-column grid on larger screens, a message
/// box, the send button and the inline error display.
#[component]
pub fn ContactForm() -> Element {
    let mut contact = use_signal(ContactController::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let attempt = contact.write().begin_submit();
        if let SubmitAttempt::Send(form) = attempt {
            spawn(async move {
                let result = submit_contact(form).await;
                contact.write().finish_submit(result);
            });
        }
    };

    let state = contact();
    let form = state.form();

    rsx! {
        main {
            class: "mx-auto mt-8 w-screen md:w-[980px] flex flex-col",

            form {
                name: "contact",
                method: "POST",
                "data-cy": "contactForm",
                onsubmit: handle_submit,

                input { r#type: "hidden", name: "contact", value: "contact" }

                span {
                    class: "flex flex-col items-center mx-12 md:grid md:grid-cols-[repeat(2,480px)] md:gap-x-4 md:mx-0 md:items-stretch",
                    for field in ContactField::INPUTS {
                        Input {
                            key: "{field:?}",
                            field: field,
                            value: form.get(field).to_string(),
                            oninput: move |e: FormEvent| contact.write().update_input(field, e.value())
                        }
                    }
                }

                span {
                    class: "flex flex-col items-center mx-12 md:inline md:mx-0",
                    TextArea {
                        field: ContactField::Comments,
                        value: form.comments.clone(),
                        oninput: move |e: FormEvent| {
                            contact.write().update_input(ContactField::Comments, e.value())
                        }
                    }
                }

                span {
                    class: "flex justify-center mt-16",
                    Button {
                        submit: true,
                        if state.is_submitting() {
                            "sending..."
                        } else {
                            "send"
                        }
                    }
                }

                span {
                    class: "flex flex-col justify-center mt-16",
                    ErrorToaster { errors: state.errors().cloned() }
                }
            }
        }
    }
}

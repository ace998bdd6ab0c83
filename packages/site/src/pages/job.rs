//! Job posting page

use dioxus::prelude::*;

use crate::components::{ExternalButton, FullWidthSection, Layout};
use crate::jobs::{get_job, JobPosting};
use crate::pages::NotFoundView;

/// Job page - loads the posting for `board_code` and renders it
#[component]
pub fn Job(board_code: String) -> Element {
    let posting = use_server_future(move || get_job(board_code.clone()))?;

    let page = match &*posting.read() {
        Some(Ok(Some(found))) => rsx! {
            JobTemplate { posting: found.clone() }
        },
        Some(Ok(None)) => rsx! {
            NotFoundView {}
        },
        Some(Err(e)) => rsx! {
            div {
                class: "max-w-2xl mx-auto my-16 bg-red-50 border border-red-200 text-red-700 p-4",
                "Error loading job: {e}"
            }
        },
        None => rsx! {
            JobLoading {}
        },
    };
    page
}

/// Placeholder shown while the posting is fetched
#[component]
pub fn JobLoading() -> Element {
    rsx! {
        p {
            class: "py-24 text-center text-sm uppercase tracking-widest text-gray-400 animate-pulse",
            role: "status",
            "Loading job..."
        }
    }
}

/// Renders one job posting.
///
/// The description is injected as-is: it is pipeline-produced HTML (see
/// [`crate::jobs::TrustedHtml`]). "Apply Now" opens the applicant-tracking page
/// in a new tab.
#[component]
pub fn JobTemplate(posting: JobPosting) -> Element {
    let job = &posting.job;
    let description = job.description.as_str();

    rsx! {
        Layout {
            title: job.title.clone(),
            tall_header: true,
            hero: rsx! {
                ExternalButton {
                    href: posting.apply_url.clone(),
                    class: "mt-16",
                    "Apply Now"
                }
            },
            FullWidthSection {
                div {
                    class: "job-description max-w-3xl mx-auto px-6 py-8 md:py-24 font-light tracking-wide",
                    div { dangerous_inner_html: "{description}" }
                }
            }
        }
    }
}

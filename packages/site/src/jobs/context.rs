//! Page context for a single job posting

use serde::{Deserialize, Serialize};

/// HTML produced by the site's own content pipeline.
///
/// The markup is rendered verbatim, so this type must only ever wrap content
/// from the build pipeline. Anything user-supplied has to be sanitized before
/// it is wrapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    pub fn from_pipeline(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Build-time data describing one job posting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobContext {
    pub title: String,
    pub description: TrustedHtml,
    /// Applicant-tracking code identifying where to apply
    pub board_code: String,
}

/// A job ready to render, with its "Apply Now" target resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub job: JobContext,
    pub apply_url: String,
}

impl JobPosting {
    pub fn new(job: JobContext, apply_base_url: &str) -> Self {
        let apply_url = apply_url(apply_base_url, &job.board_code);
        Self { job, apply_url }
    }
}

/// `{base}/apply/{board_code}` on the applicant-tracking host.
///
/// The board code is inserted as-is; codes from the applicant-tracking system
/// are alphanumeric.
pub fn apply_url(base_url: &str, board_code: &str) -> String {
    format!("{}/apply/{}", base_url.trim_end_matches('/'), board_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_APPLY_BASE_URL;

    #[test]
    fn apply_url_contains_board_code() {
        assert_eq!(
            apply_url(DEFAULT_APPLY_BASE_URL, "2zMk3RqXyB"),
            "https://thirdandgrove.applytojob.com/apply/2zMk3RqXyB"
        );
    }

    #[test]
    fn apply_url_keeps_board_code_verbatim() {
        let url = apply_url(DEFAULT_APPLY_BASE_URL, "job+42");

        assert!(url.ends_with("/apply/job+42"));
    }

    #[test]
    fn apply_url_ignores_trailing_slash() {
        assert_eq!(
            apply_url("https://jobs.example.com/", "abc"),
            "https://jobs.example.com/apply/abc"
        );
    }

    #[test]
    fn description_deserializes_as_plain_string() {
        let job: JobContext = serde_json::from_str(
            r#"{"title":"Engineer","description":"<p>Hi</p>","board_code":"x1"}"#,
        )
        .unwrap();

        assert_eq!(job.description.as_str(), "<p>Hi</p>");
    }
}

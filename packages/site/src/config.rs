//! Site configuration loaded from environment variables

use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context, Result};
use url::Url;

pub const DEFAULT_SITE_URL: &str = "http://localhost:8080";
pub const DEFAULT_APPLY_BASE_URL: &str = "https://thirdandgrove.applytojob.com";
pub const DEFAULT_JOBS_PATH: &str = "content/jobs.json";
pub const DEFAULT_FORM_TIMEOUT_SECS: u64 = 10;

static CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Site configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Public origin of the site
    pub site_url: String,
    /// Form backend that receives contact submissions. The site itself only
    /// answers GET, so this must point at an external backend.
    pub form_endpoint: String,
    pub form_timeout: Duration,
    /// Applicant-tracking host used to build "Apply Now" links
    pub apply_base_url: String,
    /// JSON file holding the job catalog
    pub jobs_path: PathBuf,
}

impl SiteConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let site_url = lookup("SITE_URL").unwrap_or_else(|| DEFAULT_SITE_URL.to_string());
        Url::parse(&site_url).context("SITE_URL must be an absolute URL")?;

        let form_endpoint = lookup("FORM_ENDPOINT").context("FORM_ENDPOINT must be set")?;
        Url::parse(&form_endpoint).context("FORM_ENDPOINT must be an absolute URL")?;

        let form_timeout_secs: u64 = lookup("FORM_TIMEOUT_SECS")
            .unwrap_or_else(|| DEFAULT_FORM_TIMEOUT_SECS.to_string())
            .parse()
            .context("FORM_TIMEOUT_SECS must be a whole number of seconds")?;

        let apply_base_url = lookup("APPLY_BASE_URL")
            .unwrap_or_else(|| DEFAULT_APPLY_BASE_URL.to_string());
        Url::parse(&apply_base_url).context("APPLY_BASE_URL must be an absolute URL")?;

        Ok(Self {
            site_url,
            form_endpoint,
            form_timeout: Duration::from_secs(form_timeout_secs),
            apply_base_url,
            jobs_path: lookup("JOBS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_JOBS_PATH)),
        })
    }
}

/// Install the process-wide configuration. Call this at startup.
pub fn init(config: SiteConfig) {
    CONFIG.set(config).ok();
}

/// Get the configuration installed at startup
pub fn get() -> Option<&'static SiteConfig> {
    CONFIG.get()
}

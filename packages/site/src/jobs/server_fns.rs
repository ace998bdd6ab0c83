//! Server functions for job pages

use dioxus::prelude::*;

use super::context::JobPosting;

static CATALOG: super::JobCatalogCache = super::JobCatalogCache::new();

/// Look up one job by its applicant-tracking board code
#[server]
pub async fn get_job(board_code: String) -> Result<Option<JobPosting>, ServerFnError> {
    let config =
        crate::config::get().ok_or_else(|| ServerFnError::new("Site configuration not loaded"))?;
    let catalog = CATALOG.get_or_load(&config.jobs_path).map_err(|e| {
        tracing::error!(error = %e, "Failed to load job catalog");
        ServerFnError::new(e.to_string())
    })?;

    let posting = catalog.posting(&board_code, &config.apply_base_url);
    if posting.is_none() {
        tracing::debug!(%board_code, "No job for board code");
    }
    Ok(posting)
}

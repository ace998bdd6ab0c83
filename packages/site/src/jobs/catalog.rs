//! Job catalog loaded from the content pipeline's JSON export

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use super::context::{JobContext, JobPosting};

/// Error type for catalog loading
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read job catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid job catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobCatalog {
    jobs: Vec<JobContext>,
}

impl JobCatalog {
    pub fn new(jobs: Vec<JobContext>) -> Self {
        Self { jobs }
    }

    /// Read a JSON array of job records from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&raw)?;
        tracing::debug!(path = %path.display(), jobs = catalog.len(), "Job catalog loaded");
        Ok(catalog)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        Ok(Self::new(serde_json::from_str(raw)?))
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn jobs(&self) -> &[JobContext] {
        &self.jobs
    }

    pub fn find(&self, board_code: &str) -> Option<&JobContext> {
        self.jobs.iter().find(|job| job.board_code == board_code)
    }

    pub fn posting(&self, board_code: &str, apply_base_url: &str) -> Option<JobPosting> {
        self.find(board_code)
            .cloned()
            .map(|job| JobPosting::new(job, apply_base_url))
    }
}

/// Process-wide catalog, read from disk on first use and kept afterwards.
/// A failed load is not cached, so the next request tries again.
#[derive(Debug, Default)]
pub struct JobCatalogCache {
    catalog: OnceLock<JobCatalog>,
}

impl JobCatalogCache {
    pub const fn new() -> Self {
        Self {
            catalog: OnceLock::new(),
        }
    }

    pub fn get_or_load(&self, path: impl AsRef<Path>) -> Result<&JobCatalog, CatalogError> {
        if let Some(catalog) = self.catalog.get() {
            return Ok(catalog);
        }
        let loaded = JobCatalog::load(path)?;
        Ok(self.catalog.get_or_init(|| loaded))
    }
}

//! Repository inspectors and their registry.

mod git;

pub use git::{GitInspector, GIT_PROVIDER};

use crate::error::MetadataError;
use serde::Serialize;
use std::path::Path;

/// Metadata describing a checkout, produced by a repository inspector.
///
/// All fields are required; the value is consumed read-only and discarded
/// once properties have been computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteMetadata {
    /// Current branch name (or the revision id when detached).
    pub branch: String,
    /// Full revision identifier, e.g. a commit SHA.
    pub revision: String,
    /// Whether any uncommitted or untracked changes are present.
    pub uncommitted_changes_present: bool,
    /// Non-blank `/`-delimited components of the remote path, in order.
    pub remote_path_segments: Vec<String>,
}

/// Capability to inspect a checkout for a particular SCM type.
pub trait RepositoryInspector {
    /// Provider name this inspector answers for, e.g. `git`.
    fn provider(&self) -> &str;

    /// Inspect the checkout rooted at (or above) `directory`.
    ///
    /// `Ok(None)` means the directory is not managed by this inspector's SCM
    /// type; an `Err` is an unexpected internal failure and is fatal for the
    /// invocation. `remote_url` is the provider-specific part of the
    /// connection string and is the source of the remote path segments.
    fn inspect(
        &self,
        directory: &Path,
        remote_url: &str,
    ) -> Result<Option<RemoteMetadata>, MetadataError>;
}

/// Insertion-ordered collection of repository inspectors.
///
/// Resolution walks inspectors in registration order, so the first
/// applicable inspector wins deterministically.
pub struct InspectorRegistry {
    inspectors: Vec<Box<dyn RepositoryInspector>>,
}

impl InspectorRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inspectors: Vec::new(),
        }
    }

    /// Registry with all built-in inspectors registered.
    #[must_use]
    pub fn with_default_inspectors() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(GitInspector));
        registry
    }

    pub fn register(&mut self, inspector: Box<dyn RepositoryInspector>) {
        self.inspectors.push(inspector);
    }

    /// Resolve metadata through the first applicable inspector matching
    /// `provider` (case-insensitively).
    ///
    /// Fails with `UnsupportedProvider` when no inspector answers for the
    /// provider at all, and with `ProviderMismatch` when at least one does
    /// but none found the directory to be under its SCM's control.
    pub fn resolve(
        &self,
        provider: &str,
        directory: &Path,
        remote_url: &str,
    ) -> Result<RemoteMetadata, MetadataError> {
        let mut found_matching_inspector = false;

        for inspector in &self.inspectors {
            if !inspector.provider().eq_ignore_ascii_case(provider) {
                continue;
            }
            found_matching_inspector = true;

            if let Some(metadata) = inspector.inspect(directory, remote_url)? {
                return Ok(metadata);
            }
        }

        if found_matching_inspector {
            Err(MetadataError::ProviderMismatch(provider.to_string()))
        } else {
            Err(MetadataError::UnsupportedProvider(provider.to_string()))
        }
    }
}

impl Default for InspectorRegistry {
    fn default() -> Self {
        Self::with_default_inspectors()
    }
}

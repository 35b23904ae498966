//! Git-backed repository inspector.

use super::{RemoteMetadata, RepositoryInspector};
use crate::error::MetadataError;
use crate::remote_path::{chunk_path, extract_path};
use git2::{ErrorCode, Repository, StatusOptions, Statuses};
use std::path::Path;
use tracing::debug;

/// Provider name answered by [`GitInspector`].
pub const GIT_PROVIDER: &str = "git";

/// Inspects git checkouts via libgit2.
///
/// The repository is discovered by walking upward from the given directory,
/// so inspection from any subdirectory of a checkout works.
pub struct GitInspector;

impl RepositoryInspector for GitInspector {
    fn provider(&self) -> &str {
        GIT_PROVIDER
    }

    fn inspect(
        &self,
        directory: &Path,
        remote_url: &str,
    ) -> Result<Option<RemoteMetadata>, MetadataError> {
        let repo = match Repository::discover(directory) {
            Ok(repo) => repo,
            Err(e) if e.code() == ErrorCode::NotFound => {
                debug!(
                    directory = %directory.display(),
                    "not a git repository (or any of the parent directories)"
                );
                return Ok(None);
            }
            Err(e) => return Err(MetadataError::inspection(e)),
        };

        let head = repo.head().map_err(MetadataError::inspection)?;
        let commit = head.peel_to_commit().map_err(MetadataError::inspection)?;
        let revision = commit.id().to_string();

        // Short branch name, or the revision itself when HEAD is detached.
        let branch = if head.is_branch() {
            head.shorthand().unwrap_or(revision.as_str()).to_string()
        } else {
            revision.clone()
        };

        let mut status_options = StatusOptions::new();
        status_options
            .include_untracked(true)
            .recurse_untracked_dirs(true);
        let statuses = repo
            .statuses(Some(&mut status_options))
            .map_err(MetadataError::inspection)?;
        let uncommitted_changes_present = !statuses.is_empty();
        log_changed_paths(&statuses);

        let remote_path_segments = chunk_path(&extract_path(remote_url));

        Ok(Some(RemoteMetadata {
            branch,
            revision,
            uncommitted_changes_present,
            remote_path_segments,
        }))
    }
}

fn log_changed_paths(statuses: &Statuses<'_>) {
    if statuses.is_empty() {
        debug!("no uncommitted or untracked files");
        return;
    }

    let mut paths: Vec<String> = statuses
        .iter()
        .filter_map(|entry| entry.path().map(ToOwned::to_owned))
        .collect();
    paths.sort();

    debug!("{} file(s) differ from HEAD", paths.len());
    for (position, path) in paths.iter().enumerate() {
        debug!("  {position}) {path}");
    }
}

//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to
//! `anyhow::Error` via the `?` operator. Wrapped collaborator errors keep
//! their message intact so the CLI surfaces the underlying cause verbatim.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::state::STATE_FILE;

// ── Cleanup errors ────────────────────────────────────────────────────────────

/// Errors from listing and deleting leftover cloud resources.
#[derive(Debug, Error)]
pub enum CleanupError {
    #[error("Listing {kind}s: {cause}")]
    Listing {
        kind: &'static str,
        cause: anyhow::Error,
    },

    #[error("Deleting {kind} {name}: {cause}")]
    Deleting {
        kind: &'static str,
        name: String,
        cause: anyhow::Error,
    },
}

// ── State errors ──────────────────────────────────────────────────────────────

/// Errors from loading the persisted deployment state.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("no environment found in {}: {file} is missing", .dir.display(), file = STATE_FILE)]
    EnvironmentNotFound { dir: PathBuf },

    #[error("malformed state file {}: {cause}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        cause: serde_json::Error,
    },
}

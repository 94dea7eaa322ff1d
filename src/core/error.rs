//! Tenant store errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TenantError {
    /// Tier name is not in the tier table.
    #[error("invalid tier '{0}' (expected one of: small, standard, large)")]
    InvalidTier(String),

    /// No directory exists for the tenant.
    #[error("tenant '{0}' not found")]
    NotFound(String),

    #[error("{op} {}: {source}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TenantError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            source,
        }
    }
}

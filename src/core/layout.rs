//! GitOps tree layout — where tenant and ArgoCD manifests live on disk.

use super::codegen;
use super::types::ManifestKind;
use crate::resources::{self, ARGOCD_PATH, TENANTS_PATH};
use std::path::{Path, PathBuf};

/// Filesystem layout rooted at a base directory (the CLI's `--root`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/gitops/tenants`
    pub fn tenants_dir(&self) -> PathBuf {
        self.root.join(TENANTS_PATH)
    }

    /// `<root>/gitops/tenants/<tenant>`
    pub fn tenant_dir(&self, tenant: &str) -> PathBuf {
        self.tenants_dir().join(tenant)
    }

    /// `<root>/gitops/argocd`
    pub fn argocd_dir(&self) -> PathBuf {
        self.root.join(ARGOCD_PATH)
    }

    /// `<root>/gitops/argocd/application-<tenant>.yaml`
    pub fn application_path(&self, tenant: &str) -> PathBuf {
        self.argocd_dir().join(resources::application::file_name(tenant))
    }

    /// Absolute location of one manifest of a tenant.
    pub fn manifest_path(&self, kind: ManifestKind, tenant: &str) -> PathBuf {
        self.root.join(codegen::relative_path(kind, tenant))
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(".")
    }
}

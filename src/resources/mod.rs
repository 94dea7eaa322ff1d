//! Manifest renderers — one module per Kubernetes/ArgoCD resource kind.
//!
//! Every renderer is a pure function of the tenant name (and, for the
//! deployment, the tier profile). Tenant names are substituted verbatim;
//! nothing here inspects or escapes them.

pub mod application;
pub mod configmap;
pub mod deployment;
pub mod namespace;
pub mod service;

/// Tenant manifest directories live under this path.
pub const TENANTS_PATH: &str = "gitops/tenants";

/// ArgoCD application manifests live under this path.
pub const ARGOCD_PATH: &str = "gitops/argocd";

/// Container image run by every tenant deployment.
pub const IMAGE: &str = "nginx:1.21";

/// Port the container listens on and the service exposes.
pub const CONTAINER_PORT: u16 = 80;

/// GitOps repository ArgoCD syncs from.
pub const REPO_URL: &str = "https://github.com/moahmed90/multi-tenant-platform";

/// Branch ArgoCD tracks.
pub const TARGET_REVISION: &str = "main";

/// Kubernetes namespace owned by a tenant.
pub fn tenant_namespace(tenant: &str) -> String {
    format!("tenant-{tenant}")
}

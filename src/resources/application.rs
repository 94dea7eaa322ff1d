//! ArgoCD `Application` manifest pointing at the tenant's GitOps directory.
//!
//! Sync is automated with prune and self-heal, and the namespace is created
//! on sync. Replica drift on the deployment is ignored.

use super::{tenant_namespace, REPO_URL, TARGET_REVISION, TENANTS_PATH};

/// ArgoCD application name for a tenant.
pub fn application_name(tenant: &str) -> String {
    format!("{tenant}-tenant")
}

/// File name of the application manifest inside the ArgoCD directory.
pub fn file_name(tenant: &str) -> String {
    format!("application-{tenant}.yaml")
}

pub fn render(tenant: &str) -> String {
    let name = application_name(tenant);
    let namespace = tenant_namespace(tenant);
    format!(
        r#"---
apiVersion: argoproj.io/v1alpha1
kind: Application
metadata:
  name: {name}
  namespace: argocd
  labels:
    tenant: {tenant}
  finalizers:
    - resources-finalizer.argocd.argoproj.io
spec:
  project: default
  source:
    repoURL: {REPO_URL}
    targetRevision: {TARGET_REVISION}
    path: {TENANTS_PATH}/{tenant}
  destination:
    server: https://kubernetes.default.svc
    namespace: {namespace}
  syncPolicy:
    automated:
      prune: true
      selfHeal: true
    syncOptions:
      - CreateNamespace=true
  ignoreDifferences:
    - group: apps
      kind: Deployment
      jsonPointers:
        - /spec/replicas
"#
    )
}

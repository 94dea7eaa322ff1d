//! tenantctl — multi-tenant provisioning for GitOps.
//!
//! Renders per-tenant Kubernetes and ArgoCD manifests from built-in
//! templates, sized by a fixed tier table, and keeps them in a `gitops/`
//! tree that an external sync agent deploys.

pub mod cli;
pub mod core;
pub mod resources;
pub mod tripwire;

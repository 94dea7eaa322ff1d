//! Manifest generation — dispatch to resource renderers.
//!
//! Produces the full manifest set for a tenant: four files in the tenant
//! directory plus the ArgoCD application, in write order.

use super::types::{ManifestKind, RenderedManifest, TierProfile};
use crate::resources::{self, ARGOCD_PATH, TENANTS_PATH};
use std::path::PathBuf;

/// Render one manifest kind for a tenant.
pub fn render(kind: ManifestKind, tenant: &str, profile: &TierProfile) -> String {
    match kind {
        ManifestKind::Namespace => resources::namespace::render(tenant),
        ManifestKind::Deployment => resources::deployment::render(tenant, profile),
        ManifestKind::Service => resources::service::render(tenant),
        ManifestKind::ConfigMap => resources::configmap::render(tenant),
        ManifestKind::Application => resources::application::render(tenant),
    }
}

/// Path of a manifest kind, relative to the layout root.
pub fn relative_path(kind: ManifestKind, tenant: &str) -> PathBuf {
    let tenant_dir = PathBuf::from(TENANTS_PATH).join(tenant);
    match kind {
        ManifestKind::Namespace => tenant_dir.join("namespace.yaml"),
        ManifestKind::Deployment => tenant_dir.join("deployment.yaml"),
        ManifestKind::Service => tenant_dir.join("service.yaml"),
        ManifestKind::ConfigMap => tenant_dir.join("configmap.yaml"),
        ManifestKind::Application => {
            PathBuf::from(ARGOCD_PATH).join(resources::application::file_name(tenant))
        }
    }
}

/// Render the complete manifest set for a tenant.
pub fn render_manifest_set(tenant: &str, profile: &TierProfile) -> Vec<RenderedManifest> {
    ManifestKind::ALL
        .iter()
        .map(|&kind| RenderedManifest {
            kind,
            path: relative_path(kind, tenant),
            content: render(kind, tenant, profile),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tiers::TierTable;
    use crate::core::types::TierName;
    use proptest::prelude::*;

    #[test]
    fn test_manifest_set_paths() {
        let table = TierTable::builtin();
        let set = render_manifest_set("acme", table.get(TierName::Standard).unwrap());
        let paths: Vec<_> = set.iter().map(|m| m.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("gitops/tenants/acme/namespace.yaml"),
                PathBuf::from("gitops/tenants/acme/deployment.yaml"),
                PathBuf::from("gitops/tenants/acme/service.yaml"),
                PathBuf::from("gitops/tenants/acme/configmap.yaml"),
                PathBuf::from("gitops/argocd/application-acme.yaml"),
            ]
        );
    }

    #[test]
    fn test_only_deployment_depends_on_tier() {
        let table = TierTable::builtin();
        let small = render_manifest_set("acme", table.get(TierName::Small).unwrap());
        let large = render_manifest_set("acme", table.get(TierName::Large).unwrap());
        for (a, b) in small.iter().zip(&large) {
            if a.kind == ManifestKind::Deployment {
                assert_ne!(a.content, b.content);
            } else {
                assert_eq!(a.content, b.content, "{} differs by tier", a.kind);
            }
        }
    }

    #[test]
    fn test_malformed_names_pass_through() {
        let table = TierTable::builtin();
        let profile = table.get(TierName::Small).unwrap();
        let ns = render(ManifestKind::Namespace, "a b/c: d", profile);
        assert!(ns.contains("name: tenant-a b/c: d\n"));
        let empty = render(ManifestKind::Application, "", profile);
        assert!(empty.contains("name: -tenant\n"));
    }

    proptest! {
        #[test]
        fn prop_tenant_substituted_everywhere(
            name in "[a-z]{2}[0-9][a-z0-9-]{0,28}",
            tier in 0usize..3,
        ) {
            let table = TierTable::builtin();
            let profile = table.get(TierName::ALL[tier]).unwrap();
            for m in render_manifest_set(&name, profile) {
                let doc: serde_yaml_ng::Value = serde_yaml_ng::from_str(&m.content).unwrap();
                prop_assert_eq!(doc["metadata"]["labels"]["tenant"].as_str(), Some(name.as_str()));
                if m.kind != ManifestKind::Application {
                    let ns = format!("tenant-{name}");
                    let actual = if m.kind == ManifestKind::Namespace {
                        doc["metadata"]["name"].as_str()
                    } else {
                        doc["metadata"]["namespace"].as_str()
                    };
                    prop_assert_eq!(actual, Some(ns.as_str()));
                }
            }
        }

        #[test]
        fn prop_render_is_deterministic(name in ".{0,40}", tier in 0usize..3) {
            let table = TierTable::builtin();
            let profile = table.get(TierName::ALL[tier]).unwrap();
            prop_assert_eq!(
                render_manifest_set(&name, profile),
                render_manifest_set(&name, profile)
            );
        }
    }
}

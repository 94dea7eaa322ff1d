//! Drift detection — compare on-disk manifests to a fresh render.

use crate::core::codegen;
use crate::core::layout::Layout;
use crate::core::types::{ManifestKind, TierProfile};
use crate::tripwire::hasher;
use std::path::{Path, PathBuf};

/// A single drift finding.
#[derive(Debug, Clone)]
pub struct DriftFinding {
    pub tenant: String,
    pub kind: ManifestKind,
    pub path: PathBuf,
    pub expected_hash: String,
    pub actual_hash: String,
    pub detail: String,
}

/// Check a single manifest file against the hash of its expected content.
pub fn check_manifest_drift(
    tenant: &str,
    kind: ManifestKind,
    path: &Path,
    expected_hash: &str,
) -> Option<DriftFinding> {
    let finding = |actual_hash: String, detail: String| DriftFinding {
        tenant: tenant.to_string(),
        kind,
        path: path.to_path_buf(),
        expected_hash: expected_hash.to_string(),
        actual_hash,
        detail,
    };

    if !path.is_file() {
        return Some(finding(
            "MISSING".to_string(),
            format!("{} does not exist", path.display()),
        ));
    }

    let actual = hasher::hash_file(path).unwrap_or_else(|e| format!("ERROR:{}", e));
    if actual != expected_hash {
        Some(finding(actual, format!("{} content changed", path.display())))
    } else {
        None
    }
}

/// Check every manifest of a tenant against what `profile` renders to.
pub fn detect_drift(layout: &Layout, tenant: &str, profile: &TierProfile) -> Vec<DriftFinding> {
    codegen::render_manifest_set(tenant, profile)
        .into_iter()
        .filter_map(|m| {
            let path = layout.root().join(&m.path);
            check_manifest_drift(tenant, m.kind, &path, &hasher::hash_string(&m.content))
        })
        .collect()
}

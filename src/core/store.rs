//! Tenant store — materialize, enumerate, and remove tenant manifests.
//!
//! A tenant exists exactly when its directory exists under the tenants root.
//! There is no separate metadata record: the tier is re-derived from the
//! deployment manifest text. Writes are not transactional; a failure part
//! way through `create` leaves whatever was already written.

use super::codegen;
use super::error::TenantError;
use super::layout::Layout;
use super::planner;
use super::prompt::Confirm;
use super::tiers::TierTable;
use super::types::*;
use crate::tripwire::drift::{self, DriftFinding};
use std::path::Path;
use tracing::{debug, info, warn};

/// Replica markers used to reconstruct a tier from deployment text.
const SMALL_MARKER: &str = "replicas: 1";
const LARGE_MARKER: &str = "replicas: 3";

/// File inspected by [`infer_tier`] during `list`.
const DEPLOYMENT_FILE: &str = "deployment.yaml";

pub struct TenantStore<'a> {
    layout: Layout,
    tiers: &'a TierTable,
}

impl<'a> TenantStore<'a> {
    pub fn new(layout: Layout, tiers: &'a TierTable) -> Self {
        Self { layout, tiers }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Whether the tenant's directory exists.
    pub fn exists(&self, tenant: &str) -> bool {
        self.layout.tenant_dir(tenant).is_dir()
    }

    /// Render and write the tenant's manifest set, overwriting existing files.
    pub fn create(&self, tenant: &str, tier: TierName) -> Result<CreateReport, TenantError> {
        let profile = self.tiers.get(tier)?;
        info!(tenant, %tier, "creating tenant manifests");

        let mut written = Vec::new();
        for manifest in codegen::render_manifest_set(tenant, profile) {
            let path = self.layout.root().join(&manifest.path);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| TenantError::io("cannot create dir", parent, e))?;
            }
            std::fs::write(&path, &manifest.content)
                .map_err(|e| TenantError::io("cannot write", &path, e))?;
            debug!(kind = %manifest.kind, path = %path.display(), "wrote manifest");
            written.push(path);
        }

        Ok(CreateReport {
            tenant: tenant.to_string(),
            profile: profile.clone(),
            written,
        })
    }

    /// Plan what `create` would write, without touching the filesystem.
    pub fn plan_create(&self, tenant: &str, tier: TierName) -> Result<ManifestPlan, TenantError> {
        let profile = self.tiers.get(tier)?;
        Ok(planner::plan(&self.layout, tenant, profile))
    }

    /// Remove the tenant directory and its ArgoCD application after the
    /// operator confirms.
    ///
    /// Only the directory decides whether the tenant exists. The directory is
    /// removed first; an error there is returned before the application file
    /// is touched. Nothing is rolled back.
    pub fn delete(
        &self,
        tenant: &str,
        confirm: &mut dyn Confirm,
    ) -> Result<DeleteOutcome, TenantError> {
        let dir = self.layout.tenant_dir(tenant);
        let application = self.layout.application_path(tenant);

        if !self.exists(tenant) {
            return Err(TenantError::NotFound(tenant.to_string()));
        }

        let question = format!(
            "  This will delete:\n   - {}/\n   - {}\n\n  Are you sure? (yes/no): ",
            dir.display(),
            application.display()
        );
        if !confirm.confirm(&question) {
            info!(tenant, "delete cancelled by operator");
            return Ok(DeleteOutcome::Cancelled);
        }

        let removed_dir = if self.exists(tenant) {
            std::fs::remove_dir_all(&dir)
                .map_err(|e| TenantError::io("cannot remove", &dir, e))?;
            debug!(path = %dir.display(), "removed tenant directory");
            true
        } else {
            false
        };

        let removed_application = if application.exists() {
            std::fs::remove_file(&application)
                .map_err(|e| TenantError::io("cannot remove", &application, e))?;
            debug!(path = %application.display(), "removed application");
            true
        } else {
            false
        };

        info!(tenant, removed_dir, removed_application, "tenant deleted");
        Ok(DeleteOutcome::Deleted {
            removed_dir,
            removed_application,
        })
    }

    /// Enumerate tenants, sorted by name, with their reconstructed tier.
    ///
    /// Only non-hidden directories directly under the tenants root count.
    /// A missing root yields no tenants.
    pub fn list(&self) -> Result<Vec<TenantSummary>, TenantError> {
        let root = self.layout.tenants_dir();
        if !root.exists() {
            debug!(path = %root.display(), "tenants root does not exist");
            return Ok(Vec::new());
        }

        let entries =
            std::fs::read_dir(&root).map_err(|e| TenantError::io("cannot read dir", &root, e))?;

        let mut tenants = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| TenantError::io("cannot read dir", &root, e))?;
            let Ok(name) = entry.file_name().into_string() else {
                warn!(path = %entry.path().display(), "skipping non-UTF-8 tenant name");
                continue;
            };
            if name.starts_with('.') || !entry.path().is_dir() {
                continue;
            }
            let tier = read_tier(&entry.path().join(DEPLOYMENT_FILE));
            tenants.push(TenantSummary { name, tier });
        }
        tenants.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tenants)
    }

    /// Compare tenants' manifests on disk against a fresh render at their
    /// reconstructed tier. `None` checks every listed tenant.
    pub fn verify(&self, tenant: Option<&str>) -> Result<Vec<DriftFinding>, TenantError> {
        let targets = match tenant {
            Some(name) => {
                if !self.exists(name) {
                    return Err(TenantError::NotFound(name.to_string()));
                }
                let deployment = self.layout.tenant_dir(name).join(DEPLOYMENT_FILE);
                vec![TenantSummary {
                    name: name.to_string(),
                    tier: read_tier(&deployment),
                }]
            }
            None => self.list()?,
        };

        let mut findings = Vec::new();
        for summary in &targets {
            let profile = self.tiers.get(summary.tier)?;
            let found = drift::detect_drift(&self.layout, &summary.name, profile);
            debug!(tenant = %summary.name, findings = found.len(), "verified tenant");
            findings.extend(found);
        }
        Ok(findings)
    }
}

/// Reconstruct a tier from deployment manifest text.
///
/// Plain substring matching on the replica line: any text containing
/// `replicas: 1` is small (including `replicas: 10`), otherwise any text
/// containing `replicas: 3` is large, everything else is standard. Tiers that
/// share a replica count are indistinguishable.
pub fn infer_tier(deployment: &str) -> TierName {
    if deployment.contains(SMALL_MARKER) {
        TierName::Small
    } else if deployment.contains(LARGE_MARKER) {
        TierName::Large
    } else {
        TierName::Standard
    }
}

/// Read a deployment file and infer its tier; unreadable means standard.
fn read_tier(path: &Path) -> TierName {
    match std::fs::read_to_string(path) {
        Ok(text) => infer_tier(&text),
        Err(e) => {
            if path.exists() {
                warn!(path = %path.display(), "cannot read deployment: {e}");
            }
            TierName::Standard
        }
    }
}

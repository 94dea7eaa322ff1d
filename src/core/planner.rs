//! Dry-run planning for `create` — diff rendered manifests against disk.

use super::codegen;
use super::layout::Layout;
use super::types::*;
use crate::tripwire::hasher;
use std::path::Path;

/// Plan the writes `create` would perform for `tenant` at `profile`.
pub fn plan(layout: &Layout, tenant: &str, profile: &TierProfile) -> ManifestPlan {
    let mut writes = Vec::new();
    let mut to_create = 0u32;
    let mut to_update = 0u32;
    let mut unchanged = 0u32;

    for manifest in codegen::render_manifest_set(tenant, profile) {
        let target = layout.root().join(&manifest.path);
        let action = determine_action(&target, &manifest.content);

        match action {
            PlanAction::Create => to_create += 1,
            PlanAction::Update => to_update += 1,
            PlanAction::NoOp => unchanged += 1,
        }

        writes.push(PlannedWrite {
            kind: manifest.kind,
            path: manifest.path,
            action,
        });
    }

    ManifestPlan {
        tenant: tenant.to_string(),
        tier: profile.name,
        writes,
        to_create,
        to_update,
        unchanged,
    }
}

/// Compare the file at `target` with the content we would write.
fn determine_action(target: &Path, desired: &str) -> PlanAction {
    if !target.exists() {
        return PlanAction::Create;
    }
    match hasher::hash_file(target) {
        Ok(actual) if actual == hasher::hash_string(desired) => PlanAction::NoOp,
        // Unreadable or different content gets overwritten
        _ => PlanAction::Update,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tiers::TierTable;

    #[test]
    fn test_plan_fresh_tenant_all_create() {
        let dir = tempfile::tempdir().unwrap();
        let layout = Layout::new(dir.path());
        let table = TierTable::builtin();
        let plan = plan(&layout, "acme", table.get(TierName::Small).unwrap());
        assert_eq!(plan.to_create, 5);
        assert_eq!(plan.to_update, 0);
        assert_eq!(plan.unchanged, 0);
        assert_eq!(plan.tier, TierName::Small);
        assert!(plan.writes.iter().all(|w| w.action == PlanAction::Create));
        // Planning never writes.
        assert!(!layout.tenants_dir().exists());
    }

    #[test]
    fn test_plan_tier_change_updates_deployment_only() {
        let dir = tempfile::tempdir().unwrap();
        let layout = Layout::new(dir.path());
        let table = TierTable::builtin();
        for m in codegen::render_manifest_set("acme", table.get(TierName::Standard).unwrap()) {
            let path = layout.root().join(&m.path);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, m.content).unwrap();
        }

        let plan = plan(&layout, "acme", table.get(TierName::Large).unwrap());
        assert_eq!(plan.to_update, 1);
        assert_eq!(plan.unchanged, 4);
        let updated: Vec<_> = plan
            .writes
            .iter()
            .filter(|w| w.action == PlanAction::Update)
            .map(|w| w.kind)
            .collect();
        assert_eq!(updated, vec![ManifestKind::Deployment]);
        assert!(plan.has_changes());
    }

    #[test]
    fn test_determine_action_directory_is_update() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("namespace.yaml");
        std::fs::create_dir_all(&target).unwrap();
        assert_eq!(determine_action(&target, "x"), PlanAction::Update);
    }
}

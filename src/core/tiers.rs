//! Tier table — the fixed mapping from tier name to resource profile.
//!
//! Built once at startup and handed to the store by reference. Nothing
//! mutates it afterwards.

use super::error::TenantError;
use super::types::{TierName, TierProfile};
use indexmap::IndexMap;

/// Read-only lookup of tier profiles, in declaration order.
#[derive(Debug, Clone)]
pub struct TierTable {
    profiles: IndexMap<TierName, TierProfile>,
}

impl TierTable {
    /// The three built-in tiers.
    pub fn builtin() -> Self {
        Self::from_profiles([
            profile(TierName::Small, 1, "128Mi", "256Mi", "100m", "200m"),
            profile(TierName::Standard, 2, "256Mi", "512Mi", "200m", "400m"),
            profile(TierName::Large, 3, "512Mi", "1Gi", "500m", "1000m"),
        ])
    }

    /// Build a table from explicit profiles. A later profile for the same
    /// tier replaces an earlier one.
    pub fn from_profiles(profiles: impl IntoIterator<Item = TierProfile>) -> Self {
        Self {
            profiles: profiles.into_iter().map(|p| (p.name, p)).collect(),
        }
    }

    /// Look up a tier's profile.
    pub fn get(&self, tier: TierName) -> Result<&TierProfile, TenantError> {
        self.profiles
            .get(&tier)
            .ok_or_else(|| TenantError::InvalidTier(tier.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &TierProfile> {
        self.profiles.values()
    }
}

impl Default for TierTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn profile(
    name: TierName,
    replicas: u32,
    memory_request: &str,
    memory_limit: &str,
    cpu_request: &str,
    cpu_limit: &str,
) -> TierProfile {
    TierProfile {
        name,
        replicas,
        memory_request: memory_request.to_string(),
        memory_limit: memory_limit.to_string(),
        cpu_request: cpu_request.to_string(),
        cpu_limit: cpu_limit.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parse a quantity into a comparable base unit: bytes for Mi/Gi,
    /// millicores for `m` and bare cores.
    fn quantity(q: &str) -> u64 {
        if let Some(n) = q.strip_suffix("Mi") {
            n.parse::<u64>().unwrap() * 1024 * 1024
        } else if let Some(n) = q.strip_suffix("Gi") {
            n.parse::<u64>().unwrap() * 1024 * 1024 * 1024
        } else if let Some(n) = q.strip_suffix('m') {
            n.parse().unwrap()
        } else {
            q.parse::<u64>().unwrap() * 1000
        }
    }

    #[test]
    fn test_builtin_has_three_tiers_in_order() {
        let table = TierTable::builtin();
        let names: Vec<_> = table.iter().map(|p| p.name).collect();
        assert_eq!(names, TierName::ALL.to_vec());
    }

    #[test]
    fn test_builtin_values() {
        let table = TierTable::builtin();
        let small = table.get(TierName::Small).unwrap();
        assert_eq!(small.replicas, 1);
        assert_eq!(small.memory_request, "128Mi");
        assert_eq!(small.cpu_limit, "200m");

        let standard = table.get(TierName::Standard).unwrap();
        assert_eq!(standard.replicas, 2);
        assert_eq!(standard.memory_limit, "512Mi");

        let large = table.get(TierName::Large).unwrap();
        assert_eq!(large.replicas, 3);
        assert_eq!(large.memory_limit, "1Gi");
        assert_eq!(large.cpu_limit, "1000m");
    }

    #[test]
    fn test_limits_not_below_requests() {
        for p in TierTable::builtin().iter() {
            assert!(
                quantity(&p.memory_limit) >= quantity(&p.memory_request),
                "{} memory",
                p.name
            );
            assert!(
                quantity(&p.cpu_limit) >= quantity(&p.cpu_request),
                "{} cpu",
                p.name
            );
            assert!(p.replicas > 0);
        }
    }

    #[test]
    fn test_missing_tier_in_partial_table() {
        let table =
            TierTable::from_profiles([profile(TierName::Small, 1, "1Mi", "1Mi", "1m", "1m")]);
        assert!(table.get(TierName::Small).is_ok());
        let err = table.get(TierName::Large).unwrap_err();
        assert!(matches!(err, TenantError::InvalidTier(ref t) if t == "large"));
    }
}

//! Tenant domain types — tiers, manifests, plans, and operation outcomes.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::error::TenantError;

// ============================================================================
// Tiers
// ============================================================================

/// Named resource tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TierName {
    Small,
    #[default]
    Standard,
    Large,
}

impl TierName {
    pub const ALL: [TierName; 3] = [Self::Small, Self::Standard, Self::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Standard => "standard",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for TierName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TierName {
    type Err = TenantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(Self::Small),
            "standard" => Ok(Self::Standard),
            "large" => Ok(Self::Large),
            other => Err(TenantError::InvalidTier(other.to_string())),
        }
    }
}

/// Resource profile of a tier. Quantities are Kubernetes quantity strings
/// rendered verbatim into the deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierProfile {
    pub name: TierName,
    pub replicas: u32,
    pub memory_request: String,
    pub memory_limit: String,
    pub cpu_request: String,
    pub cpu_limit: String,
}

// ============================================================================
// Manifests
// ============================================================================

/// The five manifest kinds written per tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifestKind {
    Namespace,
    Deployment,
    Service,
    ConfigMap,
    Application,
}

impl ManifestKind {
    /// Write order for a tenant's manifest set.
    pub const ALL: [ManifestKind; 5] = [
        Self::Namespace,
        Self::Deployment,
        Self::Service,
        Self::ConfigMap,
        Self::Application,
    ];
}

impl fmt::Display for ManifestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Namespace => write!(f, "namespace"),
            Self::Deployment => write!(f, "deployment"),
            Self::Service => write!(f, "service"),
            Self::ConfigMap => write!(f, "configmap"),
            Self::Application => write!(f, "application"),
        }
    }
}

/// A rendered manifest and where it belongs, relative to the layout root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedManifest {
    pub kind: ManifestKind,
    pub path: PathBuf,
    pub content: String,
}

// ============================================================================
// Tenants
// ============================================================================

/// One entry of `list`. The tier is reconstructed from the deployment text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TenantSummary {
    pub name: String,
    pub tier: TierName,
}

/// Result of a successful `create`.
#[derive(Debug, Clone)]
pub struct CreateReport {
    pub tenant: String,
    pub profile: TierProfile,
    /// Absolute paths written, in write order.
    pub written: Vec<PathBuf>,
}

/// Result of `delete` once the tenant was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Operator declined; nothing was touched.
    Cancelled,
    Deleted {
        removed_dir: bool,
        removed_application: bool,
    },
}

// ============================================================================
// Plan
// ============================================================================

/// Action a `create` would take on one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanAction {
    Create,
    Update,
    NoOp,
}

impl fmt::Display for PlanAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::NoOp => "NO-OP",
        })
    }
}

/// A single planned file write.
#[derive(Debug, Clone)]
pub struct PlannedWrite {
    pub kind: ManifestKind,

    /// Path relative to the layout root
    pub path: PathBuf,

    pub action: PlanAction,
}

/// Dry-run plan for `create`.
#[derive(Debug, Clone)]
pub struct ManifestPlan {
    pub tenant: String,
    pub tier: TierName,
    pub writes: Vec<PlannedWrite>,

    /// Summary counts
    pub to_create: u32,
    pub to_update: u32,
    pub unchanged: u32,
}

impl ManifestPlan {
    pub fn has_changes(&self) -> bool {
        self.to_create + self.to_update > 0
    }
}

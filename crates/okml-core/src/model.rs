//! Domain model
//!
//! Validated environment snapshot and the records derived from it:
//! - [`LegacyEnvironment`] and its sub-system profiles
//! - [`AssessmentScores`]
//! - [`RoadmapItem`]
//! - [`KpiPair`]
//! - [`AssessmentReport`]
//!
//! None of these are mutated after construction.

use crate::document::{EnvironmentDocument, RoadmapItemDocument, ScoresDocument};
use crate::error::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of lowercase wire values for an input enum
pub trait Choice: Sized + Copy + 'static {
    /// All variants, in declaration order
    const ALL: &'static [Self];

    /// Wire name of this variant
    fn as_str(self) -> &'static str;

    /// Parse a wire name
    fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == raw)
    }

    /// Comma-separated list of accepted names
    fn expected() -> String {
        Self::ALL
            .iter()
            .map(|v| v.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

macro_rules! choice {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl Choice for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

choice! {
    /// Hypervisor family across the compute fleet
    pub enum Hypervisor { Kvm => "kvm", Vmware => "vmware", Mixed => "mixed" }
}

choice! {
    /// Primary storage backend
    pub enum StorageBackend {
        Ceph => "ceph",
        Nfs => "nfs",
        VendorSan => "vendor_san",
        Mixed => "mixed",
    }
}

choice! {
    /// Network segmentation technology
    pub enum Segmentation { Vlan => "vlan", Vxlan => "vxlan", Mixed => "mixed" }
}

choice! {
    /// East-west (internal) traffic visibility
    pub enum Visibility { Low => "low", Medium => "medium", High => "high" }
}

choice! {
    /// Control plane upgrade strategy
    pub enum UpgradeStrategy {
        InPlace => "in_place",
        BlueGreen => "blue_green",
        Unknown => "unknown",
    }
}

choice! {
    /// RBAC maturity across tenants
    pub enum RbacMaturity {
        AdHoc => "ad_hoc",
        RoleBased => "role_based",
        PolicyAsCode => "policy_as_code",
    }
}

choice! {
    /// Incident severity
    pub enum Severity { Sev1 => "sev1", Sev2 => "sev2", Sev3 => "sev3" }
}

/// Compute fleet profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputeProfile {
    pub hypervisor: Hypervisor,
    pub compute_nodes: u32,
    /// In (1.0, 10.0]
    pub overcommit_ratio: f64,
    /// In [1, 365]
    pub patch_cadence_days: u32,
}

/// Storage profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorageProfile {
    pub primary_backend: StorageBackend,
    pub replication_enabled: bool,
    pub backup_success_rate_percent: f64,
}

/// Network profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkProfile {
    pub segmentation: Segmentation,
    pub east_west_visibility: Visibility,
    pub change_failure_rate_percent: f64,
}

/// OpenStack control plane profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlPlaneProfile {
    pub openstack_release: String,
    pub ha_enabled: bool,
    pub db_clustered: bool,
    pub message_bus_clustered: bool,
    pub upgrade_strategy: UpgradeStrategy,
}

/// Tenancy profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TenancyProfile {
    pub tenants: u32,
    pub self_service_portal: bool,
    pub rbac_maturity: RbacMaturity,
}

/// One incident from the trailing 90 days
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncidentRecord {
    pub occurred_on: NaiveDate,
    pub severity: Severity,
    /// In [1, 20160] (14 days)
    pub minutes_to_restore: u32,
    pub primary_cause: String,
}

/// One step of the provisioning workflow
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProvisioningStep {
    pub name: String,
    pub minutes_p50: f64,
    pub manual_touchpoints: u32,
    pub error_rate_percent: f64,
}

/// Validated legacy environment snapshot
///
/// The only ways to obtain one are [`LegacyEnvironment::from_document`] and
/// deserialization (which goes through the same validation), so every value of
/// this type satisfies all field constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EnvironmentDocument")]
pub struct LegacyEnvironment {
    pub(crate) name: String,
    pub(crate) region: String,
    pub(crate) compute: ComputeProfile,
    pub(crate) storage: StorageProfile,
    pub(crate) network: NetworkProfile,
    pub(crate) control_plane: ControlPlaneProfile,
    pub(crate) tenancy: TenancyProfile,
    pub(crate) deployments_per_week: u32,
    pub(crate) infra_changes_per_week: u32,
    pub(crate) config_drift_rate_percent: f64,
    pub(crate) incidents_last_90d: Vec<IncidentRecord>,
    pub(crate) provisioning_workflow: Vec<ProvisioningStep>,
}

impl TryFrom<EnvironmentDocument> for LegacyEnvironment {
    type Error = ValidationError;

    fn try_from(doc: EnvironmentDocument) -> Result<Self, Self::Error> {
        Self::from_document(doc)
    }
}

impl LegacyEnvironment {
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    #[inline]
    #[must_use]
    pub fn compute(&self) -> &ComputeProfile {
        &self.compute
    }

    #[inline]
    #[must_use]
    pub fn storage(&self) -> &StorageProfile {
        &self.storage
    }

    #[inline]
    #[must_use]
    pub fn network(&self) -> &NetworkProfile {
        &self.network
    }

    #[inline]
    #[must_use]
    pub fn control_plane(&self) -> &ControlPlaneProfile {
        &self.control_plane
    }

    #[inline]
    #[must_use]
    pub fn tenancy(&self) -> &TenancyProfile {
        &self.tenancy
    }

    #[inline]
    #[must_use]
    pub fn deployments_per_week(&self) -> u32 {
        self.deployments_per_week
    }

    #[inline]
    #[must_use]
    pub fn infra_changes_per_week(&self) -> u32 {
        self.infra_changes_per_week
    }

    #[inline]
    #[must_use]
    pub fn config_drift_rate_percent(&self) -> f64 {
        self.config_drift_rate_percent
    }

    #[inline]
    #[must_use]
    pub fn incidents(&self) -> &[IncidentRecord] {
        &self.incidents_last_90d
    }

    /// Provisioning workflow steps (never empty)
    #[inline]
    #[must_use]
    pub fn provisioning_workflow(&self) -> &[ProvisioningStep] {
        &self.provisioning_workflow
    }

    /// Sum of manual touchpoints across the workflow
    ///
    /// Summed in `u64`: each step may report up to `u32::MAX`.
    #[must_use]
    pub fn total_manual_touchpoints(&self) -> u64 {
        self.provisioning_workflow
            .iter()
            .map(|s| u64::from(s.manual_touchpoints))
            .sum()
    }

    /// Sum of step P50 durations in minutes
    #[must_use]
    pub fn total_provisioning_minutes(&self) -> f64 {
        self.provisioning_workflow.iter().map(|s| s.minutes_p50).sum()
    }
}

/// Heuristic maturity/risk scores, each in [0, 100] with one decimal
///
/// Deserialization rejects non-finite or out-of-range values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ScoresDocument")]
pub struct AssessmentScores {
    /// Higher is worse
    pub reliability_risk: f64,
    pub operational_maturity: f64,
    pub automation_maturity: f64,
    pub standardization: f64,
}

/// Implementation effort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effort {
    #[serde(rename = "S")]
    Small,
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "L")]
    Large,
}

impl Effort {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Small => "S",
            Self::Medium => "M",
            Self::Large => "L",
        }
    }
}

/// Impact or risk-reduction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "H")]
    High,
}

impl Level {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Medium => "M",
            Self::High => "H",
        }
    }
}

/// One prioritized roadmap recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RoadmapItemDocument")]
pub struct RoadmapItem {
    pub id: String,
    pub title: String,
    pub rationale: String,
    pub effort: Effort,
    pub impact: Level,
    pub risk_reduction: Level,
    /// Unique, starting at 1
    pub priority: u32,
    /// Order matters for KPI matching
    pub tags: Vec<String>,
}

impl TryFrom<ScoresDocument> for AssessmentScores {
    type Error = ValidationError;

    fn try_from(doc: ScoresDocument) -> Result<Self, Self::Error> {
        Self::from_document(doc)
    }
}

impl TryFrom<RoadmapItemDocument> for RoadmapItem {
    type Error = ValidationError;

    fn try_from(doc: RoadmapItemDocument) -> Result<Self, Self::Error> {
        Self::from_document(doc)
    }
}

impl RoadmapItem {
    /// Check if item carries tag
    #[inline]
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// KPI values at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KpiSnapshot {
    /// Rounded to 3 decimals
    pub uptime_monthly_percent: f64,
    /// Rounded to 1 decimal
    pub provisioning_time_minutes_p50: f64,
}

/// Simulated before/after KPI evidence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KpiPair {
    pub before: KpiSnapshot,
    pub after: KpiSnapshot,
}

impl KpiPair {
    /// Fractional provisioning time reduction (`1 - after/before`)
    #[must_use]
    pub fn provisioning_improvement(&self) -> f64 {
        1.0 - self.after.provisioning_time_minutes_p50 / self.before.provisioning_time_minutes_p50
    }
}

/// Result of one assessment run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub env: LegacyEnvironment,
    pub scores: AssessmentScores,
    pub findings: Vec<String>,
    pub recommendations: Vec<RoadmapItem>,
}

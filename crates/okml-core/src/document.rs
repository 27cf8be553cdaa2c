//! Raw input document
//!
//! Mirrors the YAML/JSON wire shape exactly. Enum-valued fields are kept as
//! strings and counts as signed integers so that every constraint is checked
//! in one place ([`LegacyEnvironment::from_document`]) with a precise field
//! path, instead of surfacing as an opaque deserializer error.
//!
//! [`LegacyEnvironment::from_document`]: crate::LegacyEnvironment::from_document

use crate::model::{Effort, Level};
use serde::{Deserialize, Serialize};

/// Unvalidated legacy environment snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentDocument {
    pub name: String,
    pub region: String,
    pub compute: ComputeDocument,
    pub storage: StorageDocument,
    pub network: NetworkDocument,
    pub control_plane: ControlPlaneDocument,
    pub tenancy: TenancyDocument,

    pub deployments_per_week: i64,
    pub infra_changes_per_week: i64,
    pub config_drift_rate_percent: f64,

    #[serde(default)]
    pub incidents_last_90d: Vec<IncidentDocument>,
    pub provisioning_workflow: Vec<StepDocument>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputeDocument {
    #[serde(default = "mixed")]
    pub hypervisor: String,
    pub compute_nodes: i64,
    pub overcommit_ratio: f64,
    pub patch_cadence_days: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageDocument {
    #[serde(default = "mixed")]
    pub primary_backend: String,
    #[serde(default = "enabled")]
    pub replication_enabled: bool,
    pub backup_success_rate_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkDocument {
    #[serde(default = "mixed")]
    pub segmentation: String,
    #[serde(default = "low")]
    pub east_west_visibility: String,
    pub change_failure_rate_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlPlaneDocument {
    pub openstack_release: String,
    pub ha_enabled: bool,
    pub db_clustered: bool,
    pub message_bus_clustered: bool,
    #[serde(default = "unknown")]
    pub upgrade_strategy: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenancyDocument {
    pub tenants: i64,
    pub self_service_portal: bool,
    #[serde(default = "ad_hoc")]
    pub rbac_maturity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentDocument {
    /// `YYYY-MM-DD`
    pub occurred_on: String,
    pub severity: String,
    pub minutes_to_restore: i64,
    pub primary_cause: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepDocument {
    pub name: String,
    pub minutes_p50: f64,
    pub manual_touchpoints: i64,
    pub error_rate_percent: f64,
}

/// Unvalidated scores, as read back from a stored assessment report
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoresDocument {
    pub reliability_risk: f64,
    pub operational_maturity: f64,
    pub automation_maturity: f64,
    pub standardization: f64,
}

/// Unvalidated roadmap item, as read back from a stored assessment report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapItemDocument {
    pub id: String,
    pub title: String,
    pub rationale: String,
    pub effort: Effort,
    pub impact: Level,
    pub risk_reduction: Level,
    pub priority: i64,
    #[serde(default)]
    pub tags: Vec<String>,
}

fn mixed() -> String {
    "mixed".to_string()
}

fn low() -> String {
    "low".to_string()
}

fn unknown() -> String {
    "unknown".to_string()
}

fn ad_hoc() -> String {
    "ad_hoc".to_string()
}

fn enabled() -> bool {
    true
}

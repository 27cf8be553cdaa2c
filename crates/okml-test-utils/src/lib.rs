//! Testing utilities for OKML workspace
//!
//! Shared fixtures and proptest strategies.

#![allow(missing_docs)]

use okml_core::document::{
    ComputeDocument, ControlPlaneDocument, EnvironmentDocument, IncidentDocument,
    NetworkDocument, StepDocument, StorageDocument, TenancyDocument,
};
use okml_core::model::{Effort, Level};
use okml_core::{AssessmentScores, LegacyEnvironment, RoadmapItem};
use proptest::prelude::*;

pub const SAMPLE_ENVIRONMENT_YAML: &str = include_str!("../../../sample_data/legacy_env.yaml");

/// Absolute path of the sample environment file
pub fn sample_environment_path() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../sample_data/legacy_env.yaml")
}

pub fn sample_document() -> EnvironmentDocument {
    serde_yaml::from_str(SAMPLE_ENVIRONMENT_YAML).unwrap()
}

pub fn sample_environment() -> LegacyEnvironment {
    LegacyEnvironment::from_document(sample_document()).unwrap()
}

/// Sample environment with edits applied to its raw document
pub fn environment_with(edit: impl FnOnce(&mut EnvironmentDocument)) -> LegacyEnvironment {
    let mut doc = sample_document();
    edit(&mut doc);
    LegacyEnvironment::from_document(doc).unwrap()
}

fn one_of(values: &'static [&'static str]) -> impl Strategy<Value = String> {
    proptest::sample::select(values).prop_map(str::to_string)
}

fn percent() -> impl Strategy<Value = f64> {
    0.0..=100.0f64
}

prop_compose! {
    fn arb_compute()(
        hypervisor in one_of(&["kvm", "vmware", "mixed"]),
        compute_nodes in 1i64..5_000,
        overcommit_ratio in 1.001f64..=10.0,
        patch_cadence_days in 1i64..=365,
    ) -> ComputeDocument {
        ComputeDocument { hypervisor, compute_nodes, overcommit_ratio, patch_cadence_days }
    }
}

prop_compose! {
    fn arb_storage()(
        primary_backend in one_of(&["ceph", "nfs", "vendor_san", "mixed"]),
        replication_enabled in any::<bool>(),
        backup_success_rate_percent in percent(),
    ) -> StorageDocument {
        StorageDocument { primary_backend, replication_enabled, backup_success_rate_percent }
    }
}

prop_compose! {
    fn arb_network()(
        segmentation in one_of(&["vlan", "vxlan", "mixed"]),
        east_west_visibility in one_of(&["low", "medium", "high"]),
        change_failure_rate_percent in percent(),
    ) -> NetworkDocument {
        NetworkDocument { segmentation, east_west_visibility, change_failure_rate_percent }
    }
}

prop_compose! {
    fn arb_control_plane()(
        ha_enabled in any::<bool>(),
        db_clustered in any::<bool>(),
        message_bus_clustered in any::<bool>(),
        upgrade_strategy in one_of(&["in_place", "blue_green", "unknown"]),
    ) -> ControlPlaneDocument {
        ControlPlaneDocument {
            openstack_release: "zed".to_string(),
            ha_enabled,
            db_clustered,
            message_bus_clustered,
            upgrade_strategy,
        }
    }
}

prop_compose! {
    fn arb_tenancy()(
        tenants in 1i64..1_000,
        self_service_portal in any::<bool>(),
        rbac_maturity in one_of(&["ad_hoc", "role_based", "policy_as_code"]),
    ) -> TenancyDocument {
        TenancyDocument { tenants, self_service_portal, rbac_maturity }
    }
}

prop_compose! {
    fn arb_incident()(
        day in 1u32..=28,
        severity in one_of(&["sev1", "sev2", "sev3"]),
        minutes_to_restore in 1i64..=20_160,
    ) -> IncidentDocument {
        IncidentDocument {
            occurred_on: format!("2025-08-{day:02}"),
            severity,
            minutes_to_restore,
            primary_cause: "generated".to_string(),
        }
    }
}

prop_compose! {
    fn arb_step()(
        minutes_p50 in 0.5f64..2_000.0,
        manual_touchpoints in 0i64..20,
        error_rate_percent in percent(),
    ) -> StepDocument {
        StepDocument {
            name: "step".to_string(),
            minutes_p50,
            manual_touchpoints,
            error_rate_percent,
        }
    }
}

prop_compose! {
    /// Any document that passes validation
    pub fn arb_environment_document()(
        compute in arb_compute(),
        storage in arb_storage(),
        network in arb_network(),
        control_plane in arb_control_plane(),
        tenancy in arb_tenancy(),
        deployments_per_week in 0i64..200,
        infra_changes_per_week in 0i64..200,
        config_drift_rate_percent in percent(),
        incidents_last_90d in prop::collection::vec(arb_incident(), 0..12),
        provisioning_workflow in prop::collection::vec(arb_step(), 1..10),
    ) -> EnvironmentDocument {
        EnvironmentDocument {
            name: "generated".to_string(),
            region: "lab-1".to_string(),
            compute,
            storage,
            network,
            control_plane,
            tenancy,
            deployments_per_week,
            infra_changes_per_week,
            config_drift_rate_percent,
            incidents_last_90d,
            provisioning_workflow,
        }
    }
}

/// Any validated environment
pub fn arb_environment() -> impl Strategy<Value = LegacyEnvironment> {
    arb_environment_document().prop_map(|doc| LegacyEnvironment::from_document(doc).unwrap())
}

prop_compose! {
    /// Any in-range scores (not necessarily reachable from an environment)
    pub fn arb_scores()(
        reliability_risk in 0.0f64..=100.0,
        operational_maturity in 0.0f64..=100.0,
        automation_maturity in 0.0f64..=100.0,
        standardization in 0.0f64..=100.0,
    ) -> AssessmentScores {
        AssessmentScores { reliability_risk, operational_maturity, automation_maturity, standardization }
    }
}

prop_compose! {
    fn arb_item()(
        priority in 1u32..20,
        high_risk_reduction in any::<bool>(),
        tags in prop::collection::vec(one_of(&["automation", "network", "sre", "kubernetes"]), 0..4),
    ) -> RoadmapItem {
        RoadmapItem {
            id: format!("X-{priority:03}"),
            title: "generated".to_string(),
            rationale: "generated".to_string(),
            effort: Effort::Medium,
            impact: Level::High,
            risk_reduction: if high_risk_reduction { Level::High } else { Level::Medium },
            priority,
            tags,
        }
    }
}

/// Arbitrary recommendation sets, including ones the playbook never emits
pub fn arb_recommendations() -> impl Strategy<Value = Vec<RoadmapItem>> {
    prop::collection::vec(arb_item(), 0..8)
}

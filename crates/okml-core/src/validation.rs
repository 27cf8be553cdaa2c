//! Construction-time validation
//!
//! Turns an [`EnvironmentDocument`] into a [`LegacyEnvironment`] one layer at a
//! time. Each layer is checked before the next one is looked at, and the first
//! violation aborts the whole document: no partially built environment is ever
//! observable.

use crate::document::{
    ComputeDocument, ControlPlaneDocument, EnvironmentDocument, IncidentDocument,
    NetworkDocument, RoadmapItemDocument, ScoresDocument, StepDocument, StorageDocument,
    TenancyDocument,
};
use crate::error::ValidationError;
use crate::model::{
    AssessmentScores, Choice, ComputeProfile, ControlPlaneProfile, Hypervisor, IncidentRecord,
    LegacyEnvironment, NetworkProfile, ProvisioningStep, RbacMaturity, RoadmapItem,
    Segmentation, Severity, StorageBackend, StorageProfile, TenancyProfile, UpgradeStrategy,
    Visibility,
};
use chrono::NaiveDate;

/// Longest accepted restore time: 14 days
pub const MAX_MINUTES_TO_RESTORE: i64 = 60 * 24 * 14;

impl LegacyEnvironment {
    /// Validate a raw document
    ///
    /// # Errors
    /// Returns the first [`ValidationError`] in document order.
    pub fn from_document(doc: EnvironmentDocument) -> Result<Self, ValidationError> {
        let name = non_empty("name", doc.name)?;
        let region = non_empty("region", doc.region)?;
        let compute = validate_compute(doc.compute)?;
        let storage = validate_storage(doc.storage)?;
        let network = validate_network(doc.network)?;
        let control_plane = validate_control_plane(doc.control_plane)?;
        let tenancy = validate_tenancy(doc.tenancy)?;

        let deployments_per_week = count("deployments_per_week", doc.deployments_per_week, 0)?;
        let infra_changes_per_week =
            count("infra_changes_per_week", doc.infra_changes_per_week, 0)?;
        let config_drift_rate_percent =
            percent("config_drift_rate_percent", doc.config_drift_rate_percent)?;

        let incidents_last_90d = doc
            .incidents_last_90d
            .into_iter()
            .enumerate()
            .map(|(i, incident)| validate_incident(&format!("incidents_last_90d[{i}]"), incident))
            .collect::<Result<Vec<_>, _>>()?;

        if doc.provisioning_workflow.is_empty() {
            return Err(ValidationError::new(
                "provisioning_workflow",
                "must contain at least one step",
            ));
        }
        let provisioning_workflow = doc
            .provisioning_workflow
            .into_iter()
            .enumerate()
            .map(|(i, step)| validate_step(&format!("provisioning_workflow[{i}]"), step))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name,
            region,
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
        })
    }
}

fn validate_compute(doc: ComputeDocument) -> Result<ComputeProfile, ValidationError> {
    let hypervisor = choice::<Hypervisor>("compute.hypervisor", &doc.hypervisor)?;
    let compute_nodes = count("compute.compute_nodes", doc.compute_nodes, 1)?;
    let overcommit_ratio = doc.overcommit_ratio;
    if !(overcommit_ratio > 1.0 && overcommit_ratio <= 10.0) {
        return Err(ValidationError::new(
            "compute.overcommit_ratio",
            "must be in (1.0, 10.0]",
        ));
    }
    let patch_cadence_days = bounded("compute.patch_cadence_days", doc.patch_cadence_days, 1, 365)?;

    Ok(ComputeProfile {
        hypervisor,
        compute_nodes,
        overcommit_ratio,
        patch_cadence_days,
    })
}

fn validate_storage(doc: StorageDocument) -> Result<StorageProfile, ValidationError> {
    Ok(StorageProfile {
        primary_backend: choice::<StorageBackend>("storage.primary_backend", &doc.primary_backend)?,
        replication_enabled: doc.replication_enabled,
        backup_success_rate_percent: percent(
            "storage.backup_success_rate_percent",
            doc.backup_success_rate_percent,
        )?,
    })
}

fn validate_network(doc: NetworkDocument) -> Result<NetworkProfile, ValidationError> {
    Ok(NetworkProfile {
        segmentation: choice::<Segmentation>("network.segmentation", &doc.segmentation)?,
        east_west_visibility: choice::<Visibility>(
            "network.east_west_visibility",
            &doc.east_west_visibility,
        )?,
        change_failure_rate_percent: percent(
            "network.change_failure_rate_percent",
            doc.change_failure_rate_percent,
        )?,
    })
}

fn validate_control_plane(
    doc: ControlPlaneDocument,
) -> Result<ControlPlaneProfile, ValidationError> {
    Ok(ControlPlaneProfile {
        openstack_release: doc.openstack_release,
        ha_enabled: doc.ha_enabled,
        db_clustered: doc.db_clustered,
        message_bus_clustered: doc.message_bus_clustered,
        upgrade_strategy: choice::<UpgradeStrategy>(
            "control_plane.upgrade_strategy",
            &doc.upgrade_strategy,
        )?,
    })
}

fn validate_tenancy(doc: TenancyDocument) -> Result<TenancyProfile, ValidationError> {
    Ok(TenancyProfile {
        tenants: count("tenancy.tenants", doc.tenants, 1)?,
        self_service_portal: doc.self_service_portal,
        rbac_maturity: choice::<RbacMaturity>("tenancy.rbac_maturity", &doc.rbac_maturity)?,
    })
}

fn validate_incident(path: &str, doc: IncidentDocument) -> Result<IncidentRecord, ValidationError> {
    let occurred_on = NaiveDate::parse_from_str(doc.occurred_on.trim(), "%Y-%m-%d").map_err(|_| {
        ValidationError::new(
            format!("{path}.occurred_on"),
            "must be a calendar date (YYYY-MM-DD)",
        )
    })?;

    Ok(IncidentRecord {
        occurred_on,
        severity: choice::<Severity>(&format!("{path}.severity"), &doc.severity)?,
        minutes_to_restore: bounded(
            &format!("{path}.minutes_to_restore"),
            doc.minutes_to_restore,
            1,
            MAX_MINUTES_TO_RESTORE,
        )?,
        primary_cause: doc.primary_cause,
    })
}

fn validate_step(path: &str, doc: StepDocument) -> Result<ProvisioningStep, ValidationError> {
    if !(doc.minutes_p50.is_finite() && doc.minutes_p50 > 0.0) {
        return Err(ValidationError::new(
            format!("{path}.minutes_p50"),
            "must be > 0",
        ));
    }

    Ok(ProvisioningStep {
        name: doc.name,
        minutes_p50: doc.minutes_p50,
        manual_touchpoints: count(
            &format!("{path}.manual_touchpoints"),
            doc.manual_touchpoints,
            0,
        )?,
        error_rate_percent: percent(&format!("{path}.error_rate_percent"), doc.error_rate_percent)?,
    })
}

impl AssessmentScores {
    /// Validate stored scores: each must be finite and in [0, 100]
    ///
    /// # Errors
    /// Returns the first out-of-range score.
    pub fn from_document(doc: ScoresDocument) -> Result<Self, ValidationError> {
        Ok(Self {
            reliability_risk: percent("reliability_risk", doc.reliability_risk)?,
            operational_maturity: percent("operational_maturity", doc.operational_maturity)?,
            automation_maturity: percent("automation_maturity", doc.automation_maturity)?,
            standardization: percent("standardization", doc.standardization)?,
        })
    }
}

impl RoadmapItem {
    /// Validate a stored roadmap item
    ///
    /// # Errors
    /// [`ValidationError`] on field `priority` when it is below 1.
    pub fn from_document(doc: RoadmapItemDocument) -> Result<Self, ValidationError> {
        Ok(Self {
            priority: count("priority", doc.priority, 1)?,
            id: doc.id,
            title: doc.title,
            rationale: doc.rationale,
            effort: doc.effort,
            impact: doc.impact,
            risk_reduction: doc.risk_reduction,
            tags: doc.tags,
        })
    }
}

fn non_empty(field: &str, value: String) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new(field, "must not be empty"))
    } else {
        Ok(value)
    }
}

fn choice<T: Choice>(field: &str, raw: &str) -> Result<T, ValidationError> {
    T::parse(raw).ok_or_else(|| {
        ValidationError::new(field, format!("must be one of: {}", T::expected()))
    })
}

/// Percentages accept [0, 100]; NaN is rejected by the range check
fn percent(field: &str, value: f64) -> Result<f64, ValidationError> {
    if (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::new(field, "must be in [0, 100]"))
    }
}

fn count(field: &str, value: i64, min: i64) -> Result<u32, ValidationError> {
    if value < min {
        return Err(ValidationError::new(field, format!("must be >= {min}")));
    }
    u32::try_from(value)
        .map_err(|_| ValidationError::new(field, format!("must be <= {}", u32::MAX)))
}

fn bounded(field: &str, value: i64, min: i64, max: i64) -> Result<u32, ValidationError> {
    if (min..=max).contains(&value) {
        count(field, value, min)
    } else {
        Err(ValidationError::new(field, format!("must be in [{min}, {max}]")))
    }
}

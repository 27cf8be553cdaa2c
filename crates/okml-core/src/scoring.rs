//! Scoring Engine
//!
//! Pure function from a validated environment to four bounded scores. Each
//! score starts at a fixed baseline, accumulates additive adjustments, and is
//! clamped to [0, 100] and rounded to one decimal only at the end. The four
//! scores never read each other.

use crate::model::{
    AssessmentScores, Hypervisor, LegacyEnvironment, RbacMaturity, Segmentation, Severity,
    UpgradeStrategy, Visibility,
};
use crate::numeric::bounded_score;

/// Average restore time assumed when there were no incidents
pub const DEFAULT_MINUTES_TO_RESTORE: f64 = 30.0;

/// Score an environment
#[must_use]
pub fn score(env: &LegacyEnvironment) -> AssessmentScores {
    AssessmentScores {
        reliability_risk: bounded_score(reliability_risk(env)),
        operational_maturity: bounded_score(operational_maturity(env)),
        automation_maturity: bounded_score(automation_maturity(env)),
        standardization: bounded_score(standardization(env)),
    }
}

/// Mean minutes-to-restore across all incidents, or the default when empty
#[must_use]
pub fn average_minutes_to_restore(env: &LegacyEnvironment) -> f64 {
    let incidents = env.incidents();
    if incidents.is_empty() {
        return DEFAULT_MINUTES_TO_RESTORE;
    }
    let total: f64 = incidents
        .iter()
        .map(|i| f64::from(i.minutes_to_restore))
        .sum();
    total / incidents.len() as f64
}

fn severity_count(env: &LegacyEnvironment, severity: Severity) -> f64 {
    env.incidents()
        .iter()
        .filter(|i| i.severity == severity)
        .count() as f64
}

fn penalty(condition: bool, amount: f64) -> f64 {
    if condition {
        amount
    } else {
        0.0
    }
}

fn either(condition: bool, if_true: f64, if_false: f64) -> f64 {
    if condition {
        if_true
    } else {
        if_false
    }
}

fn reliability_risk(env: &LegacyEnvironment) -> f64 {
    let cp = env.control_plane();
    let mut risk = 15.0;
    risk += severity_count(env, Severity::Sev1) * 12.0 + severity_count(env, Severity::Sev2) * 6.0;
    risk += (average_minutes_to_restore(env) / 60.0) * 10.0;
    risk += penalty(!cp.ha_enabled, 8.0);
    risk += penalty(!cp.db_clustered, 5.0);
    risk += penalty(!cp.message_bus_clustered, 4.0);
    risk += (env.network().change_failure_rate_percent / 100.0) * 12.0;
    risk += (100.0 - env.storage().backup_success_rate_percent) * 0.08;
    risk
}

fn operational_maturity(env: &LegacyEnvironment) -> f64 {
    let cp = env.control_plane();
    let mut maturity = 55.0;
    maturity -= severity_count(env, Severity::Sev1) * 5.0;
    maturity -= (env.config_drift_rate_percent() / 100.0) * 18.0;
    maturity -= penalty(
        matches!(
            cp.upgrade_strategy,
            UpgradeStrategy::Unknown | UpgradeStrategy::InPlace
        ),
        8.0,
    );
    maturity += either(cp.ha_enabled, 7.0, -5.0);
    maturity += either(env.storage().replication_enabled, 5.0, -6.0);
    maturity += either(
        matches!(
            env.network().east_west_visibility,
            Visibility::Medium | Visibility::High
        ),
        6.0,
        -5.0,
    );
    maturity
}

fn automation_maturity(env: &LegacyEnvironment) -> f64 {
    let steps = env.provisioning_workflow();
    let avg_error = steps.iter().map(|s| s.error_rate_percent).sum::<f64>() / steps.len().max(1) as f64;

    let mut maturity = 40.0;
    maturity -= (env.total_manual_touchpoints() as f64 * 1.5).min(18.0);
    maturity -= (avg_error * 0.6).min(12.0);
    maturity += (f64::from(env.infra_changes_per_week()) * 1.2).min(12.0);
    maturity += either(env.tenancy().self_service_portal, 10.0, -8.0);
    maturity
}

fn standardization(env: &LegacyEnvironment) -> f64 {
    let mut standard = 45.0;
    standard += either(env.compute().hypervisor != Hypervisor::Mixed, 8.0, -6.0);
    standard += either(env.network().segmentation != Segmentation::Mixed, 6.0, -4.0);
    standard += either(
        matches!(
            env.tenancy().rbac_maturity,
            RbacMaturity::RoleBased | RbacMaturity::PolicyAsCode
        ),
        8.0,
        -6.0,
    );
    standard += either(
        env.control_plane().upgrade_strategy == UpgradeStrategy::BlueGreen,
        6.0,
        -4.0,
    );
    standard
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{environment_with, sample_environment};
    use pretty_assertions::assert_eq;

    fn healthy() -> LegacyEnvironment {
        environment_with(|doc| {
            doc.incidents_last_90d.clear();
            doc.control_plane.ha_enabled = true;
            doc.control_plane.db_clustered = true;
            doc.control_plane.message_bus_clustered = true;
            doc.control_plane.upgrade_strategy = "blue_green".to_string();
            doc.network.change_failure_rate_percent = 0.0;
            doc.network.east_west_visibility = "high".to_string();
            doc.network.segmentation = "vxlan".to_string();
            doc.storage.backup_success_rate_percent = 100.0;
            doc.storage.replication_enabled = true;
            doc.compute.hypervisor = "kvm".to_string();
            doc.tenancy.rbac_maturity = "policy_as_code".to_string();
            doc.tenancy.self_service_portal = true;
            doc.config_drift_rate_percent = 0.0;
        })
    }

    #[test]
    fn sample_environment_scores() {
        let scores = score(&sample_environment());
        assert_eq!(
            scores,
            AssessmentScores {
                reliability_risk: 74.0,
                operational_maturity: 23.5,
                automation_maturity: 16.1,
                standardization: 25.0,
            }
        );
    }

    #[test]
    fn scoring_is_deterministic() {
        let env = sample_environment();
        assert_eq!(score(&env), score(&env));
    }

    #[test]
    fn no_incidents_uses_default_restore_time() {
        let env = healthy();
        assert!(env.incidents().is_empty());
        assert_eq!(average_minutes_to_restore(&env), DEFAULT_MINUTES_TO_RESTORE);
        // 15 baseline + (30 / 60) * 10
        assert_eq!(score(&env).reliability_risk, 20.0);
    }

    #[test]
    fn sev3_incidents_do_not_add_severity_weight() {
        let env = environment_with(|doc| {
            doc.incidents_last_90d.retain(|i| i.severity == "sev3");
        });
        // single sev3 with 30 minutes restore: same as the default average
        let without = environment_with(|doc| doc.incidents_last_90d.clear());
        assert_eq!(score(&env).reliability_risk, score(&without).reliability_risk);
    }

    #[test]
    fn healthy_environment_scores_high_maturity() {
        let scores = score(&healthy());
        assert_eq!(scores.operational_maturity, 73.0);
        assert_eq!(scores.standardization, 73.0);
    }

    #[test]
    fn reliability_risk_saturates_at_hundred() {
        let env = environment_with(|doc| {
            for incident in &mut doc.incidents_last_90d {
                incident.severity = "sev1".to_string();
                incident.minutes_to_restore = 20_160;
            }
        });
        assert_eq!(score(&env).reliability_risk, 100.0);
    }

    #[test]
    fn automation_penalties_are_capped() {
        let env = environment_with(|doc| {
            for step in &mut doc.provisioning_workflow {
                step.manual_touchpoints = 50;
                step.error_rate_percent = 100.0;
            }
            doc.infra_changes_per_week = 0;
            doc.tenancy.self_service_portal = false;
        });
        // 40 - 18 - 12 + 0 - 8
        assert_eq!(score(&env).automation_maturity, 2.0);
    }

    #[test]
    fn huge_touchpoint_counts_hit_the_cap_without_overflow() {
        let env = environment_with(|doc| {
            for step in &mut doc.provisioning_workflow {
                step.manual_touchpoints = 3_000_000_000;
                step.error_rate_percent = 0.0;
            }
            doc.infra_changes_per_week = 0;
            doc.tenancy.self_service_portal = false;
        });
        let steps = env.provisioning_workflow().len() as u64;
        assert!(steps >= 2);
        assert_eq!(env.total_manual_touchpoints(), steps * 3_000_000_000);
        // 40 - 18 - 0 + 0 - 8
        assert_eq!(score(&env).automation_maturity, 14.0);
    }
}

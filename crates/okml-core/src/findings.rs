//! Human-readable findings derived from environment thresholds

use crate::model::{AssessmentScores, LegacyEnvironment, Visibility};
use crate::recommendations::{AUTOMATION_MATURITY_CEILING, CONFIG_DRIFT_THRESHOLD};

/// Derive findings in a fixed order; the workflow summary is always first.
#[must_use]
pub fn derive_findings(env: &LegacyEnvironment, scores: &AssessmentScores) -> Vec<String> {
    let mut findings = vec![format!(
        "Provisioning workflow P50 is ~{:.1} minutes with {} manual touchpoints.",
        env.total_provisioning_minutes(),
        env.total_manual_touchpoints()
    )];

    if !env.control_plane().ha_enabled {
        findings.push(
            "Control plane HA is not enabled; reliability risk increases during upgrades \
             and failures."
                .to_string(),
        );
    }
    if env.config_drift_rate_percent() >= CONFIG_DRIFT_THRESHOLD {
        findings.push(format!(
            "Config drift rate is {:?}%, indicating inconsistent operations.",
            env.config_drift_rate_percent()
        ));
    }
    if scores.automation_maturity <= AUTOMATION_MATURITY_CEILING {
        findings.push(
            "Automation maturity is low; inconsistent provisioning and manual changes drive \
             variance."
                .to_string(),
        );
    }
    if env.network().east_west_visibility == Visibility::Low {
        findings.push(
            "East-west visibility is low; change impact is harder to predict and validate."
                .to_string(),
        );
    }
    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{environment_with, sample_environment};
    use crate::scoring::score;
    use pretty_assertions::assert_eq;

    #[test]
    fn sample_findings() {
        let env = sample_environment();
        let findings = derive_findings(&env, &score(&env));
        assert_eq!(
            findings,
            vec![
                "Provisioning workflow P50 is ~600.0 minutes with 11 manual touchpoints.",
                "Control plane HA is not enabled; reliability risk increases during upgrades \
                 and failures.",
                "Config drift rate is 14.0%, indicating inconsistent operations.",
                "Automation maturity is low; inconsistent provisioning and manual changes drive \
                 variance.",
                "East-west visibility is low; change impact is harder to predict and validate.",
            ]
        );
    }

    #[test]
    fn healthy_environment_only_reports_workflow() {
        let env = environment_with(|doc| {
            doc.control_plane.ha_enabled = true;
            doc.config_drift_rate_percent = 9.9;
            doc.network.east_west_visibility = "medium".to_string();
        });
        let scores = AssessmentScores {
            automation_maturity: 45.1,
            ..score(&env)
        };
        assert_eq!(derive_findings(&env, &scores).len(), 1);
    }

    #[test]
    fn workflow_summary_reports_the_full_touchpoint_total() {
        let env = environment_with(|doc| {
            for step in &mut doc.provisioning_workflow {
                step.manual_touchpoints = i64::from(u32::MAX);
            }
        });
        let expected = u64::from(u32::MAX) * env.provisioning_workflow().len() as u64;
        let findings = derive_findings(&env, &score(&env));
        assert!(findings[0].ends_with(&format!("with {expected} manual touchpoints.")));
    }
}

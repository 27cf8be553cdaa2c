//! Assessment report assembly
//!
//! Data flows strictly forward: environment → scores → recommendations →
//! findings. Nothing produced by an earlier step is modified by a later one.

use crate::findings::derive_findings;
use crate::model::{AssessmentReport, LegacyEnvironment};
use crate::recommendations::recommend;
use crate::scoring::score;

/// Run the full assessment over a validated environment
#[must_use]
pub fn assess(env: LegacyEnvironment) -> AssessmentReport {
    let scores = score(&env);
    let recommendations = recommend(&env, &scores);
    let findings = derive_findings(&env, &scores);
    AssessmentReport {
        env,
        scores,
        findings,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_environment;

    #[test]
    fn report_survives_json_round_trip() {
        let report = assess(sample_environment());
        let json = serde_json::to_string_pretty(&report).unwrap();
        let back: AssessmentReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, back);
    }

    #[test]
    fn tampered_report_is_revalidated() {
        let report = assess(sample_environment());
        let mut value = serde_json::to_value(&report).unwrap();
        value["env"]["compute"]["compute_nodes"] = serde_json::json!(0);
        let err = serde_json::from_value::<AssessmentReport>(value).unwrap_err();
        assert!(err.to_string().contains("compute.compute_nodes"));
    }

    #[test]
    fn tampered_scores_are_rejected() {
        let report = assess(sample_environment());
        let mut value = serde_json::to_value(&report).unwrap();
        value["scores"]["reliability_risk"] = serde_json::json!(-500.0);
        let err = serde_json::from_value::<AssessmentReport>(value).unwrap_err();
        assert!(err.to_string().contains("reliability_risk"));

        let mut value = serde_json::to_value(&report).unwrap();
        value["scores"]["standardization"] = serde_json::json!(100.5);
        assert!(serde_json::from_value::<AssessmentReport>(value).is_err());
    }

    #[test]
    fn tampered_priority_is_rejected() {
        let report = assess(sample_environment());
        let mut value = serde_json::to_value(&report).unwrap();
        value["recommendations"][0]["priority"] = serde_json::json!(0);
        let err = serde_json::from_value::<AssessmentReport>(value).unwrap_err();
        assert!(err.to_string().contains("priority"));
    }
}

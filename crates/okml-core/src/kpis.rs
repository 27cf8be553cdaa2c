//! KPI Simulator
//!
//! Produces illustrative before/after KPI evidence from scores and the roadmap.
//! The "before" snapshot is a deterministic function of the scores; the
//! "after" snapshot adds a jittered improvement drawn from a generator seeded
//! per call.
//!
//! # Outcome guarantee
//!
//! For every input and every seed, `after.uptime_monthly_percent` lies in
//! [99.9, 99.95] and `after.provisioning_time_minutes_p50` is strictly below
//! `before.provisioning_time_minutes_p50`.

use crate::model::{AssessmentScores, KpiPair, KpiSnapshot, Level, RoadmapItem};
use crate::numeric::round_to;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Target-state monthly uptime floor (percent)
pub const TARGET_UPTIME_FLOOR: f64 = 99.9;

/// Simulated uptime never exceeds this (percent)
pub const TARGET_UPTIME_CEILING: f64 = 99.95;

/// Provisioning time reduction the roadmap is built around
pub const TARGET_PROVISIONING_IMPROVEMENT: f64 = 0.40;

const UPTIME_JITTER: f64 = 0.05;
const IMPROVEMENT_JITTER: f64 = 0.02;
const IMPROVEMENT_RANGE: (f64, f64) = (0.32, 0.48);

/// Baseline monthly uptime, clamped to [97.5, 99.4]
#[must_use]
pub fn baseline_uptime(scores: &AssessmentScores) -> f64 {
    (99.2 - (scores.reliability_risk / 100.0) * 0.8).clamp(97.5, 99.4)
}

/// Baseline provisioning P50 in minutes, clamped to [60, 240]
#[must_use]
pub fn baseline_provisioning_p50(scores: &AssessmentScores) -> f64 {
    (120.0 + (100.0 - scores.automation_maturity) * 1.2).clamp(60.0, 240.0)
}

/// Simulate before/after KPIs
///
/// A fresh generator is created from `seed` for every call, so identical
/// arguments always give identical output and concurrent calls never share
/// random state.
#[must_use]
pub fn simulate(scores: &AssessmentScores, recommendations: &[RoadmapItem], seed: u64) -> KpiPair {
    let mut rng = StdRng::seed_from_u64(seed);

    let before_uptime = baseline_uptime(scores);
    let before_p50 = baseline_provisioning_p50(scores);

    let high_risk_reduction = recommendations
        .iter()
        .filter(|r| r.risk_reduction == Level::High)
        .count() as f64;
    let automation_focus = recommendations
        .iter()
        .filter(|r| r.has_tag("automation"))
        .count() as f64;

    let uptime_boost =
        0.55 + 0.12 * high_risk_reduction + rng.gen_range(-UPTIME_JITTER..=UPTIME_JITTER);
    let after_uptime = (before_uptime + uptime_boost)
        .max(TARGET_UPTIME_FLOOR)
        .min(TARGET_UPTIME_CEILING);

    let achieved = (TARGET_PROVISIONING_IMPROVEMENT - 0.03
        + 0.02 * automation_focus
        + rng.gen_range(-IMPROVEMENT_JITTER..=IMPROVEMENT_JITTER))
    .clamp(IMPROVEMENT_RANGE.0, IMPROVEMENT_RANGE.1);
    let after_p50 = before_p50 * (1.0 - achieved);

    KpiPair {
        before: KpiSnapshot {
            uptime_monthly_percent: round_to(before_uptime, 3),
            provisioning_time_minutes_p50: round_to(before_p50, 1),
        },
        after: KpiSnapshot {
            uptime_monthly_percent: round_to(after_uptime, 3),
            provisioning_time_minutes_p50: round_to(after_p50, 1),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_environment;
    use crate::recommendations::recommend;
    use crate::scoring::score;

    fn sample_inputs() -> (AssessmentScores, Vec<RoadmapItem>) {
        let env = sample_environment();
        let scores = score(&env);
        let recs = recommend(&env, &scores);
        (scores, recs)
    }

    #[test]
    fn sample_before_snapshot() {
        let (scores, recs) = sample_inputs();
        let kpis = simulate(&scores, &recs, 2026);
        assert_eq!(kpis.before.uptime_monthly_percent, 98.608);
        assert_eq!(kpis.before.provisioning_time_minutes_p50, 220.7);
    }

    #[test]
    fn sample_after_snapshot_meets_target() {
        let (scores, recs) = sample_inputs();
        let kpis = simulate(&scores, &recs, 2026);
        // 98.608 + 0.91 +/- 0.05 never reaches the floor on its own
        assert_eq!(kpis.after.uptime_monthly_percent, TARGET_UPTIME_FLOOR);
        // one automation-tagged item: improvement in [0.37, 0.41]
        let improvement = 1.0 - kpis.after.provisioning_time_minutes_p50 / 220.68;
        assert!((0.365..=0.415).contains(&improvement), "{improvement}");
    }

    #[test]
    fn same_seed_same_output() {
        let (scores, recs) = sample_inputs();
        assert_eq!(simulate(&scores, &recs, 7), simulate(&scores, &recs, 7));
    }

    #[test]
    fn uptime_is_capped() {
        let scores = AssessmentScores {
            reliability_risk: 0.0,
            operational_maturity: 100.0,
            automation_maturity: 100.0,
            standardization: 100.0,
        };
        let recs: Vec<RoadmapItem> = crate::recommendations::PLAYBOOK
            .iter()
            .map(|p| p.to_item())
            .collect();
        for seed in 0..50 {
            let kpis = simulate(&scores, &recs, seed);
            assert_eq!(kpis.after.uptime_monthly_percent, TARGET_UPTIME_CEILING);
        }
    }

    #[test]
    fn empty_roadmap_still_improves() {
        let (scores, _) = sample_inputs();
        let kpis = simulate(&scores, &[], 1);
        assert!(kpis.after.uptime_monthly_percent >= TARGET_UPTIME_FLOOR);
        assert!(kpis.after.provisioning_time_minutes_p50 < kpis.before.provisioning_time_minutes_p50);
    }

    #[test]
    fn baselines_are_clamped() {
        let worst = AssessmentScores {
            reliability_risk: 100.0,
            operational_maturity: 0.0,
            automation_maturity: 0.0,
            standardization: 0.0,
        };
        assert!((baseline_uptime(&worst) - 98.4).abs() < 1e-9);
        assert_eq!(baseline_provisioning_p50(&worst), 240.0);

        let best = AssessmentScores {
            reliability_risk: 0.0,
            operational_maturity: 100.0,
            automation_maturity: 100.0,
            standardization: 100.0,
        };
        assert_eq!(baseline_uptime(&best), 99.2);
        assert_eq!(baseline_provisioning_p50(&best), 120.0);
    }
}

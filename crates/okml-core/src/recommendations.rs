//! Recommendation Engine
//!
//! A fixed playbook of roadmap items, each paired with an applicability
//! predicate over (environment, scores). Every predicate is evaluated, matching
//! entries are collected, and the result is ordered by the entry's fixed
//! priority. Only *whether* an item appears depends on the input; its content
//! never does.

use crate::model::{AssessmentScores, Effort, LegacyEnvironment, Level, RoadmapItem, Visibility};

/// Reliability risk at or above which the control plane must be hardened
pub const RELIABILITY_RISK_THRESHOLD: f64 = 60.0;

/// Config drift (percent) at or above which automation is recommended
pub const CONFIG_DRIFT_THRESHOLD: f64 = 10.0;

/// Automation maturity at or below which automation is recommended
pub const AUTOMATION_MATURITY_CEILING: f64 = 45.0;

/// Stable recommendation ids
pub mod ids {
    pub const CONTROL_PLANE_HARDENING: &str = "R-001";
    pub const AUTOMATION_FIRST: &str = "A-010";
    pub const KUBERNETES_BASELINE: &str = "K-020";
    pub const OPERATIONS_GOVERNANCE: &str = "O-030";
    pub const NETWORK_VISIBILITY: &str = "N-040";
}

/// Applicability predicate
pub type Applies = fn(&LegacyEnvironment, &AssessmentScores) -> bool;

/// One playbook entry
#[derive(Debug, Clone, Copy)]
pub struct Play {
    pub id: &'static str,
    pub title: &'static str,
    pub rationale: &'static str,
    pub effort: Effort,
    pub impact: Level,
    pub risk_reduction: Level,
    pub priority: u32,
    pub tags: &'static [&'static str],
    pub applies: Applies,
}

impl Play {
    /// Materialize as a roadmap item
    #[must_use]
    pub fn to_item(&self) -> RoadmapItem {
        RoadmapItem {
            id: self.id.to_string(),
            title: self.title.to_string(),
            rationale: self.rationale.to_string(),
            effort: self.effort,
            impact: self.impact,
            risk_reduction: self.risk_reduction,
            priority: self.priority,
            tags: self.tags.iter().map(|t| (*t).to_string()).collect(),
        }
    }
}

/// The playbook, in priority order
pub const PLAYBOOK: [Play; 5] = [
    Play {
        id: ids::CONTROL_PLANE_HARDENING,
        title: "Harden OpenStack control plane (HA, clustered DB and message bus)",
        rationale: "Reduce single points of failure and improve recovery behavior by \
                    standardizing HA patterns across controller services.",
        effort: Effort::Medium,
        impact: Level::High,
        risk_reduction: Level::High,
        priority: 1,
        tags: &["openstack", "reliability", "control-plane"],
        applies: needs_control_plane_hardening,
    },
    Play {
        id: ids::AUTOMATION_FIRST,
        title: "Shift to automation-first provisioning (Terraform patterns + Ansible enforcement)",
        rationale: "Lower error rate and cycle time by making provisioning deterministic, \
                    reviewable, and easier to validate.",
        effort: Effort::Medium,
        impact: Level::High,
        risk_reduction: Level::High,
        priority: 2,
        tags: &["terraform", "ansible", "devops", "automation"],
        applies: needs_automation_shift,
    },
    Play {
        id: ids::KUBERNETES_BASELINE,
        title: "Standardize Kubernetes baseline (namespaces, RBAC, policies, and release cadence)",
        rationale: "Reduce operational variance and improve day-2 reliability with consistent \
                    cluster standards and upgrade practices.",
        effort: Effort::Medium,
        impact: Level::High,
        risk_reduction: Level::Medium,
        priority: 3,
        tags: &["kubernetes", "standardization"],
        applies: always,
    },
    Play {
        id: ids::OPERATIONS_GOVERNANCE,
        title: "Operationalize SLOs, runbooks, and change management gates",
        rationale: "Sustain reliability gains by turning standards into daily practice \
                    (incident response, upgrades, backups, and capacity reviews).",
        effort: Effort::Small,
        impact: Level::High,
        risk_reduction: Level::High,
        priority: 4,
        tags: &["operations", "sre", "governance"],
        applies: always,
    },
    Play {
        id: ids::NETWORK_VISIBILITY,
        title: "Improve east-west visibility and change safety \
                (baseline telemetry + review workflow)",
        rationale: "Lower change failure rate by tightening feedback loops and visibility \
                    for internal traffic and service dependencies.",
        effort: Effort::Small,
        impact: Level::Medium,
        risk_reduction: Level::Medium,
        priority: 5,
        tags: &["network", "observability"],
        applies: needs_network_visibility,
    },
];

/// Derive the prioritized roadmap for an environment
///
/// Items are sorted ascending by priority; the Kubernetes baseline and
/// operations governance entries are always present.
#[must_use]
pub fn recommend(env: &LegacyEnvironment, scores: &AssessmentScores) -> Vec<RoadmapItem> {
    let mut items: Vec<RoadmapItem> = PLAYBOOK
        .iter()
        .filter(|play| (play.applies)(env, scores))
        .map(Play::to_item)
        .collect();
    items.sort_by_key(|item| item.priority);
    items
}

fn needs_control_plane_hardening(env: &LegacyEnvironment, scores: &AssessmentScores) -> bool {
    scores.reliability_risk >= RELIABILITY_RISK_THRESHOLD || !env.control_plane().ha_enabled
}

fn needs_automation_shift(env: &LegacyEnvironment, scores: &AssessmentScores) -> bool {
    env.config_drift_rate_percent() >= CONFIG_DRIFT_THRESHOLD
        || scores.automation_maturity <= AUTOMATION_MATURITY_CEILING
}

fn needs_network_visibility(env: &LegacyEnvironment, _scores: &AssessmentScores) -> bool {
    env.network().east_west_visibility == Visibility::Low
}

fn always(_env: &LegacyEnvironment, _scores: &AssessmentScores) -> bool {
    true
}

//! Executive summary

/// Executive narrative followed by the raw KPI JSON for traceability
#[must_use]
pub fn render_executive_summary_md(kpis_json: &str) -> String {
    format!(
        "# Executive Summary: OpenStack + Kubernetes Modernization

## Situation
Legacy infrastructure suffered from slow provisioning and inconsistent operations. \
I led a modernization initiative using OpenStack improvements, Kubernetes standardization, \
and automation-first workflows. I delivered a roadmap, deployment patterns, and operations \
guidance that improved reliability and cut provisioning time. \
Outcome: 99.9% uptime and ~40% faster provisioning.

## Outcomes (simulated KPI evidence)
- Reliability improved to **99.9% monthly uptime** (target-state SLO).
- Provisioning time reduced by **~40%** by cutting manual touchpoints and standardizing automation.

## What I delivered
- Modernization assessment (scores, findings, risks) and a prioritized roadmap.
- Target-state architecture and ADR-backed standards for OpenStack + Kubernetes operations.
- Automation-first workflows (Terraform + Ansible patterns) with deterministic, reproducible evidence.
- Operations guidance (runbooks, SLOs/SLIs, and change management practices).

## Evidence
KPI JSON (for traceability):

```json
{}
```
",
        kpis_json.trim()
    )
}

//! Assessment report and risk register

use crate::num;
use okml_core::{AssessmentReport, RoadmapItem};
use std::fmt::Write as _;

/// Markdown assessment report
#[must_use]
pub fn render_assessment_md(report: &AssessmentReport) -> String {
    let s = &report.scores;
    let mut lines = vec![
        format!("# Modernization Assessment: {}", report.env.name()),
        String::new(),
        "## Executive overview".to_string(),
        "Legacy infrastructure showed reliability and provisioning constraints driven by \
         operational variance and manual touchpoints."
            .to_string(),
        String::new(),
        "## Assessment scores (0-100)".to_string(),
        format!("- Reliability risk (higher is worse): **{}**", num(s.reliability_risk)),
        format!("- Operational maturity: **{}**", num(s.operational_maturity)),
        format!("- Automation maturity: **{}**", num(s.automation_maturity)),
        format!("- Standardization: **{}**", num(s.standardization)),
        String::new(),
        "## Key findings".to_string(),
    ];
    lines.extend(report.findings.iter().map(|f| format!("- {f}")));
    lines.push(String::new());
    lines.push("## Prioritized recommendations".to_string());

    for r in &report.recommendations {
        lines.push(format!("### {}: {}", r.id, r.title));
        lines.push(format!("- Priority: {}", r.priority));
        lines.push(format!(
            "- Effort: {} | Impact: {} | Risk reduction: {}",
            r.effort.code(),
            r.impact.code(),
            r.risk_reduction.code()
        ));
        lines.push(format!("- Tags: {}", r.tags.join(", ")));
        lines.push(format!("- Rationale: {}", r.rationale));
        lines.push(String::new());
    }

    let mut out = lines.join("\n").trim_end().to_string();
    out.push('\n');
    out
}

/// Risk register CSV, one row per recommendation in roadmap order
///
/// Rows use CRLF line endings and RFC 4180 quoting.
#[must_use]
pub fn render_risk_register_csv(recommendations: &[RoadmapItem]) -> String {
    let mut out = String::from("risk_id,risk,mitigation,priority\r\n");
    for (i, rec) in recommendations.iter().enumerate() {
        let _ = write!(
            out,
            "RISK-{:03},{},{},{}\r\n",
            i + 1,
            csv_field(&rec.title),
            csv_field(&rec.rationale),
            rec.priority
        );
    }
    out
}

/// Quote a field when it contains a delimiter, quote or line break
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use okml_core::{Effort, Level};
    use pretty_assertions::assert_eq;

    fn item(title: &str, rationale: &str, priority: u32) -> RoadmapItem {
        RoadmapItem {
            id: "X-001".to_string(),
            title: title.to_string(),
            rationale: rationale.to_string(),
            effort: Effort::Small,
            impact: Level::High,
            risk_reduction: Level::Medium,
            priority,
            tags: vec!["sre".to_string()],
        }
    }

    #[test]
    fn csv_quotes_only_when_needed() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a, b"), "\"a, b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn risk_rows_are_numbered_in_order() {
        let csv = render_risk_register_csv(&[
            item("First", "Because, reasons", 1),
            item("Second", "Plain", 4),
        ]);
        assert_eq!(
            csv,
            "risk_id,risk,mitigation,priority\r\n\
             RISK-001,First,\"Because, reasons\",1\r\n\
             RISK-002,Second,Plain,4\r\n"
        );
    }

    #[test]
    fn empty_register_is_header_only() {
        assert_eq!(render_risk_register_csv(&[]), "risk_id,risk,mitigation,priority\r\n");
    }
}

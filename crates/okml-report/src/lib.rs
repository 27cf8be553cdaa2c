//! OKML Report
//!
//! Renderers for every artifact the pipeline writes. Renderers are pure
//! string producers; [`write`] holds the only filesystem access.
//!
//! - Assessment: Markdown report and CSV risk register
//! - KPIs: Markdown evidence, PNG charts and an HTML dashboard
//! - Design: target state, Mermaid diagram, ADRs and reference configs
//! - Executive summary

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod assessment;
pub mod charts;
pub mod design;
pub mod error;
pub mod executive;
pub mod kpis;
pub mod write;

pub use assessment::{render_assessment_md, render_risk_register_csv};
pub use charts::{render_provisioning_png, render_uptime_trend_png, uptime_series};
pub use design::{
    render_architecture_mermaid, render_k8s_baseline_manifest,
    render_openstack_controller_standard, render_target_state_md, Adr, ADRS,
};
pub use error::ReportError;
pub use executive::render_executive_summary_md;
pub use kpis::{png_data_uri, render_dashboard_html, render_kpis_md};
pub use write::{ensure_dir, write_bytes, write_json, write_text};

/// Shortest round-trip form of a float, always with a decimal point (`74.0`)
pub(crate) fn num(value: f64) -> String {
    format!("{value:?}")
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

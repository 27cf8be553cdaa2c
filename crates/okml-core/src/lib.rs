//! OKML Core
//!
//! Deterministic assessment pipeline for legacy OpenStack environments:
//!
//! 1. [`LegacyEnvironment`]: validated snapshot built from a YAML/JSON document
//! 2. [`score`]: four bounded maturity/risk scores
//! 3. [`recommend`]: prioritized roadmap from a fixed playbook
//! 4. [`simulate`]: seeded before/after KPI evidence
//!
//! # Example
//!
//! ```rust,ignore
//! use okml_core::{assess, load_environment, simulate};
//!
//! let env = load_environment("sample_data/legacy_env.yaml")?;
//! let report = assess(env);
//! let kpis = simulate(&report.scores, &report.recommendations, 2026);
//! assert!(kpis.after.uptime_monthly_percent >= 99.9);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod assessment;
pub mod document;
pub mod error;
pub mod findings;
pub mod kpis;
pub mod loader;
pub mod model;
pub mod recommendations;
pub mod scoring;
pub mod validation;

mod numeric;

#[cfg(test)]
mod fixtures;

pub use assessment::assess;
pub use document::{EnvironmentDocument, RoadmapItemDocument, ScoresDocument};
pub use error::{LoadError, ValidationError};
pub use findings::derive_findings;
pub use kpis::simulate;
pub use loader::{load_environment, parse_environment, DocumentFormat};
pub use model::{
    AssessmentReport, AssessmentScores, Effort, KpiPair, KpiSnapshot, LegacyEnvironment, Level,
    RoadmapItem,
};
pub use recommendations::recommend;
pub use scoring::score;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

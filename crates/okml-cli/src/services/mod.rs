//! Pipeline stages
//!
//! Each stage reads only artifacts written by earlier stages and writes only
//! under its own subdirectory of the artifacts directory:
//!
//! | stage       | directory     | requires                              |
//! |-------------|---------------|---------------------------------------|
//! | assessment  | `assessment/` | input document                        |
//! | design      | `design/`     |                                       |
//! | automation  | `automation/` | `<repo_root>/iac/{terraform,ansible}` |
//! | kpis        | `kpis/`       | `assessment/assessment_report.json`   |
//! | executive   | `executive/`  | `kpis/kpis.json`                      |

mod assessment;
mod automation;
mod demo;
mod design;
mod executive;
mod kpi;

pub use assessment::AssessmentService;
pub use automation::{AutomationMetadata, AutomationService};
pub use demo::{run_demo, RunMetadata, SAMPLE_INPUT};
pub use design::DesignService;
pub use executive::ExecutiveService;
pub use kpi::KpiService;

use crate::run_id::RunId;
use crate::settings::Settings;
use std::path::{Path, PathBuf};

/// Settings plus the id of the current run, shared by all stages
#[derive(Debug, Clone)]
pub struct RunContext {
    settings: Settings,
    run_id: RunId,
}

impl RunContext {
    /// Create new context with a fresh run id
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            run_id: RunId::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[inline]
    #[must_use]
    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    #[inline]
    #[must_use]
    pub fn artifacts_dir(&self) -> &Path {
        &self.settings.artifacts_dir
    }

    /// Output directory of a stage
    #[must_use]
    pub fn stage_dir(&self, stage: &str) -> PathBuf {
        self.settings.artifacts_dir.join(stage)
    }
}

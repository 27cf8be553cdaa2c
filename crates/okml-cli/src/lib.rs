//! OKML CLI
//!
//! Stage services, settings and logging behind the `okml` binary:
//! - [`services`]: assessment, design, automation, KPIs, executive summary, demo
//! - [`settings`]: defaults, `OKML_*` environment variables and flag overrides
//! - [`logging`]: `tracing` subscriber in pretty or JSON form

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod cli;
pub mod error;
pub mod logging;
pub mod run_id;
pub mod services;
pub mod settings;

pub use cli::{Cli, Command, GlobalArgs};
pub use error::{ConfigError, ServiceError};
pub use logging::init_logging;
pub use run_id::RunId;
pub use services::RunContext;
pub use settings::{LogFormat, Settings};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

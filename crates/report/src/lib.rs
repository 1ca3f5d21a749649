//! Inventory report: load, derive, render, emit.

pub mod config;
pub mod render;
pub mod run;
pub mod sink;

pub use config::ReportConfig;
pub use render::ReportDocument;
pub use run::{RunOutcome, run, run_with_console};
pub use sink::{ConsoleSink, FileSink, ReportError, ReportSink};

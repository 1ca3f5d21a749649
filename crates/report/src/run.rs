//! One batch run: load, derive, render, emit.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;

use stockview_infra::load_products;
use stockview_inventory::InventorySummary;

use crate::config::ReportConfig;
use crate::render::ReportDocument;
use crate::sink::{ConsoleSink, FileSink, ReportSink};

/// How a run ended (fatal failures are returned as errors instead).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// No products were loaded; no report file was written.
    NoProducts,
    /// The report was printed and written to `path`.
    Exported { path: PathBuf, products: usize },
}

/// Run against the process stdout.
pub fn run(config: &ReportConfig) -> anyhow::Result<RunOutcome> {
    let stdout = io::stdout();
    let mut console = ConsoleSink::new(stdout.lock());
    run_with_console(config, &mut console)
}

/// Run with an explicit console sink.
///
/// The console receives the report before the file is written.
pub fn run_with_console<W: Write>(
    config: &ReportConfig,
    console: &mut ConsoleSink<W>,
) -> anyhow::Result<RunOutcome> {
    let products = load_products(&config.input_path)
        .with_context(|| format!("loading inventory from {}", config.input_path.display()))?;

    if products.is_empty() {
        tracing::warn!(path = %config.input_path.display(), "no products to report");
        console.line(&format!(
            "Warning: no products found. Check '{}'.",
            config.input_display_name()
        ))?;
        return Ok(RunOutcome::NoProducts);
    }

    let summary = InventorySummary::compute(&products, config.low_stock_threshold);
    let report = ReportDocument::new(&summary, &config.currency).render();

    console.emit(&report)?;

    let mut file = FileSink::new(&config.output_path);
    file.emit(&report)?;

    console.line("")?;
    console.line(&format!(
        "Results exported to '{}'",
        config.output_display_name()
    ))?;

    Ok(RunOutcome::Exported {
        path: config.output_path.clone(),
        products: products.len(),
    })
}

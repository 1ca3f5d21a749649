use stockview_report::{ReportConfig, run};

fn main() -> anyhow::Result<()> {
    stockview_observability::init();

    let config = ReportConfig::beside_executable();
    let outcome = run(&config)?;
    tracing::debug!(?outcome, "run finished");

    Ok(())
}

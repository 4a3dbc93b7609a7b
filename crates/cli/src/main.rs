use anyhow::Context;

use bevstock_cli::AppConfig;

fn main() -> anyhow::Result<()> {
    bevstock_observability::init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    tracing::info!(
        report_path = %config.report_path.display(),
        layout = ?config.layout_path,
        "starting bevstock"
    );

    let summary = bevstock_cli::run(&config)?;

    println!(
        "{}",
        serde_json::to_string_pretty(&summary).context("failed to serialize run summary")?
    );
    Ok(())
}

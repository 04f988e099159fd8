//! Batch run: load inputs, detect anomalies, write the result document.

use std::time::Instant;

use tracing::info;

use crate::analysis::detect_anomalies;
use crate::config::RunConfig;
use crate::error::AnalyzerResult;
use crate::models::AnomalyResult;
use crate::sources::{FeedClient, load_dataset, write_results};

/// Runs one complete analysis.
///
/// Nothing is written unless every input loads; the output document is
/// written once, after all employees have been analysed.
///
/// # Example
///
/// ```no_run
/// use attendance_analyzer::config::ConfigLoader;
/// use attendance_analyzer::pipeline::run_batch;
/// use attendance_analyzer::sources::FeedClient;
///
/// # async fn example() -> attendance_analyzer::error::AnalyzerResult<()> {
/// let loader = ConfigLoader::load("./config/analyzer.yaml")?;
/// let results = run_batch(loader.config(), &FeedClient::new()).await?;
/// println!("{} employees flagged", results.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_batch(
    config: &RunConfig,
    client: &FeedClient,
) -> AnalyzerResult<Vec<AnomalyResult>> {
    let started = Instant::now();

    let dataset = load_dataset(&config.sources, client).await?;
    let results = detect_anomalies(&dataset, &config.analyzer);
    write_results(&config.sources.output_path, &results)?;

    info!(
        flagged = results.len(),
        duration_ms = started.elapsed().as_millis(),
        "Done"
    );
    Ok(results)
}

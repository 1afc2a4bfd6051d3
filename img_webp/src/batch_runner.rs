//! Directory run: discover candidates, convert them one by one, write the
//! color report and print the summary.

use crate::color_report::ColorReport;
use crate::config::ConvertConfig;
use crate::conversion_api::{convert_file, derive_output_path, ConversionOutcome};
use crate::ImgConvertError;
use anyhow::{Context, Result};
use console::style;
use shared_utils::common_utils::file_name_lossy;
use shared_utils::{collect_files, collect_files_sorted, print_summary_report, BatchResult};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{info, warn};

#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Candidate files found by discovery.
    pub candidates: usize,
    pub batch: BatchResult,
    /// Lines produced by this run, whether or not they were written.
    pub report: ColorReport,
    /// Set only when the report file was (re)written.
    pub report_path: Option<PathBuf>,
    pub duration: Duration,
}

/// Runs the converter over `base_dir`.
///
/// Per-file failures are printed, logged and counted but never abort the run.
/// Errors returned from here are run faults: an unusable configuration, an
/// unreadable base directory or a report that cannot be written.
pub fn run_batch(base_dir: &Path, config: &ConvertConfig) -> Result<RunSummary> {
    config.validate().context("Invalid configuration")?;

    let start = Instant::now();
    let files = if config.sort {
        collect_files_sorted(base_dir, config.extensions.as_slice(), config.recursive)
    } else {
        collect_files(base_dir, config.extensions.as_slice(), config.recursive)
    }
    .with_context(|| format!("Failed to scan directory: {}", base_dir.display()))?;

    let mut summary = RunSummary {
        candidates: files.len(),
        ..RunSummary::default()
    };

    if files.is_empty() {
        println!("{}", style("No images found.").yellow());
        info!(dir = %base_dir.display(), "No candidate images");
        summary.duration = start.elapsed();
        return Ok(summary);
    }

    println!("📂 {} image(s) found. Converting...\n", files.len());
    info!(
        dir = %base_dir.display(),
        count = files.len(),
        recursive = config.recursive,
        quality = config.quality,
        "Starting batch"
    );

    for file in &files {
        match convert_file(file, config) {
            Ok(ConversionOutcome::Skipped { job }) => {
                println!(
                    "⏭️  {} {}",
                    style("Already converted:").dim(),
                    file_name_lossy(&job.output)
                );
                summary.batch.skip();
            }
            Ok(ConversionOutcome::Converted { job, color, output_size }) => {
                println!(
                    "{} {} → {} | color: {}",
                    style("✅").green(),
                    file_name_lossy(&job.source),
                    file_name_lossy(&job.output),
                    style(color).bold()
                );
                info!(
                    path = %job.source.display(),
                    output = %job.output.display(),
                    color = %color,
                    bytes = output_size,
                    "Converted"
                );
                summary.report.push(&job.name, color);
                summary.batch.success();
            }
            Err(ImgConvertError::OutputExists(output)) => {
                println!(
                    "⏭️  {} {}",
                    style("Already converted:").dim(),
                    file_name_lossy(&output)
                );
                summary.batch.skip();
            }
            Err(e) => {
                println!(
                    "{} Error with {}: {}",
                    style("❌").red(),
                    file.display(),
                    style(&e).red()
                );
                warn!(
                    path = %file.display(),
                    output = %derive_output_path(file).display(),
                    error = %e,
                    "Conversion failed"
                );
                summary.batch.fail(file.clone(), e.to_string());
            }
        }
    }

    summary.report_path = summary
        .report
        .write_if_any(base_dir, &config.report_name)
        .with_context(|| {
            format!(
                "Failed to write color report: {}",
                base_dir.join(&config.report_name).display()
            )
        })?;

    if let Some(path) = &summary.report_path {
        println!(
            "\n🎨 Dominant colors saved to: {}",
            style(file_name_lossy(path)).cyan()
        );
        info!(report = %path.display(), lines = summary.report.len(), "Report written");
    }

    summary.duration = start.elapsed();
    print_summary_report(&summary.batch, summary.duration, "WebP Conversion");
    println!("\n{}", style("Conversion complete!").green().bold());
    info!(
        succeeded = summary.batch.succeeded,
        failed = summary.batch.failed,
        skipped = summary.batch.skipped,
        "Batch finished"
    );

    Ok(summary)
}

use std::path::Path;

use anyhow::{anyhow, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};

use crate::analysis::{AnalysisService, BatchAnalyzer};
use crate::analysis::core::ERROR_SENTINEL;
use crate::app_config::Config;
use crate::spreadsheet::SpreadsheetFile;

// @module: Application controller for single and batch analysis

/// Main application controller
pub struct Controller {
    /// Application configuration
    config: Config,
}

impl Controller {
    /// Create a controller with the given configuration
    pub fn with_config(config: Config) -> Self {
        Controller { config }
    }

    /// Analyze a single piece of text and display the result
    ///
    /// Blank input is rejected here, before any request is issued.
    pub async fn run_single(&self, text: &str) -> Result<()> {
        if text.trim().is_empty() {
            warn!("Please enter a text.");
            return Ok(());
        }

        let format = self.config.format;
        let service = AnalysisService::new(self.config.clone())?;

        match service.analyze_text(text).await {
            Ok(result) => {
                info!("✅ {} {}", format.sentiment_marker(), result.sentiment);
                info!("{}: {}/100", format.confidence_label(), result.score);
                Ok(())
            }
            Err(e) => {
                // Single mode shows one generic failure message, details go
                // to the log only
                error!("Failed to analyze the text, please try again.");
                Err(anyhow!("Analysis failed: {}", e))
            }
        }
    }

    /// Analyze every row of a spreadsheet column and export the results
    ///
    /// The run always completes: failed rows are recorded with sentinel
    /// values and reported as a warning count, and the output file is
    /// written regardless.
    pub async fn run_batch(
        &self,
        input_path: &Path,
        column: Option<&str>,
        output_path: &Path,
    ) -> Result<()> {
        let sheet = SpreadsheetFile::load(input_path)?;

        if sheet.row_count() == 0 {
            warn!("Spreadsheet {} has no data rows, nothing to do", input_path.display());
            return Ok(());
        }

        let column = match column {
            Some(name) => name.to_string(),
            None => sheet
                .column_names()
                .first()
                .cloned()
                .ok_or_else(|| anyhow!("Spreadsheet has no columns"))?,
        };

        let texts = sheet.text_column(&column)?;
        let total = texts.len();

        info!(
            "🚀 Analyzing {} rows from column '{}' with {}",
            total, column, self.config.provider.model
        );

        let service = AnalysisService::new(self.config.clone())?;
        let analyzer = BatchAnalyzer::new(service);

        // Create a progress bar for row tracking
        let progress_bar = ProgressBar::new(total as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} rows ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));

        let row_bar = progress_bar.clone();
        let results = analyzer
            .analyze_rows(&texts, move |processed, row_total| {
                row_bar.set_position(processed as u64);
                row_bar.set_message(format!("{} / {} analyzed", processed, row_total));
            })
            .await;

        progress_bar.finish_with_message("Analysis completed");

        let failures = BatchAnalyzer::count_failures(&results);
        if failures > 0 {
            warn!(
                "⚠️ {} of {} rows failed and were recorded as '{}'",
                failures, total, ERROR_SENTINEL
            );
        }

        sheet.write_with_results(output_path, &results)?;
        info!("✅ Results written to {}", output_path.display());

        Ok(())
    }
}

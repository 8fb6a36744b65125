/*!
 * Sequential batch analysis.
 *
 * This module reapplies the single-text flow across the rows of a
 * spreadsheet column. Requests are issued strictly one at a time in input
 * order, with a fixed delay between rows. A failed row never aborts the
 * batch: it is recorded with sentinel values and the loop continues, so the
 * output always holds exactly one result per input row.
 */

use std::time::Duration;

use log::warn;
use tokio::time::sleep;

use super::core::{AnalysisResult, AnalysisService};

/// Batch analyzer for processing spreadsheet rows one at a time
pub struct BatchAnalyzer {
    /// The analysis service to use
    service: AnalysisService,

    /// Fixed delay between consecutive rows
    row_delay: Duration,
}

impl BatchAnalyzer {
    /// Create a new batch analyzer
    pub fn new(service: AnalysisService) -> Self {
        Self {
            row_delay: Duration::from_millis(service.config.batch.row_delay_ms),
            service,
        }
    }

    /// Analyze every row of the given column texts
    ///
    /// Each row is classified with its own text. Per-row failures are
    /// logged, substituted with `AnalysisResult::error()` and the run
    /// continues; there is no retry and no early abort. The progress
    /// callback is invoked after every row with (processed, total).
    pub async fn analyze_rows(
        &self,
        rows: &[String],
        progress_callback: impl Fn(usize, usize),
    ) -> Vec<AnalysisResult> {
        let total = rows.len();
        let mut results = Vec::with_capacity(total);

        for (index, text) in rows.iter().enumerate() {
            let result = match self.service.analyze_text(text).await {
                Ok(result) => result,
                Err(e) => {
                    warn!("Row {} failed: {}", index + 1, e);
                    AnalysisResult::error()
                }
            };

            results.push(result);
            progress_callback(index + 1, total);

            if index + 1 < total && !self.row_delay.is_zero() {
                sleep(self.row_delay).await;
            }
        }

        results
    }

    /// Number of rows that carry the failure sentinel
    pub fn count_failures(results: &[AnalysisResult]) -> usize {
        results.iter().filter(|r| r.is_error()).count()
    }
}

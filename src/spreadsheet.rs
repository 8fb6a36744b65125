use std::fs::File;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use csv::{Reader, Writer};
use log::debug;

use crate::analysis::AnalysisResult;
use crate::errors::SpreadsheetError;

// @module: Tabular input/output for batch analysis

/// Header of the appended sentiment column
pub const SENTIMENT_COLUMN: &str = "Sentiment";

/// Header of the appended score column
pub const SCORE_COLUMN: &str = "Score";

/// A loaded CSV file: header row plus data records
#[derive(Debug, Clone)]
pub struct SpreadsheetFile {
    // @field: Column names from the header row
    pub headers: Vec<String>,

    // @field: Data rows, one Vec<String> per record
    pub records: Vec<Vec<String>>,
}

impl SpreadsheetFile {
    /// Load a CSV file from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(&path)
            .with_context(|| format!("Failed to open spreadsheet: {}", path.as_ref().display()))?;

        let mut reader = Reader::from_reader(file);

        let headers: Vec<String> = reader
            .headers()
            .with_context(|| format!("Failed to read header row: {}", path.as_ref().display()))?
            .iter()
            .map(|h| h.to_string())
            .collect();

        if headers.is_empty() {
            return Err(SpreadsheetError::MissingHeader.into());
        }

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result
                .with_context(|| format!("Failed to read row in {}", path.as_ref().display()))?;
            records.push(record.iter().map(|f| f.to_string()).collect());
        }

        debug!("Loaded {} rows from {}", records.len(), path.as_ref().display());

        Ok(Self { headers, records })
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    /// Column names from the header row
    pub fn column_names(&self) -> &[String] {
        &self.headers
    }

    /// Index of the column with the given header name
    pub fn column_index(&self, name: &str) -> Result<usize, SpreadsheetError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| SpreadsheetError::ColumnNotFound(name.to_string()))
    }

    /// Extract the text of one column, row by row
    ///
    /// Missing cells become empty strings; they are still analyzed like any
    /// other row so the output stays aligned with the input.
    pub fn text_column(&self, name: &str) -> Result<Vec<String>> {
        let index = self.column_index(name)?;

        Ok(self
            .records
            .iter()
            .map(|record| record.get(index).cloned().unwrap_or_default())
            .collect())
    }

    /// Write the input rows plus the two appended result columns
    pub fn write_with_results<P: AsRef<Path>>(
        &self,
        path: P,
        results: &[AnalysisResult],
    ) -> Result<()> {
        if results.len() != self.records.len() {
            return Err(anyhow!(
                "Result count {} does not match row count {}",
                results.len(),
                self.records.len()
            ));
        }

        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.as_ref().display()))?;

        let mut writer = Writer::from_writer(file);

        let mut headers = self.headers.clone();
        headers.push(SENTIMENT_COLUMN.to_string());
        headers.push(SCORE_COLUMN.to_string());
        writer.write_record(&headers)?;

        for (record, result) in self.records.iter().zip(results) {
            let mut row = record.clone();
            row.push(result.sentiment.clone());
            row.push(result.score.clone());
            writer.write_record(&row)?;
        }

        writer.flush()?;
        Ok(())
    }
}

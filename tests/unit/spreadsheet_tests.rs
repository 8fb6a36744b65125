/*!
 * Tests for CSV loading and result export
 */

use sentiscan::spreadsheet::{SpreadsheetFile, SCORE_COLUMN, SENTIMENT_COLUMN};
use sentiscan::AnalysisResult;

use crate::common::{create_temp_dir, create_test_csv, create_test_file};

#[test]
fn test_load_withValidCsv_shouldReadHeadersAndRows() {
    let temp_dir = create_temp_dir().unwrap();
    let path = create_test_csv(&temp_dir.path().to_path_buf(), "reviews.csv").unwrap();

    let sheet = SpreadsheetFile::load(&path).unwrap();

    assert_eq!(sheet.column_names(), ["id", "review"]);
    assert_eq!(sheet.row_count(), 3);
}

#[test]
fn test_load_withMissingFile_shouldFail() {
    let result = SpreadsheetFile::load("does_not_exist.csv");
    assert!(result.is_err());
}

#[test]
fn test_textColumn_withEmptyCells_shouldYieldEmptyStrings() {
    let temp_dir = create_temp_dir().unwrap();
    let path = create_test_csv(&temp_dir.path().to_path_buf(), "reviews.csv").unwrap();

    let sheet = SpreadsheetFile::load(&path).unwrap();
    let texts = sheet.text_column("review").unwrap();

    assert_eq!(texts, ["great!", "", "terrible"]);
}

#[test]
fn test_textColumn_withUnknownColumn_shouldFail() {
    let temp_dir = create_temp_dir().unwrap();
    let path = create_test_csv(&temp_dir.path().to_path_buf(), "reviews.csv").unwrap();

    let sheet = SpreadsheetFile::load(&path).unwrap();
    let result = sheet.text_column("comment");

    assert!(result.is_err());
}

#[test]
fn test_writeWithResults_shouldAppendSentimentAndScoreColumns() {
    let temp_dir = create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    let input = create_test_csv(&dir, "reviews.csv").unwrap();
    let output = dir.join("result.csv");

    let sheet = SpreadsheetFile::load(&input).unwrap();
    let results = vec![
        AnalysisResult::new("Positive", "90"),
        AnalysisResult::error(),
        AnalysisResult::new("Negative", "85"),
    ];

    sheet.write_with_results(&output, &results).unwrap();

    let exported = SpreadsheetFile::load(&output).unwrap();
    assert_eq!(exported.column_names(), ["id", "review", SENTIMENT_COLUMN, SCORE_COLUMN]);
    assert_eq!(exported.row_count(), 3);

    assert_eq!(exported.text_column(SENTIMENT_COLUMN).unwrap(), ["Positive", "Error", "Negative"]);
    assert_eq!(exported.text_column(SCORE_COLUMN).unwrap(), ["90", "Error", "85"]);

    // Original columns survive untouched
    assert_eq!(exported.text_column("review").unwrap(), ["great!", "", "terrible"]);
}

#[test]
fn test_writeWithResults_withMismatchedResultCount_shouldFail() {
    let temp_dir = create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    let input = create_test_csv(&dir, "reviews.csv").unwrap();
    let output = dir.join("result.csv");

    let sheet = SpreadsheetFile::load(&input).unwrap();
    let results = vec![AnalysisResult::new("Positive", "90")];

    assert!(sheet.write_with_results(&output, &results).is_err());
}

#[test]
fn test_load_withQuotedFields_shouldPreserveCommasInText() {
    let temp_dir = create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    let content = "id,review\n1,\"good, but pricey\"\n";
    let path = create_test_file(&dir, "quoted.csv", content).unwrap();

    let sheet = SpreadsheetFile::load(&path).unwrap();
    assert_eq!(sheet.text_column("review").unwrap(), ["good, but pricey"]);
}

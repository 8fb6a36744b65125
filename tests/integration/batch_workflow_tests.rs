/*!
 * End-to-end batch workflow tests: CSV in, analyzed CSV out
 */

use sentiscan::providers::mock::{MockProvider, MockRequest};
use sentiscan::spreadsheet::{SpreadsheetFile, SCORE_COLUMN, SENTIMENT_COLUMN};
use sentiscan::{AnalysisService, BatchAnalyzer};

use crate::common::{create_temp_dir, create_test_csv, test_config};

/// Reply generator that reacts to the row text embedded in the prompt:
/// negative texts get a negative label, blank rows get a malformed reply.
fn row_aware_reply(request: &MockRequest) -> String {
    if request.prompt.contains("Text: \n") {
        // Blank row: the model answers with something unparseable
        "I cannot determine the sentiment of an empty text.".to_string()
    } else if request.prompt.contains("terrible") {
        "Sentiment: Negative\nScore: 85".to_string()
    } else {
        "Sentiment: Positive\nScore: 90".to_string()
    }
}

#[tokio::test]
async fn test_batchWorkflow_withPartialFailures_shouldExportAlignedResults() {
    let temp_dir = create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    let input = create_test_csv(&dir, "reviews.csv").unwrap();
    let output = dir.join("sentiment_analysis_result.csv");

    // Load the spreadsheet and pick the text column
    let sheet = SpreadsheetFile::load(&input).unwrap();
    let texts = sheet.text_column("review").unwrap();
    assert_eq!(texts, ["great!", "", "terrible"]);

    // Run the batch with a provider that fails on the blank row
    let mock = MockProvider::working().with_custom_response(row_aware_reply);
    let service = AnalysisService::with_mock(test_config(), mock);
    let analyzer = BatchAnalyzer::new(service);

    let results = analyzer.analyze_rows(&texts, |_, _| {}).await;

    // One result per input row, in input order, failures as sentinels
    assert_eq!(results.len(), 3);
    assert_eq!((results[0].sentiment.as_str(), results[0].score.as_str()), ("Positive", "90"));
    assert_eq!((results[1].sentiment.as_str(), results[1].score.as_str()), ("Error", "Error"));
    assert_eq!((results[2].sentiment.as_str(), results[2].score.as_str()), ("Negative", "85"));

    // Export and verify the appended columns
    sheet.write_with_results(&output, &results).unwrap();

    let exported = SpreadsheetFile::load(&output).unwrap();
    assert_eq!(exported.column_names(), ["id", "review", SENTIMENT_COLUMN, SCORE_COLUMN]);
    assert_eq!(exported.text_column(SENTIMENT_COLUMN).unwrap(), ["Positive", "Error", "Negative"]);
    assert_eq!(exported.text_column(SCORE_COLUMN).unwrap(), ["90", "Error", "85"]);
}

#[tokio::test]
async fn test_analyzeText_withWorkingProvider_shouldReturnParsedResult() {
    let service = AnalysisService::with_mock(test_config(), MockProvider::working());

    let result = service.analyze_text("I love this product").await.unwrap();

    assert_eq!(result.sentiment, "Positive");
    assert_eq!(result.score, "90");
}

#[tokio::test]
async fn test_analyzeText_withMalformedReply_shouldFail() {
    let service = AnalysisService::with_mock(test_config(), MockProvider::missing_markers());

    let result = service.analyze_text("I love this product").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_analyzeText_withEmptyReply_shouldFail() {
    let service = AnalysisService::with_mock(test_config(), MockProvider::empty());

    let result = service.analyze_text("I love this product").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_analyzeText_shouldSendSystemPromptAndUserPrompt() {
    fn assert_request(request: &MockRequest) -> String {
        assert!(request.system.contains("sentiment analysis expert"));
        assert!(request.prompt.contains("Text: I love this product"));
        "Sentiment: Positive\nScore: 95".to_string()
    }

    let mock = MockProvider::working().with_custom_response(assert_request);
    let service = AnalysisService::with_mock(test_config(), mock);

    let result = service.analyze_text("I love this product").await.unwrap();
    assert_eq!(result.score, "95");
}

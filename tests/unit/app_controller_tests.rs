/*!
 * Tests for the application controller
 */

use anyhow::Result;
use tokio_test;

use sentiscan::app_controller::Controller;
use sentiscan::Config;

use crate::common::{create_temp_dir, create_test_file};

/// Blank single-mode input must be rejected before any request is issued.
/// The default config carries no API key, so reaching the provider path
/// would fail; completing with Ok proves the guard ran first.
#[test]
fn test_runSingle_withEmptyText_shouldNotIssueAnyRequest() -> Result<()> {
    let controller = Controller::with_config(Config::default());

    let result = tokio_test::block_on(async { controller.run_single("").await });

    assert!(result.is_ok(), "Blank input should be rejected without an API call");
    Ok(())
}

#[test]
fn test_runSingle_withWhitespaceOnlyText_shouldNotIssueAnyRequest() -> Result<()> {
    let controller = Controller::with_config(Config::default());

    for text in ["   ", "\t", " \n \t "] {
        let result = tokio_test::block_on(async { controller.run_single(text).await });
        assert!(result.is_ok(), "Whitespace-only input should be rejected without an API call");
    }

    Ok(())
}

/// A spreadsheet with a header but no data rows completes without issuing
/// any request and without creating an output file.
#[test]
fn test_runBatch_withNoDataRows_shouldCompleteWithoutRequests() -> Result<()> {
    let temp_dir = create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let input = create_test_file(&dir, "empty.csv", "id,review\n")?;
    let output = dir.join("result.csv");

    let controller = Controller::with_config(Config::default());
    let result = tokio_test::block_on(async {
        controller.run_batch(&input, Some("review"), &output).await
    });

    assert!(result.is_ok());
    assert!(!output.exists(), "No output file should be written for an empty batch");
    Ok(())
}

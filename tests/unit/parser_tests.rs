/*!
 * Tests for marker-line parsing of model replies
 */

use sentiscan::analysis::parser::parse_reply;
use sentiscan::{AnalysisError, PromptFormat};

#[test]
fn test_parseReply_withWellFormedReply_shouldReturnBothFields() {
    let reply = "Sentiment: Positive\nScore: 87";
    let (sentiment, score) = parse_reply(reply, PromptFormat::English).unwrap();

    assert_eq!(sentiment, "Positive");
    assert_eq!(score, "87");
}

#[test]
fn test_parseReply_withTurkishMarkers_shouldReturnBothFields() {
    let reply = "Duygu: Olumlu\nSkor: 90";
    let (sentiment, score) = parse_reply(reply, PromptFormat::Turkish).unwrap();

    assert_eq!(sentiment, "Olumlu");
    assert_eq!(score, "90");
}

#[test]
fn test_parseReply_withSurroundingNoise_shouldLocateMarkerLines() {
    let reply = "Here is my analysis.\n\nSentiment: Negative\nScore: 72\nHope this helps!";
    let (sentiment, score) = parse_reply(reply, PromptFormat::English).unwrap();

    assert_eq!(sentiment, "Negative");
    assert_eq!(score, "72");
}

#[test]
fn test_parseReply_withDuplicateMarkers_shouldUseFirstLine() {
    let reply = "Sentiment: Neutral\nScore: 55\nSentiment: Positive\nScore: 99";
    let (sentiment, score) = parse_reply(reply, PromptFormat::English).unwrap();

    assert_eq!(sentiment, "Neutral");
    assert_eq!(score, "55");
}

#[test]
fn test_parseReply_withPaddedFields_shouldTrimWhitespace() {
    let reply = "Sentiment:   Positive  \nScore:\t87 ";
    let (sentiment, score) = parse_reply(reply, PromptFormat::English).unwrap();

    assert_eq!(sentiment, "Positive");
    assert_eq!(score, "87");
}

#[test]
fn test_parseReply_withNonNumericScore_shouldKeepStringAsIs() {
    // The score field is never validated as numeric
    let reply = "Sentiment: Positive\nScore: very confident";
    let (_, score) = parse_reply(reply, PromptFormat::English).unwrap();

    assert_eq!(score, "very confident");
}

#[test]
fn test_parseReply_withMissingSentimentMarker_shouldFail() {
    let reply = "Score: 87";
    let result = parse_reply(reply, PromptFormat::English);

    assert!(matches!(result, Err(AnalysisError::MissingMarker(marker)) if marker == "Sentiment:"));
}

#[test]
fn test_parseReply_withMissingScoreMarker_shouldFail() {
    let reply = "Sentiment: Positive";
    let result = parse_reply(reply, PromptFormat::English);

    assert!(matches!(result, Err(AnalysisError::MissingMarker(marker)) if marker == "Score:"));
}

#[test]
fn test_parseReply_withWrongFormatMarkers_shouldFail() {
    // An English reply parsed with Turkish markers is malformed output
    let reply = "Sentiment: Positive\nScore: 87";
    let result = parse_reply(reply, PromptFormat::Turkish);

    assert!(result.is_err());
}

#[test]
fn test_parseReply_withEmptyReply_shouldFail() {
    assert!(matches!(
        parse_reply("", PromptFormat::English),
        Err(AnalysisError::EmptyReply)
    ));
    assert!(matches!(
        parse_reply("  \n \t ", PromptFormat::English),
        Err(AnalysisError::EmptyReply)
    ));
}

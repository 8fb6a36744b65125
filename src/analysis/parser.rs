/*!
 * Marker-line parsing of model replies.
 *
 * A well-formed reply contains one line starting with the sentiment marker
 * and one line starting with the score marker. The parser locates the first
 * line with each prefix, strips the prefix and trims the remainder. The
 * score is deliberately kept as a free-form string; the model is asked for
 * an integer but nothing enforces that it sends one.
 */

use crate::errors::AnalysisError;

use super::prompt::PromptFormat;

/// Find the first line starting with `marker`, strip it and trim the rest
fn field_after_marker(reply: &str, marker: &str) -> Option<String> {
    reply
        .lines()
        .find_map(|line| line.strip_prefix(marker))
        .map(|rest| rest.trim().to_string())
}

/// Parse a raw model reply into a (sentiment, score) pair
///
/// Fails deterministically when the reply is empty or either marker line is
/// absent, e.g. for malformed or truncated model output.
pub fn parse_reply(reply: &str, format: PromptFormat) -> Result<(String, String), AnalysisError> {
    if reply.trim().is_empty() {
        return Err(AnalysisError::EmptyReply);
    }

    let sentiment = field_after_marker(reply, format.sentiment_marker())
        .ok_or_else(|| AnalysisError::MissingMarker(format.sentiment_marker().to_string()))?;

    let score = field_after_marker(reply, format.score_marker())
        .ok_or_else(|| AnalysisError::MissingMarker(format.score_marker().to_string()))?;

    Ok((sentiment, score))
}

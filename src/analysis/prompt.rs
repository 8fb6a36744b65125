/*!
 * Prompt templates for sentiment classification.
 *
 * The templates instruct the model to answer with exactly two marker lines
 * (a sentiment line and a score line); the parser depends on those marker
 * prefixes verbatim.
 */

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Response language and format for the analysis prompt
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PromptFormat {
    /// English instruction template with "Sentiment:"/"Score:" markers
    #[default]
    English,
    /// Turkish instruction template with "Duygu:"/"Skor:" markers
    Turkish,
}

impl PromptFormat {
    /// Capitalized format name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Turkish => "Turkish",
        }
    }

    /// System prompt establishing the model's role
    pub fn system_prompt(&self) -> &'static str {
        match self {
            Self::English => "You are a professional sentiment analysis expert.",
            Self::Turkish => "Sen profesyonel bir duygu analiz uzmanısın.",
        }
    }

    /// Marker prefix of the sentiment line in the model reply
    pub fn sentiment_marker(&self) -> &'static str {
        match self {
            Self::English => "Sentiment:",
            Self::Turkish => "Duygu:",
        }
    }

    /// Marker prefix of the score line in the model reply
    pub fn score_marker(&self) -> &'static str {
        match self {
            Self::English => "Score:",
            Self::Turkish => "Skor:",
        }
    }

    /// Label used when displaying the confidence score
    pub fn confidence_label(&self) -> &'static str {
        match self {
            Self::English => "Confidence Score",
            Self::Turkish => "Güven Skoru",
        }
    }

    /// Build the instruction prompt embedding the text to classify
    ///
    /// The template performs no validation; empty input is rejected by the
    /// caller before a prompt is ever built.
    pub fn build_prompt(&self, text: &str) -> String {
        match self {
            Self::English => format!(
                "Determine the sentiment of the following text and give your confidence score.\n\
                 Answer only in the following format:\n\
                 Sentiment: (Positive/Negative/Neutral)\n\
                 Score: (Integer from 0-100)\n\n\
                 Text: {}\n\n\
                 Answer:",
                text
            ),
            Self::Turkish => format!(
                "Aşağıdaki metnin duygusunu belirle ve güven skorunu ver.\n\
                 Yalnızca şu formatta cevap ver:\n\
                 Duygu: (Olumlu/Olumsuz/Nötr)\n\
                 Skor: (0-100 arası tam sayı)\n\n\
                 Metin: {}\n\n\
                 Cevap:",
                text
            ),
        }
    }

    /// Lowercase format identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::English => "english".to_string(),
            Self::Turkish => "turkish".to_string(),
        }
    }
}

// Implement Display trait for PromptFormat
impl std::fmt::Display for PromptFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

// Implement FromStr trait for PromptFormat
impl std::str::FromStr for PromptFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "english" | "en" => Ok(Self::English),
            "turkish" | "tr" => Ok(Self::Turkish),
            _ => Err(anyhow!("Invalid prompt format: {}", s)),
        }
    }
}

/*!
 * Core analysis service implementation.
 *
 * This module contains the main AnalysisService struct and its
 * implementation, which is responsible for classifying text sentiment
 * through a chat-completion provider.
 */

use anyhow::{Result, anyhow};
use log::debug;

use crate::app_config::Config;
use crate::providers::Provider;
use crate::providers::mock::{MockProvider, MockRequest};
use crate::providers::openai::{OpenAI, OpenAIRequest};

use super::parser::parse_reply;

/// Sentinel value recorded for both fields when a batch row fails
pub const ERROR_SENTINEL: &str = "Error";

/// Outcome of classifying one piece of text
///
/// Both fields are free-form strings: the sentiment label is not a closed
/// set (the model can emit unexpected wording) and the score is never
/// validated as numeric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    /// Sentiment label, e.g. "Positive"
    pub sentiment: String,

    /// Confidence score as reported by the model, e.g. "87"
    pub score: String,
}

impl AnalysisResult {
    /// Create a result from parsed reply fields
    pub fn new(sentiment: impl Into<String>, score: impl Into<String>) -> Self {
        Self {
            sentiment: sentiment.into(),
            score: score.into(),
        }
    }

    /// Create the sentinel result recorded for a failed batch row
    pub fn error() -> Self {
        Self {
            sentiment: ERROR_SENTINEL.to_string(),
            score: ERROR_SENTINEL.to_string(),
        }
    }

    /// Whether this result carries the failure sentinel
    pub fn is_error(&self) -> bool {
        self.sentiment == ERROR_SENTINEL && self.score == ERROR_SENTINEL
    }
}

/// Analysis provider implementation variants
enum AnalysisProviderImpl {
    /// OpenAI chat-completions API
    OpenAI {
        /// Client instance
        client: OpenAI,
    },

    /// Mock provider for tests
    Mock {
        /// Client instance
        client: MockProvider,
    },
}

/// Main service for sentiment classification
pub struct AnalysisService {
    /// Provider implementation
    provider: AnalysisProviderImpl,

    /// Configuration for the analysis service
    pub config: Config,
}

impl AnalysisService {
    /// Create a new analysis service with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        let provider = AnalysisProviderImpl::OpenAI {
            client: OpenAI::with_timeout(
                config.provider.api_key.clone(),
                config.provider.endpoint.clone(),
                config.provider.timeout_secs,
            ),
        };

        Ok(Self { provider, config })
    }

    /// Create an analysis service backed by a mock provider (for tests)
    pub fn with_mock(config: Config, client: MockProvider) -> Self {
        Self {
            provider: AnalysisProviderImpl::Mock { client },
            config,
        }
    }

    /// Classify the sentiment of one piece of text
    ///
    /// Builds the format-specific prompt, requests a deterministic
    /// completion (temperature 0) and parses the two marker lines out of
    /// the reply.
    pub async fn analyze_text(&self, text: &str) -> Result<AnalysisResult> {
        let format = self.config.format;
        let prompt = format.build_prompt(text);

        debug!("Requesting completion for {} chars of input", text.len());
        let reply = self.complete_prompt(format.system_prompt(), &prompt).await?;

        let (sentiment, score) = parse_reply(&reply, format)
            .map_err(|e| anyhow!("Failed to parse reply: {} (reply was: {})", e, reply))?;

        Ok(AnalysisResult::new(sentiment, score))
    }

    /// Test the connection to the configured provider
    pub async fn test_connection(&self) -> Result<()> {
        match &self.provider {
            AnalysisProviderImpl::OpenAI { client } => {
                client.test_connection(&self.config.provider.model).await
            }
            AnalysisProviderImpl::Mock { client } => {
                client.test_connection().await.map_err(|e| anyhow!(e))
            }
        }
    }

    /// Send the prompt to the provider and return the raw reply text
    async fn complete_prompt(&self, system: &str, prompt: &str) -> Result<String> {
        match &self.provider {
            AnalysisProviderImpl::OpenAI { client } => {
                let request = OpenAIRequest::new(&self.config.provider.model)
                    .add_message("system", system)
                    .add_message("user", prompt)
                    .temperature(0.0);

                let response = client.complete(request).await?;
                Ok(OpenAI::extract_text_from_response(&response))
            }
            AnalysisProviderImpl::Mock { client } => {
                let request = MockRequest {
                    system: system.to_string(),
                    prompt: prompt.to_string(),
                };

                let response = client.complete(request).await?;
                Ok(MockProvider::extract_text(&response))
            }
        }
    }
}

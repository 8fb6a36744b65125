/*!
 * Sentiment analysis service built on chat-completion providers.
 *
 * This module contains the core functionality for classifying text
 * sentiment using an LLM provider. It is split into several submodules:
 *
 * - `prompt`: Prompt templates and the response format selector
 * - `parser`: Marker-line parsing of model replies
 * - `core`: Core analysis functionality and service definition
 * - `batch`: Sequential batch processing of spreadsheet rows
 */

// Re-export main types for easier usage
pub use self::batch::BatchAnalyzer;
pub use self::core::{AnalysisResult, AnalysisService};
pub use self::prompt::PromptFormat;

// Submodules
pub mod batch;
pub mod core;
pub mod parser;
pub mod prompt;

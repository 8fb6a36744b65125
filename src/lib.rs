/*!
 * # sentiscan - AI-powered sentiment analysis
 *
 * A Rust library for classifying text sentiment using chat-completion APIs.
 *
 * ## Features
 *
 * - Single-text sentiment classification with a confidence score
 * - Batch analysis of a CSV column with exported results
 * - English and Turkish prompt/response formats
 * - Marker-line parsing of free-form model replies
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `analysis`: Sentiment classification services:
 *   - `analysis::prompt`: Prompt templates and format selection
 *   - `analysis::parser`: Marker-line reply parsing
 *   - `analysis::core`: Core analysis functionality
 *   - `analysis::batch`: Sequential batch processing
 * - `spreadsheet`: CSV input and result export
 * - `app_controller`: Main application controller
 * - `providers`: Client implementations for LLM providers:
 *   - `providers::openai`: OpenAI chat-completions client
 *   - `providers::mock`: Mock provider for tests
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod analysis;
pub mod spreadsheet;
pub mod app_controller;
pub mod providers;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use analysis::{AnalysisResult, AnalysisService, BatchAnalyzer, PromptFormat};
pub use spreadsheet::SpreadsheetFile;
pub use errors::{AnalysisError, AppError, ProviderError, SpreadsheetError};

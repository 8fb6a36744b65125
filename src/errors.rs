/*!
 * Error types for the sentiscan application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when working with provider APIs
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors that can occur when interpreting a model reply
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The reply did not contain a line starting with the expected marker
    #[error("Reply is missing the '{0}' marker line")]
    MissingMarker(String),

    /// The reply contained no usable text at all
    #[error("Reply was empty")]
    EmptyReply,

    /// Error from the provider API
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

/// Errors that can occur during spreadsheet processing
#[derive(Error, Debug)]
pub enum SpreadsheetError {
    /// The requested column does not exist in the file
    #[error("Column '{0}' not found in spreadsheet")]
    ColumnNotFound(String),

    /// The file contained no header row
    #[error("Spreadsheet has no header row")]
    MissingHeader,
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from reply analysis
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    /// Error from spreadsheet processing
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] SpreadsheetError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use crate::analysis::PromptFormat;
use crate::app_config::Config;
use app_controller::Controller;

mod analysis;
mod app_config;
mod app_controller;
mod errors;
mod providers;
mod spreadsheet;

/// CLI Wrapper for PromptFormat to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliPromptFormat {
    English,
    Turkish,
}

impl From<CliPromptFormat> for PromptFormat {
    fn from(cli_format: CliPromptFormat) -> Self {
        match cli_format {
            CliPromptFormat::English => PromptFormat::English,
            CliPromptFormat::Turkish => PromptFormat::Turkish,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// Options shared by the analyze and batch commands
#[derive(Args, Debug)]
struct CommonArgs {
    /// Response language/format
    #[arg(short, long, value_enum)]
    format: Option<CliPromptFormat>,

    /// Model name to use for analysis
    #[arg(short, long)]
    model: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Text to analyze
    #[arg(value_name = "TEXT")]
    text: String,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// Input CSV file to process
    #[arg(value_name = "INPUT_FILE")]
    input_path: PathBuf,

    /// Column containing the text to analyze (defaults to the first column)
    #[arg(long)]
    column: Option<String>,

    /// Output CSV file with appended Sentiment and Score columns
    #[arg(short, long, default_value = "sentiment_analysis_result.csv")]
    output: PathBuf,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze the sentiment of a single text
    Analyze(AnalyzeArgs),

    /// Analyze every row of a CSV column and export the results
    Batch(BatchArgs),

    /// Generate shell completions for sentiscan
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// sentiscan - AI-powered sentiment analysis
///
/// A sentiment analysis tool that sends text to a chat-completion API and
/// reports a sentiment label with a confidence score.
#[derive(Parser, Debug)]
#[command(name = "sentiscan")]
#[command(version = "0.1.0")]
#[command(about = "AI-powered sentiment analysis tool")]
#[command(long_about = "sentiscan classifies the sentiment of text using a chat-completion API.

EXAMPLES:
    sentiscan analyze \"I love this product\"     # Analyze a single text
    sentiscan analyze -f turkish \"Harika!\"      # Use the Turkish prompt format
    sentiscan batch reviews.csv --column review  # Analyze a CSV column
    sentiscan batch -o result.csv reviews.csv    # Choose the output file
    sentiscan completions bash > sentiscan.bash  # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config-path. If the config file doesn't
    exist, a default one will be created automatically. The API key is read
    from the config file or the OPENAI_API_KEY environment variable.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code and emoji tag for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("31", "❌ "),
            Level::Warn => ("33", "🚧 "),
            Level::Info => ("32", " "),
            Level::Debug => ("36", "🔍 "),
            Level::Trace => ("35", "📋 "),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, emoji) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[1;{}m{} {} {}\x1B[0m",
                color, now, emoji, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "sentiscan", &mut std::io::stdout());
            Ok(())
        }
        Commands::Analyze(args) => run_analyze(args).await,
        Commands::Batch(args) => run_batch(args).await,
    }
}

/// Load the configuration and apply command-line overrides
fn load_config(common: &CommonArgs) -> Result<Config> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &common.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(config_log_level.to_level_filter());
    }

    let mut config = Config::load_or_create(&common.config_path)?;

    if let Some(format) = &common.format {
        config.format = format.clone().into();
    }

    if let Some(model) = &common.model {
        config.provider.model = model.clone();
    }

    if let Some(log_level) = &common.log_level {
        config.log_level = log_level.clone().into();
    } else {
        log::set_max_level(config.log_level.to_level_filter());
    }

    config.resolve_api_key();
    config.validate()?;

    Ok(config)
}

async fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    // Reject blank input before touching the configuration; it must never
    // reach the API
    if args.text.trim().is_empty() {
        warn!("Please enter a text.");
        return Ok(());
    }

    let config = load_config(&args.common)?;
    let controller = Controller::with_config(config);
    controller.run_single(&args.text).await
}

async fn run_batch(args: BatchArgs) -> Result<()> {
    let config = load_config(&args.common)?;
    let controller = Controller::with_config(config);
    controller
        .run_batch(&args.input_path, args.column.as_deref(), &args.output)
        .await
}

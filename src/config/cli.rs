use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum, ValueHint, builder::BoolishValueParser};

/// Command-line arguments for the postboard binary.
#[derive(Debug, Parser)]
#[command(name = "postboard", version, about = "List and create posts against a posts API")]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(long = "config-file", env = "POSTBOARD_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: SettingsOverrides,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Load the page once and print the posts container.
    List,
    /// Fill in the form, submit it, and print the refreshed posts.
    Create(CreateArgs),
    /// Load the page, then submit posts read from stdin until EOF.
    Interactive,
    /// Load the page and write it as a standalone HTML file.
    Snapshot(SnapshotArgs),
}

#[derive(Debug, Args, Clone)]
pub struct CreateArgs {
    /// Post title; empty values are sent as-is.
    #[arg(long, allow_hyphen_values = true)]
    pub title: String,

    /// Post content; empty values are sent as-is.
    #[arg(long, allow_hyphen_values = true)]
    pub content: String,
}

#[derive(Debug, Args, Clone)]
pub struct SnapshotArgs {
    /// Path to the HTML file to write.
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub file: PathBuf,
}

#[derive(Debug, Args, Default, Clone)]
pub struct SettingsOverrides {
    /// Override the API base URL, e.g. <http://127.0.0.1:8080>.
    #[arg(long = "base-url", value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Override the IANA time zone used for post timestamps.
    #[arg(long = "timezone", value_name = "ZONE", global = true)]
    pub timezone: Option<String>,

    /// Override how the posts container is printed.
    #[arg(long = "format", value_name = "FORMAT", global = true)]
    pub format: Option<OutputFormat>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        global = true
    )]
    pub log_json: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    Text,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Text => "text",
        }
    }
}

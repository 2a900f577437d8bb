//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use datasheet::registry::DEFAULT_REGISTRY_DIR;

/// Datasheet: register models with descriptive tags and view their datasheets
#[derive(Parser)]
#[command(name = "datasheet")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Registry directory
    #[arg(long, global = true, env = "DATASHEET_REGISTRY", default_value = DEFAULT_REGISTRY_DIR)]
    pub registry: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register a new model version with datasheet tags
    Register {
        /// Model name
        #[arg(value_name = "NAME")]
        name: String,

        /// Path to the model file or directory
        #[arg(short, long)]
        path: PathBuf,

        /// Framework the model was built with (e.g., "ScikitLearn")
        #[arg(long, default_value = "Custom")]
        framework: String,

        /// Framework version
        #[arg(long)]
        framework_version: Option<String>,

        /// Short model description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Tag as key=value (repeatable)
        #[arg(short, long = "tag", value_name = "KEY=VALUE")]
        tags: Vec<String>,

        /// JSON file with a tag object; --tag values override it
        #[arg(long)]
        tags_file: Option<PathBuf>,

        /// Skip hashing the model artifact
        #[arg(long)]
        no_digest: bool,
    },

    /// Render a model's datasheet
    Show {
        /// Model name
        #[arg(value_name = "NAME")]
        name: String,

        /// Model version (default: latest)
        #[arg(long, value_name = "N")]
        model_version: Option<u32>,

        /// Output format
        #[arg(short, long, default_value = "html")]
        format: OutputFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Open the written file in the browser (implies --format page)
        #[arg(long, requires = "output")]
        open: bool,
    },

    /// List a model's tags and which datasheet fields are missing
    Tags {
        /// Model name
        #[arg(value_name = "NAME")]
        name: String,

        /// Model version (default: latest)
        #[arg(long, value_name = "N")]
        model_version: Option<u32>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List registered models and versions
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// HTML fragment
    #[default]
    Html,
    /// Standalone HTML page
    Page,
    /// Markdown source
    Markdown,
    /// Sections and diagnostics as JSON
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "page" => Ok(OutputFormat::Page),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown format: {}. Use html, page, markdown, or json.",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Page => write!(f, "page"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_register() {
        let cli = Cli::parse_from([
            "datasheet",
            "--registry",
            "/tmp/reg",
            "register",
            "diabetes",
            "--path",
            "model.pkl",
            "--tag",
            "title=Diabetes",
            "-t",
            "help=https://example.com",
        ]);

        assert_eq!(cli.registry, PathBuf::from("/tmp/reg"));
        match cli.command {
            Commands::Register { name, tags, .. } => {
                assert_eq!(name, "diabetes");
                assert_eq!(tags, vec!["title=Diabetes", "help=https://example.com"]);
            }
            _ => panic!("expected register"),
        }
    }

    #[test]
    fn test_output_format() {
        assert_eq!("MD".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("page".parse::<OutputFormat>().unwrap(), OutputFormat::Page);
        assert!("pdf".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_open_requires_output() {
        let result = Cli::try_parse_from(["datasheet", "show", "m", "--open"]);
        assert!(result.is_err());
    }
}

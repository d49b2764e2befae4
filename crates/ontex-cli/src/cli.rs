//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Ontex - explore an OWL ontology from the terminal.
#[derive(Debug, Parser)]
#[command(name = "ontex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Ontology document (RDF/XML)
    #[arg(short, long, global = true, env = "ONTEX_FILE")]
    pub file: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Namespace whose elements are read as assertions
    #[arg(long, global = true)]
    pub namespace: Option<String>,

    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (identifiers only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Entity counts and skipped elements
    Summary,

    /// Class tree and property schemas
    Schema,

    /// Individuals grouped into buckets
    Groups(GroupsArgs),

    /// Details, relations and referrers of one individual
    Show(ShowArgs),

    /// Filter individuals with the query language
    Query(QueryArgs),

    /// Example queries
    Guide,

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the groups command.
#[derive(Debug, Parser)]
pub struct GroupsArgs {
    /// Only this bucket
    pub bucket: Option<String>,
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Individual identifier (local name)
    pub id: String,
}

/// Arguments for the query command.
#[derive(Debug, Parser)]
pub struct QueryArgs {
    /// Query text, e.g. `price:<30` or `chef:karim`
    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub text: Vec<String>,
}

impl QueryArgs {
    /// The query words joined back into one string
    pub fn query(&self) -> String {
        self.text.join(" ")
    }
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::parse_from(["ontex"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_query_words_are_joined() {
        let cli = Cli::parse_from(["ontex", "query", "Grand", "Tasting"]);
        match cli.command {
            Some(Command::Query(args)) => assert_eq!(args.query(), "Grand Tasting"),
            _ => panic!("Expected Query command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["ontex", "show", "Res001", "-o", "json", "--file", "menu.owl"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert_eq!(cli.file, Some(PathBuf::from("menu.owl")));
        match cli.command {
            Some(Command::Show(args)) => assert_eq!(args.id, "Res001"),
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_groups_bucket_is_optional() {
        let cli = Cli::parse_from(["ontex", "groups"]);
        assert!(matches!(cli.command, Some(Command::Groups(GroupsArgs { bucket: None }))));
    }

    #[test]
    fn test_format_conversion() {
        let format: crate::config::OutputFormat = CliFormat::Quiet.into();
        assert_eq!(format, crate::config::OutputFormat::Quiet);
    }
}

//! Ontex CLI - Explore an OWL ontology from the terminal.

use clap::Parser;
use ontex_cli::commands;
use ontex_cli::repl;
use ontex_cli::session::{self, Session};
use ontex_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so stdout stays machine-readable.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> ontex_cli::Result<()> {
    // Load config
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Override namespace if specified
    if let Some(namespace) = cli.namespace {
        config.loader.domain_namespace = namespace;
    }

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // The guide needs no document
    if let Some(Command::Guide) = cli.command {
        return commands::execute_guide(&formatter);
    }

    let cwd = std::env::current_dir()?;
    let path = session::discover(cli.file.as_deref(), &cwd, config.ontology.as_deref())?;
    let session = Session::open(&path, &config)?;

    match cli.command {
        None | Some(Command::Repl) => repl::run_repl(&session, &config, &formatter),
        Some(Command::Summary) => commands::execute_summary(&session, &formatter),
        Some(Command::Schema) => commands::execute_schema(&session, &formatter),
        Some(Command::Groups(args)) => commands::execute_groups(args, &session, &formatter),
        Some(Command::Show(args)) => commands::execute_show(args, &session, &formatter),
        Some(Command::Query(args)) => commands::execute_query(args, &session, &formatter),
        Some(Command::Guide) => commands::execute_guide(&formatter),
    }
}

//! Starbook CLI - documentation site navigation.
//!
//! Provides commands for:
//! - `sidebar`: Print the sidebar built for a page

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::SidebarArgs;
use output::Output;

/// Starbook - documentation site navigation.
#[derive(Parser)]
#[command(name = "starbook", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the navigation sidebar for a page.
    Sidebar(SidebarArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = matches!(&cli.command, Commands::Sidebar(args) if args.verbose);

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Sidebar(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_sidebar_args() {
        let cli = Cli::try_parse_from(["starbook", "sidebar", "guides/install", "--json", "-v"])
            .unwrap();

        assert!(matches!(cli.command, Commands::Sidebar(ref args) if args.verbose));
    }

    #[test]
    fn test_sidebar_requires_slug() {
        let result = Cli::try_parse_from(["starbook", "sidebar"]);

        assert!(result.is_err());
    }
}

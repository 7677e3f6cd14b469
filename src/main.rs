//! case-workflow CLI - Check union case transitions against the workflow rules

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use case_workflow::cli::{commands, Cli, Commands};
use case_workflow::config::load_registry;
use case_workflow::errors::{to_exit_code, VERDICT_REJECTED_EXIT_CODE};
use case_workflow::ValidationResult;

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli) {
        Ok(Some(verdict)) if !verdict.valid => std::process::exit(VERDICT_REJECTED_EXIT_CODE),
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

fn run(cli: Cli) -> case_workflow::Result<Option<ValidationResult>> {
    let registry = load_registry(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Check {
            from,
            to,
            role,
            days,
            evidence,
        }) => commands::check::run(&registry, from, to, role, days, evidence, cli.json).map(Some),
        Some(Commands::Path {
            states,
            contexts,
            role,
        }) => commands::path::run(&registry, &states, contexts.as_deref(), role, cli.json)
            .map(Some),
        Some(Commands::Replay { file, output }) => {
            commands::replay::run(&registry, &file, output.as_deref(), cli.json).map(Some)
        }
        Some(Commands::Next { state, role }) => {
            commands::next::run(&registry, state, role, cli.json).map(|()| None)
        }
        Some(Commands::Describe { state }) => {
            commands::describe::run(&registry, state, cli.json).map(|()| None)
        }
        None => {
            // Default to showing help - clap handles this
            println!("Use --help for usage information");
            Ok(None)
        }
    }
}

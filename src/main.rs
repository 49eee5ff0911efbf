use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;
use memsync::cli::{Cli, Commands};
use memsync::{SyncContext, commands};
use std::io;
use std::process;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e:#}", "Error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Update {
            manifest,
            apps_root,
            prefix,
            ignore,
            no_pin,
        } => {
            let ctx = SyncContext::new(manifest, Some(apps_root), prefix, ignore, !no_pin)?;
            commands::update::execute(&ctx)?;
        }
        Commands::Delete { manifest, prefix } => {
            let ctx = SyncContext::new(manifest, None, prefix, Vec::new(), false)?;
            commands::delete::execute(&ctx)?;
        }
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

//! Docent CLI - Command-line interface for searching a documentation tree.

use clap::Parser;
use docent_cli::commands;
use docent_cli::{Cli, Command, Config, Formatter, Session};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> docent_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Load config
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::path()?,
    };
    let mut config = Config::load_from(&config_path)?;

    // Override profile if specified
    if let Some(profile_name) = cli.profile {
        config.switch_profile(profile_name)?;
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

    let output = match cli.command {
        Command::Profile(args) => commands::execute_profile(args, &mut config, &config_path, &formatter)?,
        cmd => {
            // Commands that read the docs tree
            let session = Session::open(&config.docent_config(cli.docs_root.as_deref())?)?;

            match cmd {
                Command::Search(args) => commands::execute_search(args, &session, &formatter)?,
                Command::Show(args) => commands::execute_show(args, &session, &formatter)?,
                Command::Related(args) => commands::execute_related(args, &session, &formatter)?,
                Command::Categories => commands::execute_categories(&session, &formatter)?,
                Command::Outdated(args) => commands::execute_outdated(args, &session, &formatter)?,
                Command::Profile(_) => unreachable!(),
            }
        }
    };

    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

/// Warnings only by default; `-v` adds loader info, `-vv` graph debug output
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();
}

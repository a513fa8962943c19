//! entgraph shell binary.
//!
//! Usage:
//!   entgraph
//!   entgraph --user amy --role editor
//!   entgraph --config ./session.ron --no-banner -vv

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use entgraph_cli::{Config, run_repl, write_banner};
use entgraph_kernel::{Interpreter, Namespace};
use entgraph_types::User;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Interactive shell over an in-memory namespace.
#[derive(Parser, Debug)]
#[command(name = "entgraph")]
#[command(about = "Interactive shell over an in-memory namespace")]
struct Args {
    /// Config file (default: <config dir>/entgraph/config.ron)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Session user name
    #[arg(long)]
    user: Option<String>,

    /// Session role
    #[arg(long)]
    role: Option<String>,

    /// Skip the welcome line
    #[arg(long)]
    no_banner: bool,

    /// Log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = if verbose > 0 {
        EnvFilter::new(level)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(args: Args) -> Result<()> {
    let mut config = Config::resolve(args.config.as_deref()).context("failed to load config")?;
    if let Some(name) = args.user {
        config.user.name = name;
    }
    if let Some(role) = args.role {
        config.user.role = role;
    }
    if args.no_banner {
        config.banner = false;
    }

    let User { name, role } = &config.user;
    tracing::info!(user = %name, role = %role, "starting session");

    let stdout = io::stdout();
    if config.banner {
        write_banner(stdout.lock()).context("failed to write banner")?;
    }

    let mut interpreter = Interpreter::new(Namespace::new(), config.user.clone());
    run_repl(
        &mut interpreter,
        io::stdin().lock(),
        stdout.lock(),
        &config.prompt,
    )
    .context("failed to read input")
}

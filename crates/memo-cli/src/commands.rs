use anyhow::Context;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use memo_server::{MemoServer, ServerConfig};
use memo_service::NoteService;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args, cli.verbose),
        Command::Config(args) => cmd_config(args),
    }
}

/// Load the config file, if any, then apply command-line overrides.
fn resolve_config(source: &ConfigSource) -> anyhow::Result<ServerConfig> {
    let mut config = match &source.config {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ServerConfig::default(),
    };

    if let Some(bind) = source.bind {
        config.bind_addr = bind;
    }
    if source.no_cors {
        config.enable_cors = false;
    }
    if let Some(level) = &source.log_level {
        config.log_level = level.clone();
    }
    Ok(config)
}

fn init_logging(default_level: &str, verbose: bool) {
    let default_level = if verbose { "debug" } else { default_level };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn cmd_serve(args: ServeArgs, verbose: bool) -> anyhow::Result<()> {
    let config = resolve_config(&args.source)?;
    init_logging(&config.log_level, verbose);
    tracing::debug!(?config, "resolved configuration");

    let url = format!("http://{}", config.bind_addr);
    let cors = if config.enable_cors {
        "enabled".green()
    } else {
        "disabled".yellow()
    };
    println!("{} memo server on {}", "✓".green().bold(), url.bold());
    println!("  API:  {}", "/api/notes, /api/stats".cyan());
    println!("  CORS: {}", cors);

    let server = MemoServer::new(config, NoteService::global());
    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime.block_on(server.serve())?;
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args.source)?;
    print!("{}", config.to_toml_string()?);
    Ok(())
}

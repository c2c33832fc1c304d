use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "memo",
    about = "memo — a small in-memory note server with a REST API",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the note server
    Serve(ServeArgs),
    /// Print the effective server configuration as TOML
    Config(ConfigArgs),
}

/// Settings shared by every command that resolves a configuration.
#[derive(Args, Clone, Debug, Default)]
pub struct ConfigSource {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Address to listen on, overriding the file
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    /// Disable cross-origin resource sharing
    #[arg(long)]
    pub no_cors: bool,
    /// Default log filter, overriding the file
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Args)]
pub struct ServeArgs {
    #[command(flatten)]
    pub source: ConfigSource,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub source: ConfigSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_serve() {
        let cli = Cli::try_parse_from(["memo", "serve"]).unwrap();
        if let Command::Serve(args) = cli.command {
            assert!(args.source.bind.is_none());
            assert!(!args.source.no_cors);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_serve_bind() {
        let cli = Cli::try_parse_from(["memo", "serve", "--bind", "0.0.0.0:8080"]).unwrap();
        if let Command::Serve(args) = cli.command {
            assert_eq!(args.source.bind, Some("0.0.0.0:8080".parse().unwrap()));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_serve_rejects_bad_bind() {
        assert!(Cli::try_parse_from(["memo", "serve", "--bind", "not-an-addr"]).is_err());
    }

    #[test]
    fn parse_serve_all_flags() {
        let cli = Cli::try_parse_from([
            "memo", "serve", "-c", "memo.toml", "--no-cors", "--log-level", "debug",
        ])
        .unwrap();
        if let Command::Serve(args) = cli.command {
            assert_eq!(args.source.config, Some(PathBuf::from("memo.toml")));
            assert!(args.source.no_cors);
            assert_eq!(args.source.log_level.as_deref(), Some("debug"));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_config() {
        let cli = Cli::try_parse_from(["memo", "config"]).unwrap();
        assert!(matches!(cli.command, Command::Config(_)));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["memo", "--verbose", "serve"]).unwrap();
        assert!(cli.verbose);
    }
}

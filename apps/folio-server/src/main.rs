use std::path::PathBuf;

use clap::{Parser, Subcommand};
use folio_server::{AppConfig, logging, server};
use sha2::{Digest, Sha256};

#[derive(Parser)]
#[command(name = "folio-server")]
#[command(author, version, about = "Folio portfolio site servers", long_about = None)]
struct Cli {
    /// YAML configuration file (default: config/folio.yaml when present)
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the session issuer
    Issuer,
    /// Run the content API
    Api,
    /// Run the site behind the edge gate
    Site,
    /// Run all three servers in one process
    All,
    /// Validate configuration and exit
    CheckConfig,
    /// Print the SHA-256 digest to put in `memory_sessions.users[].password_sha256`
    HashPassword { password: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::HashPassword { password } = &cli.command {
        println!("{}", hex::encode(Sha256::digest(password.as_bytes())));
        return Ok(());
    }

    let cfg = AppConfig::load(cli.config.as_deref())?;
    logging::init(&cfg.logging, cli.json_logs)?;

    match cli.command {
        Command::Issuer => {
            server::serve("issuer", cfg.server.issuer_addr, server::issuer_router(&cfg)).await
        }
        Command::Api => server::serve("api", cfg.server.api_addr, server::api_router(&cfg)).await,
        Command::Site => {
            server::serve("site", cfg.server.site_addr, server::site_router(&cfg)?).await
        }
        Command::All => {
            let site = server::site_router(&cfg)?;
            tokio::try_join!(
                server::serve("issuer", cfg.server.issuer_addr, server::issuer_router(&cfg)),
                server::serve("api", cfg.server.api_addr, server::api_router(&cfg)),
                server::serve("site", cfg.server.site_addr, site),
            )?;
            Ok(())
        }
        Command::CheckConfig => {
            server::site_router(&cfg)?;
            if cfg.auth.secret_bytes().is_none() {
                tracing::warn!("auth.signing_secret is not set; admin writes will always be rejected");
            }
            tracing::info!("configuration is valid");
            Ok(())
        }
        Command::HashPassword { .. } => Ok(()),
    }
}

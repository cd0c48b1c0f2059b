use std::path::{Path, PathBuf};

use api_types::group::GroupLedger;
use clap::{Parser, Subcommand};

mod settings;

#[derive(Debug, Parser)]
#[command(name = "quits", version, about = "Who owes whom in a shared-expense group")]
struct Cli {
    /// Settings file, without extension.
    #[arg(short, long, env = "QUITS_CONFIG", default_value = "settings")]
    config: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server (default).
    Serve,
    /// Compute balances for a group snapshot (JSON) and print the response.
    Report {
        path: PathBuf,
        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    let settings = settings::Settings::new(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "quits={level},server={level},engine={level}",
            level = settings.app.level
        ))
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let addr = settings.server_addr();
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            server::run_with_listener(listener).await?;
        }
        Command::Report { path, pretty } => {
            let output = report(&path, pretty)?;
            println!("{output}");
        }
    }

    Ok(())
}

fn report(path: &Path, pretty: bool) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    tracing::info!("reading group snapshot from {}", path.display());
    let raw = std::fs::read_to_string(path)?;
    let ledger: GroupLedger = serde_json::from_str(&raw)?;
    let balances = server::group_balances(ledger)?;

    let output = if pretty {
        serde_json::to_string_pretty(&balances)?
    } else {
        serde_json::to_string(&balances)?
    };
    Ok(output)
}

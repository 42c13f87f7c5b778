//! buscacep - resolve a Brazilian postal code to a street address.
//!
//! One-shot command-line front end over [`buscacep_core::resolve`]: races
//! every configured provider for the given CEP and prints whichever street
//! arrives first, or `timeout` when the deadline passes with no answer.
//! Logs go to stderr so the answer on stdout stays script-friendly.

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use buscacep_core::{RaceConfig, resolve};
use buscacep_providers::{AddressClients, http_client};
use buscacep_types::{Cep, RaceOutcome};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "buscacep")]
#[command(about = "Race BrasilAPI and ViaCEP for a postal code and print the first answer")]
struct Cli {
    /// Postal code (CEP) to resolve.
    #[arg(default_value = "70200001")]
    cep: String,

    /// Outer race deadline in milliseconds.
    #[arg(long, default_value_t = 1000)]
    deadline_ms: u64,

    /// Per-provider request timeout in seconds.
    #[arg(long, default_value_t = 60)]
    request_timeout_secs: u64,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let cep = Cep::new(cli.cep).context("invalid postal code")?;
    let request_timeout = Duration::from_secs(cli.request_timeout_secs);

    let http = http_client().context("failed to build the HTTP client")?;
    let mut clients = AddressClients::new(http);
    clients.brazil_api = clients.brazil_api.with_request_timeout(request_timeout);
    clients.via_cep = clients.via_cep.with_request_timeout(request_timeout);

    let config = RaceConfig::new().with_deadline(Duration::from_millis(cli.deadline_ms));
    tracing::debug!(
        deadline_ms = cli.deadline_ms,
        request_timeout_secs = cli.request_timeout_secs,
        "race configured"
    );

    println!("Find postcode address {cep}");

    match resolve(&clients, &cep, &config).await {
        RaceOutcome::Winner { provider, address } => {
            println!(
                "Street from {}: {}",
                provider.display_name(),
                address.street()
            );
            Ok(ExitCode::SUCCESS)
        }
        RaceOutcome::Timeout => {
            println!("timeout");
            Ok(ExitCode::FAILURE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    #[test]
    fn bare_invocation_uses_defaults() {
        let cli = Cli::try_parse_from(["buscacep"]).unwrap();
        assert_eq!(cli.cep, "70200001");
        assert_eq!(cli.deadline_ms, 1000);
        assert_eq!(cli.request_timeout_secs, 60);
    }

    #[test]
    fn timing_flags_are_independent() {
        let cli = Cli::try_parse_from([
            "buscacep",
            "01001000",
            "--deadline-ms",
            "250",
            "--request-timeout-secs",
            "5",
        ])
        .unwrap();
        assert_eq!(cli.cep, "01001000");
        assert_eq!(cli.deadline_ms, 250);
        assert_eq!(cli.request_timeout_secs, 5);
    }
}

//! Application startup and composition root.
//!
//! This module contains exit codes, tracing setup, and the explicit wiring
//! of monitor, transport, trust registry, resolver, and suggestion facade.
//! Nothing here is a global: every long-lived service is constructed once
//! and handed to whoever needs it.

use std::sync::Arc;

use tracing::Level;
use tracing_subscriber::EnvFilter;

use cotton_net::client::{ReqwestTransport, RestClient};
use cotton_net::config::{Cli, Command, ValidatedConfig};
use cotton_net::dns::DnsResolver;
use cotton_net::reachability::{
    ConnectionType, NetworkReachabilityStatus, ReachabilityHandle, ReachabilityMonitor,
};
use cotton_net::suggest::{
    AutocompleteProvider, DuckDuckGoAutocomplete, GoogleAutocomplete, SuggestFacade,
};
use cotton_net::trust::{EvaluatorCertVerifier, ExpectedHosts};

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - invalid args, bad config file, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - network failure, resolution error, etc.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Sets up the tracing subscriber for logging.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Executes the selected subcommand.
///
/// # Errors
///
/// Returns an error for unusable input or when the command itself fails.
pub async fn execute(
    cli: &Cli,
    config: ValidatedConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(command) = &cli.command else {
        return Err("no subcommand given; try 'resolve <url>' or 'suggest <query>'".into());
    };

    // The CLI has no platform connectivity signal, so the monitor is seeded
    // reachable; the browser feeds it from the OS instead.
    let monitor = ReachabilityMonitor::with_status(NetworkReachabilityStatus::Reachable(
        ConnectionType::EthernetOrWifi,
    ));

    let expected_hosts = Arc::new(ExpectedHosts::new());
    let transport = build_transport(&expected_hosts)?;

    match command {
        Command::Resolve { url } => {
            resolve(url, &config, transport, expected_hosts, monitor.handle()).await?;
        }
        Command::Suggest { query } => {
            suggest(query, &config, transport, monitor.handle()).await;
        }
        Command::Init { .. } => {
            // Handled before configuration loading
        }
    }

    Ok(())
}

/// Builds the production transport with the trust evaluator installed,
/// degrading to stock TLS when the evaluator cannot be constructed.
fn build_transport(
    expected_hosts: &Arc<ExpectedHosts>,
) -> Result<ReqwestTransport, Box<dyn std::error::Error>> {
    match EvaluatorCertVerifier::new(Arc::clone(expected_hosts)) {
        Ok(verifier) => Ok(ReqwestTransport::with_cert_verifier(Arc::new(verifier))?),
        Err(e) => {
            tracing::warn!(error = %e, "trust evaluator unavailable, using stock TLS");
            Ok(ReqwestTransport::new())
        }
    }
}

async fn resolve(
    url: &str,
    config: &ValidatedConfig,
    transport: ReqwestTransport,
    expected_hosts: Arc<ExpectedHosts>,
    reachability: ReachabilityHandle,
) -> Result<(), Box<dyn std::error::Error>> {
    let url = url::Url::parse(url)?;

    let client = RestClient::new(transport, config.doh_server.clone(), reachability)
        .with_timeout(config.timeout);
    let resolver = DnsResolver::new(client).with_expected_hosts(expected_hosts);

    let resolved = resolver.resolve_or_original(&url).await;
    println!("{resolved}");

    Ok(())
}

async fn suggest(
    query: &str,
    config: &ValidatedConfig,
    transport: ReqwestTransport,
    reachability: ReachabilityHandle,
) {
    let suggestions = match config.provider {
        AutocompleteProvider::Google => {
            let strategy =
                GoogleAutocomplete::new(transport, reachability).with_timeout(config.timeout);
            SuggestFacade::new(strategy).suggestions(query).await
        }
        AutocompleteProvider::DuckDuckGo => {
            let strategy =
                DuckDuckGoAutocomplete::new(transport, reachability).with_timeout(config.timeout);
            SuggestFacade::new(strategy).suggestions(query).await
        }
    };

    for suggestion in suggestions {
        println!("{suggestion}");
    }
}

// crates/event-ingress-server/src/main.rs
// ============================================================================
// Module: Event Ingress Entry Point
// Description: Process entry point wiring configuration into the server.
// Purpose: Load channel configuration, assemble the dispatcher, and serve.
// Dependencies: clap, event-ingress-config, event-ingress-core, event-ingress-relay, tokio
// ============================================================================

//! ## Overview
//! The binary reads channel endpoints from the environment, builds the HTTP
//! forwarder and stderr audit sink, and runs the ingress server until it is
//! interrupted. Missing or invalid configuration is fatal at startup.
//! Security posture: endpoint values come from the deployment environment and
//! are validated before any listener is opened.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use clap::ArgAction;
use clap::Parser;
use event_ingress_config::IngressConfig;
use event_ingress_core::IngressDispatcher;
use event_ingress_core::StderrAuditSink;
use event_ingress_relay::HttpForwarder;
use event_ingress_server::IngressServer;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "event-ingress", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue)]
    show_version: bool,
    /// Override the listen port from the environment-derived bind address.
    #[arg(long, value_name = "PORT")]
    port: Option<u16>,
}

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// Process entry point returning an exit code.
#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(message) => {
            let _ = writeln!(std::io::stderr(), "event-ingress: {message}");
            ExitCode::FAILURE
        }
    }
}

/// Loads configuration, assembles the dispatch pipeline, and serves.
async fn run() -> Result<ExitCode, String> {
    let cli = Cli::parse();
    if cli.show_version {
        let _ = writeln!(std::io::stderr(), "event-ingress {}", env!("CARGO_PKG_VERSION"));
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = IngressConfig::from_env().map_err(|err| err.to_string())?;
    if let Some(port) = cli.port {
        config = config.with_port(port);
    }

    let forwarder =
        HttpForwarder::with_timeout(config.server.forward_timeout).map_err(|err| err.to_string())?;
    let dispatcher = IngressDispatcher::new(
        config.routes.clone(),
        Arc::new(forwarder),
        Arc::new(StderrAuditSink),
    );
    let server = IngressServer::new(&config.server, Arc::new(dispatcher));
    server.serve().await.map_err(|err| err.to_string())?;
    Ok(ExitCode::SUCCESS)
}

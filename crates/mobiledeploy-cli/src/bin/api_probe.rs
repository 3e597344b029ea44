//! api-probe - one diagnostic request against the hosted LLM endpoint.
//!
//! Verifies reachability and credentials with a single POST. Exit code 0 on
//! a 2xx response, 1 on any classified failure. Never retries.

use clap::Parser;
use mobiledeploy::{probe, resolve_api_key, DeployError, NetworkConfig, ProbeConfig, ReqwestTransport};
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "api-probe")]
#[command(about = "Send one test request to the hosted LLM API")]
struct Args {
    /// API key; falls back to the GEMINI_API_KEY environment variable
    api_key: Option<String>,

    /// Model identifier interpolated into the endpoint template
    #[arg(long, default_value = NetworkConfig::DEFAULT_MODEL)]
    model: String,

    /// Prompt text to send
    #[arg(long, default_value = NetworkConfig::DEFAULT_PROMPT)]
    prompt: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { Level::DEBUG } else { Level::WARN };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    std::process::exit(run(&args));
}

fn run(args: &Args) -> i32 {
    let config = ProbeConfig {
        model: args.model.clone(),
        prompt: args.prompt.clone(),
        timeout: Duration::from_secs(args.timeout_secs),
    };

    let api_key = match resolve_api_key(args.api_key.as_deref()) {
        Ok(key) => key,
        Err(e) => {
            eprintln!("{e}");
            return e.exit_code();
        }
    };

    let transport = match ReqwestTransport::new(config.timeout) {
        Ok(transport) => transport,
        Err(e) => {
            eprintln!("{e}");
            return e.exit_code();
        }
    };

    match probe(&transport, &config, &api_key) {
        Ok(response) => {
            println!("Status: {}", response.status_code);
            println!("Response:");
            println!("{}", response.raw_body);
            0
        }
        Err(err) => {
            match &err {
                DeployError::Http { status_code, body } => {
                    println!("HTTPError: {status_code}");
                    println!("{body}");
                }
                other => eprintln!("Request failed: {other}"),
            }
            err.exit_code()
        }
    }
}

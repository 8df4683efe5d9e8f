//! Header Audit CLI

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use header_audit::auditor::HeaderAuditor;
use header_audit::config;
use header_audit::error::Result;
use header_audit::http::HttpClient;
use header_audit::models::AuditConfig;
use header_audit::report::console::ConsoleReporter;

/// Checks a site's HTTP response for required security headers
#[derive(Parser)]
#[command(name = "header-audit", version, about, long_about = None)]
struct Cli {
    /// Target URL to audit (default: https://vibecodeaudit.app)
    #[arg(short, long)]
    target: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn build_config(cli: &Cli) -> Result<AuditConfig> {
    let mut audit_config = match cli.config {
        Some(ref path) => config::load_config(path)?,
        None => AuditConfig::default(),
    };
    config::merge_cli_args(&mut audit_config, cli.target.clone(), cli.timeout)?;
    Ok(audit_config)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "header_audit=debug"
    } else {
        "header_audit=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let audit_config = match build_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("  {} {}", "Error:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    let client = match HttpClient::from_config(&audit_config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("  {} {}", "Error:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    let mut reporter = ConsoleReporter::stdout();
    let result = HeaderAuditor
        .run(&client, &audit_config.target, &mut reporter)
        .await;

    if result.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use atmo_layers::{describe, describe_in, run_self_checks, Report};
use clap::{CommandFactory, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(
    name = "atmo",
    about = "Classify altitude into an atmospheric layer and describe it."
)]
struct Args {
    /// Altitude value (km by default unless --miles)
    #[arg(conflicts_with = "batch", allow_negative_numbers = true)]
    altitude: Option<f64>,

    /// CSV with altitudes (and optional unit column)
    #[arg(long, value_name = "FILE")]
    batch: Option<PathBuf>,

    /// Interpret single altitude as miles (default: km)
    #[arg(long)]
    miles: bool,
    /// Output JSON instead of text
    #[arg(long)]
    json: bool,
    /// Write batch results to .csv / .json / .jsonl
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,
    /// Skip self-checks
    #[arg(long)]
    no_checks: bool,

    /// Run the HTTP server
    #[arg(long)]
    serve: bool,
    #[arg(long, env = "ATMO_HOST", default_value = "0.0.0.0")]
    host: IpAddr,
    #[arg(long, env = "ATMO_PORT", default_value_t = 8000)]
    port: u16,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    if !args.no_checks {
        if let Err(e) = run_self_checks() {
            eprintln!("Error: {e}");
            return ExitCode::from(2);
        }
        tracing::debug!("self-checks passed");
    }

    if args.serve {
        return report_outcome(serve(&args).await, "Error");
    }

    if let Some(path) = &args.batch {
        return report_outcome(run_batch(path, &args), "Batch error");
    }

    let Some(altitude) = args.altitude else {
        // Printing help only fails on a closed stdout.
        let _ = Args::command().print_help();
        return ExitCode::from(1);
    };
    report_outcome(run_single(altitude, &args), "Error")
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,atmo_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn report_outcome(outcome: Result<()>, prefix: &str) -> ExitCode {
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{prefix}: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run_single(altitude: f64, args: &Args) -> Result<()> {
    let unit = if args.miles { "mi" } else { "km" };
    let report = describe(altitude, unit)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}

fn run_batch(path: &Path, args: &Args) -> Result<()> {
    let reports = classify_batch(path)?;
    if let Some(out) = &args.out {
        atmo_batch::write_results(out, &reports)?;
    } else if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for r in &reports {
            println!("{r}");
        }
    }
    Ok(())
}

fn classify_batch(path: &Path) -> Result<Vec<Report>> {
    let items = atmo_batch::read_batch_csv(path)?;
    tracing::debug!("classifying {} rows from {}", items.len(), path.display());
    Ok(items
        .into_iter()
        .map(|item| describe_in(item.altitude, item.unit))
        .collect())
}

#[cfg(feature = "serve")]
async fn serve(args: &Args) -> Result<()> {
    let addr = std::net::SocketAddr::new(args.host, args.port);
    tracing::info!("Starting server on {}", addr);
    atmo_server::serve(addr).await?;
    Ok(())
}

#[cfg(not(feature = "serve"))]
async fn serve(_args: &Args) -> Result<()> {
    anyhow::bail!(
        "atmo compiled without 'serve' feature. Rebuild with: cargo run -p atmo --features serve -- --serve"
    )
}

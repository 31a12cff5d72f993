//! gauge-push: send one gauge sample to the collector.
//!
//! Reads the exporter section of a YAML config, builds a single-entry bag
//! from the command line, and pushes it once.
//!
//! `RUST_LOG=debug gauge-push -c exporter.yaml -m jobs.queued -v 12 -l queue=mail`

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use gauge_exporter_client::{config, ExportClient, ReqwestClient};
use gauge_exporter_core::error::{Error, Result};
use gauge_exporter_core::metric::MetricBag;

#[derive(Debug, Parser)]
#[command(name = "gauge-push", about = "Push one gauge sample to a gauge exporter collector")]
struct Args {
    /// Path to the client config (YAML).
    #[arg(short, long, default_value = "gauge-exporter.yaml")]
    config: String,

    /// Metric name, e.g. `jobs.queued`.
    #[arg(short, long)]
    metric: String,

    /// Gauge value.
    #[arg(short, long, allow_negative_numbers = true)]
    value: f64,

    /// Label as `name=value`; repeatable.
    #[arg(short, long = "label", value_parser = parse_label)]
    labels: Vec<(String, String)>,

    /// Override `exporter.ttl_sec`.
    #[arg(long)]
    ttl: Option<u64>,
}

fn parse_label(s: &str) -> std::result::Result<(String, String), String> {
    let (k, v) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid label: {s} (expected name=value)"))?;
    Ok((k.to_string(), v.to_string()))
}

fn run(args: Args) -> Result<()> {
    let cfg = config::load_from_file(&args.config)?;

    let http = ReqwestClient::new(cfg.exporter.timeout())?;
    let client = ExportClient::from_config(http, &cfg)?;

    let mut bag = MetricBag::new(args.metric)?;
    bag.set(args.labels, args.value)?;

    let ttl = args.ttl.unwrap_or(cfg.exporter.ttl_sec);
    client.send(&bag, ttl)?;

    info!(metric = bag.metric_name(), url = %client.endpoint(bag.metric_name()), ttl, "gauge pushed");
    Ok(())
}

fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        if let Error::BadResponse(resp) = &e {
            let body = String::from_utf8_lossy(resp.body());
            error!(kind = e.kind().as_str(), status = %resp.status(), %body, "gauge push failed");
        } else {
            error!(kind = e.kind().as_str(), error = %e, "gauge push failed");
        }
        std::process::exit(1);
    }
}

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use planar::ReplayToken;
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod checks;
mod provenance;

use checks::{run_checks, CheckCfg};
use provenance::Payload;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Numerical self-checks and sampling runs for planar")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Run the seeded statistical checks and print a JSON report
    Check {
        #[arg(long, default_value_t = 10_000)]
        trials: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Per-trial error tolerance
        #[arg(long, default_value_t = planar::cfg::EQ_EPS)]
        eps: f64,
        /// Also write the report (plus provenance) to this path
        #[arg(long)]
        out: Option<String>,
    },
    /// Write reproducible random unit vectors as JSON
    Sample {
        #[arg(long, default_value_t = 1_000)]
        count: u64,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Serialize)]
struct SamplePoint {
    index: u64,
    x: f64,
    y: f64,
    angle: f64,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Check {
            trials,
            seed,
            eps,
            out,
        } => check(CheckCfg { trials, seed, eps }, out, cmd.tag),
        Action::Sample { count, seed, out } => sample(count, seed, out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn check(cfg: CheckCfg, out: Option<String>, tag: Option<String>) -> Result<()> {
    tracing::info!(trials = cfg.trials, seed = cfg.seed, tag = ?tag, "check");
    if cfg.trials == 0 {
        bail!("--trials must be positive");
    }
    let report = run_checks(cfg);
    println!("{}", serde_json::to_string_pretty(&report)?);

    if let Some(out) = out {
        write_json(&out, &report)?;
        let params = serde_json::json!({
            "trials": cfg.trials,
            "seed": cfg.seed,
            "eps": cfg.eps
        });
        provenance::write_sidecar(&out, Payload::new(params, tag))?;
    }

    if !report.passed() {
        let failed = report.failed_names();
        tracing::error!(?failed, "checks_failed");
        bail!("{} of {} checks failed: {}", failed.len(), report.checks.len(), failed.join(", "));
    }
    Ok(())
}

fn sample(count: u64, seed: u64, out: String, tag: Option<String>) -> Result<()> {
    tracing::info!(count, seed, out, tag = ?tag, "sample");
    let points: Vec<SamplePoint> = (0..count)
        .map(|index| {
            let v = ReplayToken::new(seed, index).unit();
            SamplePoint {
                index,
                x: v.x,
                y: v.y,
                angle: v.angle(),
            }
        })
        .collect();
    write_json(&out, &points)?;
    let params = serde_json::json!({ "count": count, "seed": seed });
    provenance::write_sidecar(&out, Payload::new(params, tag))?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = provenance::block(tag.as_deref());
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn write_json<T: Serialize>(out: &str, value: &T) -> Result<()> {
    let path = Path::new(out);
    provenance::ensure_parent(path)?;
    std::fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

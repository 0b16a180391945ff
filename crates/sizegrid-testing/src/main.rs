use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use log::info;

use sizegrid::params::SizeSet;
use sizegrid::report::{write_report, RunReport};
use sizegrid::runner::CaseReport;

use crate::churn::ConstructionChurn;
use crate::identity::IdentityRoundTrip;
use crate::independence::InstanceIndependence;
use crate::traits::Suite;

mod churn;
mod identity;
mod independence;
mod traits;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Run the identity round-trip suite
    #[arg(long, default_value_t = false)]
    identity: bool,

    /// Run the instance independence suite
    #[arg(long, default_value_t = false)]
    independence: bool,

    /// Run the construction churn suite
    #[arg(long, default_value_t = false)]
    churn: bool,

    /// Comma-separated size table; sampled sizes are appended to these
    #[arg(long, value_delimiter = ',', default_values_t = vec![0usize, 1, 64, 4096])]
    sizes: Vec<usize>,

    /// How many extra sizes to sample
    #[arg(long, default_value_t = 16)]
    n_samples: usize,

    /// Upper bound for sampled sizes
    #[arg(long, default_value_t = 1 << 20)]
    max_size: usize,

    /// RNG seed for the sampled sizes
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// Where to write the JSON run report, if anywhere
    #[arg(long)]
    report: Option<PathBuf>,
}

fn build_size_table(args: &Args) -> SizeSet {
    let mut sizes = args.sizes.clone();
    sizes.extend(SizeSet::sample(args.n_samples, args.max_size, args.seed).iter());
    SizeSet::values(sizes)
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let args = Args::parse();

    // No explicit selection means run everything.
    let run_all = !(args.identity || args.independence || args.churn);

    let mut suites: Vec<Box<dyn Suite>> = Vec::new();
    if run_all || args.identity {
        suites.push(Box::new(IdentityRoundTrip::new()));
    }
    if run_all || args.independence {
        suites.push(Box::new(InstanceIndependence::new()));
    }
    if run_all || args.churn {
        suites.push(Box::new(ConstructionChurn::new()));
    }

    let sizes = build_size_table(&args);
    info!("Running {} suites over {} sizes", suites.len(), sizes.len());

    let mut reports: Vec<CaseReport> = Vec::new();
    for suite in &suites {
        reports.push(suite.run(&sizes)?);
    }

    if let Some(path) = &args.report {
        let run_report = RunReport::new(Some(args.seed), &reports);
        write_report(path, &run_report)?;
        info!("Wrote run report to {}", path.display());
    }

    let failed: Vec<String> = reports
        .iter()
        .filter(|r| !r.passed())
        .map(|r| r.name.clone())
        .collect();
    if !failed.is_empty() {
        bail!("suites failed: [{}]", failed.join(", "));
    }

    info!("All suites passed");
    Ok(())
}

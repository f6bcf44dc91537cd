use anyhow::Result;
use io500_csv::convert;
use std::{env, path::Path, process};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(filter).init();

    // ─── 2) resolve the input report ─────────────────────────────────
    let Some(input) = env::args().nth(1) else {
        println!("Usage: io500-csv <input_file_path>");
        process::exit(1);
    };
    info!(input = %input, "converting IO500 report");

    // ─── 3) extract + write the three CSVs ───────────────────────────
    let paths = convert(Path::new(&input))?;

    info!("created CSV files:");
    info!("{}", paths.results.display());
    info!("{}", paths.score.display());
    info!("{}", paths.total.display());
    Ok(())
}

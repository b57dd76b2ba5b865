use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tsp_planner::report::{render_matrix, render_result};
use tsp_planner::{plan, DistanceMatrix, SolveOptions};

#[derive(Parser)]
#[command(name = "tsp-planner")]
#[command(about = "Exact shortest round trip over a cost matrix", long_about = None)]
struct Cli {
    /// Matrix file, comma-separated rows one per line (stdin when omitted or "-")
    input: Option<PathBuf>,
    /// Refuse instances with more cities than this
    #[arg(long, default_value_t = 20)]
    max_cities: usize,
    /// Log a warning before solving instances with more cities than this
    #[arg(long, default_value_t = 14)]
    warn_threshold: usize,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
    /// Echo the parsed matrix before the result
    #[arg(long)]
    show_matrix: bool,
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text).context("reading stdin")?;
            Ok(text)
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let text = read_input(cli.input.as_ref())?;
    let matrix = DistanceMatrix::parse(&text).context("invalid matrix")?;
    let n = matrix.len();

    let options = SolveOptions {
        max_cities: cli.max_cities,
        warn_threshold: cli.warn_threshold,
    };
    let result = plan(&matrix, &options)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if cli.show_matrix {
        println!("{}", render_matrix(&matrix));
    }
    print!("{}", render_result(&result, n));

    Ok(())
}

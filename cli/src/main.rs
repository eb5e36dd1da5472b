//! Bank teller staffing simulation.
//!
//! Runs the simulation once per teller count over the same arrival list and
//! prints the busiest teller's busy time for each count.

use std::fs;
use std::path::{Path, PathBuf};

use bank_simulator_core_rs::{BankSim, SimConfig, SimulationInput};
use clap::Parser;
use eyre::WrapErr;

/// Compares bank teller staffing levels by discrete-event simulation.
#[derive(Parser)]
#[command(version, author)]
struct Opt {
    /// JSON array of `{"arrival_time", "transaction_time"}` objects.
    /// Uses the built-in four-customer workload if omitted.
    #[arg(long)]
    input: Option<PathBuf>,

    /// JSON file with `min_tellers` / `max_tellers` bounds.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Teller count to evaluate; repeat for several. Defaults to every count
    /// the configuration accepts.
    #[arg(short, long = "tellers")]
    tellers: Vec<usize>,

    /// Print the full staffing report as JSON.
    #[arg(long)]
    json: bool,

    /// Verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Store the logs in this file.
    #[arg(long)]
    log_output: Option<PathBuf>,

    /// Do not log to the stderr.
    #[arg(long)]
    no_stderr: bool,
}

fn read_input(path: &Path) -> eyre::Result<SimulationInput> {
    let json = fs::read_to_string(path)
        .wrap_err_with(|| format!("unable to read input file: {}", path.display()))?;
    SimulationInput::from_json(&json)
        .wrap_err_with(|| format!("unable to parse input file: {}", path.display()))
}

fn read_config(path: &Path) -> eyre::Result<SimConfig> {
    let json = fs::read_to_string(path)
        .wrap_err_with(|| format!("unable to read config file: {}", path.display()))?;
    serde_json::from_str(&json)
        .wrap_err_with(|| format!("unable to parse config file: {}", path.display()))
}

/// Set up a logger based on the given user options.
fn set_up_logger(opt: &Opt) -> Result<(), fern::InitError> {
    let log_level = match opt.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| out.finish(format_args!("[{}] {}", record.level(), message)))
        .level(log_level);
    let dispatch = if let Some(path) = &opt.log_output {
        let _ = fs::remove_file(path);
        dispatch.chain(
            fs::OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path)?,
        )
    } else {
        dispatch
    };
    let dispatch = if opt.no_stderr {
        dispatch
    } else {
        dispatch.chain(std::io::stderr())
    };
    dispatch.apply()?;
    Ok(())
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let opt = Opt::parse();
    set_up_logger(&opt)?;

    let input = match &opt.input {
        Some(path) => read_input(path)?,
        None => SimulationInput::sample(),
    };
    let config = match &opt.config {
        Some(path) => read_config(path)?,
        None => SimConfig::default(),
    };
    let digest = input.digest().wrap_err("failed to hash input")?;
    log::info!("Loaded {} arrivals (digest {})", input.len(), digest);

    let sim = BankSim::with_config(input, config).wrap_err("invalid simulator configuration")?;
    let teller_counts: Vec<usize> = if opt.tellers.is_empty() {
        sim.config().teller_counts().collect()
    } else {
        opt.tellers.clone()
    };

    let report = sim
        .evaluate_staffing(teller_counts)
        .wrap_err("simulation failed")?;

    if opt.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report);
        if let Some(count) = report.recommended() {
            log::info!("Fewest tellers reaching the lowest busy time: {}", count);
        }
    }
    Ok(())
}

//! E20 simulator CLI.
//!
//! This binary runs one E20 program image to completion. It performs:
//! 1. **Argument handling:** One positional image path and `-h/--help`; anything else prints usage.
//! 2. **Loading:** Reads the image; format and sequencing errors abort before execution.
//! 3. **Execution:** Runs until the program jumps to itself.
//! 4. **Reporting:** Prints the final PC, registers, and the first 128 memory words to stdout.
//!
//! Every failure prints a message on stderr and exits with status 1.
//! Diagnostics go through `tracing`; set `RUST_LOG=e20sim_core=trace` to
//! log every executed instruction.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use e20sim_core::sim::report;
use e20sim_core::{Config, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "e20sim",
    about = "Simulates the execution of E20 machine code.",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Show this help message and exit.
    #[arg(short, long)]
    help: bool,

    /// Program image (`ram[N] = 16'b...;` lines).
    file: Option<PathBuf>,
}

/// Prints the usage text to stderr.
fn usage() {
    let prog = std::env::args()
        .next()
        .unwrap_or_else(|| "e20sim".to_string());
    eprintln!("Usage: {prog} [-h] <machine_code_file.bin>");
    eprintln!("Simulates the execution of E20 machine code.");
    eprintln!("Options:");
    eprintln!("  -h, --help  Show this help message and exit.");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    init_tracing();

    let path = match Cli::try_parse() {
        Ok(Cli {
            help: false,
            file: Some(path),
        }) => path,
        _ => {
            usage();
            return ExitCode::FAILURE;
        }
    };

    let Ok(file) = File::open(&path) else {
        eprintln!("Error: Cannot open file {}", path.display());
        return ExitCode::FAILURE;
    };

    let mut config = Config::default();
    config.general.trace_instructions = tracing::enabled!(target: "e20sim_core", Level::TRACE);

    let mut sim = match Simulator::from_reader(BufReader::new(file), config) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = sim.run() {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    tracing::info!("\n{}", sim.cpu.stats.summary());

    let cpu = &sim.cpu;
    if let Err(e) = report::print_state(
        &mut io::stdout().lock(),
        cpu.pc,
        &cpu.regs,
        &cpu.mem,
        sim.config.report.display_words,
    ) {
        eprintln!("Error: cannot write report: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

//! Register-machine interpreter CLI.
//!
//! This binary is the host around the engine: it supplies the raw program
//! text (read from a file) and renders the published state after the run. It
//! performs:
//! 1. **Run:** Execute a program file and print registers, flag, and the trace.
//! 2. **JSON output:** Serialize the final snapshot for tooling.

use clap::{Parser, Subcommand};
use std::{fs, process};

use regsim_core::config::Config;
use regsim_core::{Machine, Snapshot, Status};

#[derive(Parser, Debug)]
#[command(
    name = "regsim",
    author,
    version,
    about = "Educational eight-register machine interpreter",
    long_about = "Run a line-oriented assembly program against eight 8-bit registers (AX-HX) \
and the ZX comparison flag, printing a line-numbered execution trace.\n\nExamples:\n  \
regsim run -f demos/countdown.reg\n  regsim run -f demos/clamp.reg --json"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a single program file to completion (or to its first error).
    Run {
        /// Program file to execute, one instruction per line.
        #[arg(short, long)]
        file: String,

        /// Print the final snapshot as JSON instead of the plain report.
        #[arg(long)]
        json: bool,

        /// Override the 10,000-command execution budget.
        #[arg(long)]
        command_budget: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            file,
            json,
            command_budget,
        }) => cmd_run(&file, json, command_budget),
        None => {
            eprintln!("regsim — pass a subcommand");
            eprintln!();
            eprintln!("  regsim run -f <program>        Run a program file");
            eprintln!("  regsim run -f <program> --json Machine-readable snapshot");
            eprintln!();
            eprintln!("  regsim --help  for full options");
            process::exit(1);
        }
    }
}

/// Runs one program file and prints the final machine state.
///
/// The engine never returns an error: a bad program shows up as a
/// `HaltedError` status and an explanatory trace entry, and the process exit
/// code reflects it so scripts can tell the outcomes apart.
fn cmd_run(path: &str, json: bool, command_budget: Option<u64>) {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading program {path}: {e}");
        process::exit(1);
    });

    let mut config = Config::default();
    if let Some(budget) = command_budget {
        config.command_budget = budget;
    }

    let mut machine = Machine::with_config(config);
    let snapshot = machine.run(&source);

    if json {
        match serde_json::to_string_pretty(&snapshot) {
            Ok(rendered) => println!("{rendered}"),
            Err(e) => {
                eprintln!("Error serializing snapshot: {e}");
                process::exit(1);
            }
        }
    } else {
        print_report(&snapshot);
    }

    if matches!(snapshot.status, Status::HaltedError(_)) {
        process::exit(1);
    }
}

/// Prints registers in pairs, the flag, and the full transcript.
fn print_report(snapshot: &Snapshot) {
    let regs: Vec<(String, u8)> = snapshot
        .iter()
        .map(|(reg, value)| (reg.to_string(), value))
        .collect();
    for pair in regs.chunks(2) {
        match pair {
            [(a, av), (b, bv)] => println!("{a}={av:<3} {b}={bv:<3}"),
            [(a, av)] => println!("{a}={av:<3}"),
            _ => {}
        }
    }
    println!("ZX={}", snapshot.zx);
    println!();
    println!("{}", snapshot.transcript);
}

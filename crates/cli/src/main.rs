//! Intcode virtual machine CLI.
//!
//! This binary provides a single entry point for driving programs. It performs:
//! 1. **Run:** Load a program file, queue initial inputs, and run to halt,
//!    bridging further input requests to stdin (numeric or ASCII console).
//! 2. **Disassembly:** Print a listing of a program file with one rendered
//!    instruction per line.
//! 3. **Reporting:** Optional per-instruction trace events and end-of-run
//!    statistics as JSON.

use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::{io, process};

use intcode_core::isa::disasm::disassemble;
use intcode_core::{Machine, RunState, Tape, loader};

#[derive(Parser, Debug)]
#[command(
    name = "intcode",
    author,
    version,
    about = "Intcode virtual machine runner",
    long_about = "Run or disassemble an Intcode program file (comma/whitespace-separated signed decimal integers).\n\nExamples:\n  intcode run puzzle.txt -i 1\n  intcode run droid.txt --ascii\n  intcode disasm puzzle.txt"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program to halt, bridging pauses for input to stdin.
    Run {
        /// Program file to execute.
        file: String,

        /// Value queued on the input channel before the run (repeatable).
        #[arg(short = 'i', long = "input")]
        inputs: Vec<i64>,

        /// Converse in ASCII: render byte-range outputs as text, feed stdin
        /// lines back as newline-terminated bytes.
        #[arg(long)]
        ascii: bool,

        /// Abort once this many instructions have executed without halting.
        #[arg(long)]
        max_steps: Option<u64>,

        /// Print execution statistics as JSON on exit.
        #[arg(long)]
        stats: bool,

        /// Emit per-instruction trace events to stderr.
        #[arg(long)]
        trace: bool,
    },

    /// Print a disassembly listing of a program file.
    Disasm {
        /// Program file to list.
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            file,
            inputs,
            ascii,
            max_steps,
            stats,
            trace,
        }) => cmd_run(&file, &inputs, ascii, max_steps, stats, trace),
        Some(Commands::Disasm { file }) => cmd_disasm(&file),
        None => {
            eprintln!("Intcode machine — pass a subcommand");
            eprintln!();
            eprintln!("  intcode run <program> [-i N]...   Run to halt, stdin on pause");
            eprintln!("  intcode run <program> --ascii     ASCII console mode");
            eprintln!("  intcode disasm <program>          Listing");
            eprintln!();
            eprintln!("  intcode --help  for full options");
            process::exit(1);
        }
    }
}

/// Loads a program listing from disk, exiting the process on failure.
fn load_program(path: &str) -> Vec<i64> {
    loader::read_program(path).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: {e}");
        if let Some(source) = std::error::Error::source(&e) {
            eprintln!("    caused by: {source}");
        }
        process::exit(1);
    })
}

/// Runs the machine: queues `inputs`, then alternates between running until
/// blocked, draining outputs, and reading one stdin line per pause.
fn cmd_run(
    file: &str,
    inputs: &[i64],
    ascii: bool,
    max_steps: Option<u64>,
    stats: bool,
    trace: bool,
) {
    if trace {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("intcode=trace"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }

    let program = load_program(file);
    let mut machine = Machine::new(&program);
    for &value in inputs {
        machine.send_input(value);
    }

    let mut steps_used = 0u64;
    loop {
        let state = run_bounded(&mut machine, max_steps, &mut steps_used);
        drain_outputs(&mut machine, ascii);

        match state {
            RunState::Halted => break,
            RunState::AwaitingInput => feed_stdin_line(&mut machine, ascii),
            RunState::Running => unreachable!("run loop only stops on halt or pause"),
        }
    }

    if stats {
        match serde_json::to_string_pretty(machine.stats()) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("[!] could not serialize stats: {e}"),
        }
    }
}

/// Steps the machine until it halts or pauses, enforcing the step budget.
fn run_bounded(machine: &mut Machine, budget: Option<u64>, used: &mut u64) -> RunState {
    loop {
        if let Some(limit) = budget {
            if *used >= limit {
                eprintln!("[!] FATAL: step budget of {limit} exhausted before halt");
                process::exit(2);
            }
        }
        *used += 1;

        match machine.step() {
            Ok(RunState::Running) => {}
            Ok(blocked) => return blocked,
            Err(fault) => {
                eprintln!("[!] FATAL: {fault}");
                process::exit(1);
            }
        }
    }
}

/// Prints everything waiting in the output channel.
///
/// In ASCII mode, byte-range values render as text and anything wider prints
/// as a number on its own line (the later programs mix a final wide value
/// into an otherwise ASCII conversation).
fn drain_outputs(machine: &mut Machine, ascii: bool) {
    let mut stdout = io::stdout().lock();
    while let Some(value) = machine.try_get_output() {
        let result = if ascii && (0..=127).contains(&value) {
            write!(stdout, "{}", value as u8 as char)
        } else {
            writeln!(stdout, "{value}")
        };
        if result.is_err() {
            process::exit(1);
        }
    }
    let _ = stdout.flush();
}

/// Reads one line from stdin and queues it as machine input.
///
/// ASCII mode sends each byte of the line followed by a newline; numeric
/// mode parses the line as a single signed integer. EOF is fatal: the
/// program asked for input nobody can provide.
fn feed_stdin_line(machine: &mut Machine, ascii: bool) {
    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: could not read stdin: {e}");
        process::exit(1);
    });
    if read == 0 {
        eprintln!("[!] FATAL: program wants input but stdin is closed");
        process::exit(1);
    }

    let line = line.trim_end_matches(['\n', '\r']);
    if ascii {
        for byte in line.bytes() {
            machine.send_input(i64::from(byte));
        }
        machine.send_input(i64::from(b'\n'));
    } else {
        let value: i64 = line.trim().parse().unwrap_or_else(|_| {
            eprintln!("[!] FATAL: expected a signed integer on stdin, got {line:?}");
            process::exit(1);
        });
        machine.send_input(value);
    }
}

/// Prints a listing of the program: one instruction (or data cell) per line.
fn cmd_disasm(file: &str) {
    let program = load_program(file);
    let tape = Tape::new(&program);

    let mut ip = 0;
    while ip < tape.len() {
        let (text, len) = disassemble(&tape, ip);
        println!("{ip:>6}: {text}");
        ip += len;
    }
}

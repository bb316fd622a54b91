//! Collision-report classifier CLI.
//!
//! Reads a detectcoll-style collision report from a file or standard input
//! and writes one classification line per reported block.
//!
//! # Output Format
//!
//! For each fully parsed record, one line on stdout:
//! `block: <n>, collision: <family>` when the signature pair matches a
//! known attack family, or `Nothing found: "<ihv sig>" "<dm sig>"` with the
//! raw signatures otherwise.
//!
//! A stats line is written to stderr upon completion:
//! `lines=N records=N matched=N unmatched=N elapsed_ms=N`
//!
//! # Exit Codes
//!
//! - `0`: Success (regardless of match results)
//! - `1`: Malformed report or I/O failure
//! - `2`: Invalid arguments

use collsig_rs::classify_stream;
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

fn print_usage(exe: &std::ffi::OsStr) {
    eprintln!(
        "usage: {} [OPTIONS] [report-file]

Classifies the collisions in a detectcoll report read from <report-file>,
or from standard input when no file is given.

OPTIONS:
    --help, -h              Show this help message",
        exe.to_string_lossy()
    );
}

fn main() -> ExitCode {
    let mut args = env::args_os();
    let exe = args.next().unwrap_or_else(|| "collsig-rs".into());
    let mut path: Option<PathBuf> = None;

    for arg in args {
        if let Some(flag) = arg.to_str() {
            match flag {
                "--help" | "-h" => {
                    print_usage(&exe);
                    return ExitCode::SUCCESS;
                }
                _ if flag.starts_with("--") => {
                    eprintln!("unknown flag: {}", flag);
                    print_usage(&exe);
                    return ExitCode::from(2);
                }
                _ => {}
            }
        }

        if path.is_some() {
            print_usage(&exe);
            return ExitCode::from(2);
        }
        path = Some(PathBuf::from(arg));
    }

    let start = Instant::now();
    let stdout = io::stdout();
    let result = match &path {
        Some(path) => match File::open(path) {
            Ok(file) => classify_stream(BufReader::new(file), stdout.lock()),
            Err(err) => {
                eprintln!("error: cannot open {}: {}", path.display(), err);
                return ExitCode::from(1);
            }
        },
        None => {
            let stdin = io::stdin();
            classify_stream(stdin.lock(), stdout.lock())
        }
    };

    let stats = match result {
        Ok(stats) => stats,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(1);
        }
    };

    eprintln!(
        "lines={} records={} matched={} unmatched={} elapsed_ms={}",
        stats.lines_read,
        stats.records,
        stats.matched,
        stats.unmatched,
        start.elapsed().as_millis()
    );

    ExitCode::SUCCESS
}

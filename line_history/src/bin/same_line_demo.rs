// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Asks for your name, and greets you on the same row that you typed it on:
//!
//! ```text
//! Hello, Nadia, how do you do?
//! next line
//! ```
//!
//! Then it prints every line that was recorded. Run it with `--no-strip-newline` to see
//! what happens without the caret being moved back up.

use clap::Parser;
use r3bl_line_history::{DisplayPreference, InputOptions, Line, PrintOptions,
                        TracingConfig, global_override, lock_or_poisoned,
                        recorded_println, try_initialize_logging_global};
use tracing_core::LevelFilter;

#[derive(Debug, Parser)]
#[command(bin_name = "same_line_demo")]
#[command(about = "Continue printing on the same row as the user's typed input")]
#[command(version)]
#[command(next_line_help = true)]
/// More info: <https://docs.rs/clap/latest/clap/_derive/#overview>
pub struct CLIArg {
    #[arg(
        long,
        help = "Leave the caret on the row below the typed name, like a plain read does"
    )]
    pub no_strip_newline: bool,

    #[arg(
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging"
    )]
    pub enable_logging: bool,

    #[arg(
        long,
        value_name = "PATH",
        requires = "enable_logging",
        help = "Log to this file instead of `log.txt`"
    )]
    pub log_file: Option<String>,

    #[arg(
        long,
        requires = "enable_logging",
        conflicts_with = "log_file",
        help = "Log to stderr instead of a file (redirect it, eg: `2>log.txt`)"
    )]
    pub log_to_stderr: bool,
}

fn main() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();

    if cli_arg.enable_logging {
        let tracing_config = if cli_arg.log_to_stderr {
            TracingConfig::new_display(DisplayPreference::Stderr, LevelFilter::TRACE)
        } else {
            TracingConfig::new_file(cli_arg.log_file.clone(), LevelFilter::TRACE)
        };
        try_initialize_logging_global(tracing_config)?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let lines = run_greeting(&cli_arg)?;

    println!("--- recorded lines ---");
    for (index, line) in lines.iter().enumerate() {
        println!("{index}: {line:?}", line = line.as_str());
    }

    if cli_arg.enable_logging {
        tracing::debug!(message = "Stop logging...");
    }

    Ok(())
}

/// Runs the greeting with a recorder installed, and returns what it recorded. The
/// recorder is uninstalled when this returns.
fn run_greeting(cli_arg: &CLIArg) -> miette::Result<Vec<Line>> {
    let guard = global_override::install()?;

    let input_options = InputOptions {
        strip_newline: !cli_arg.no_strip_newline,
        ..Default::default()
    };

    global_override::print(
        &[&"Hello, "],
        PrintOptions {
            flush: true,
            ..PrintOptions::no_terminator()
        },
    )?;
    let name = global_override::input("", input_options)?;
    global_override::print(&[&", how do you do?"], PrintOptions::default())?;
    recorded_println!("next line")?;

    tracing::debug!(message = "Greeted", name = %name);

    let recorder = lock_or_poisoned!(guard.recorder(), "active recorder")?;
    Ok(recorder.lines().to_vec())
}

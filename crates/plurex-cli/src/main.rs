//! plurex CLI entry point.
//!
//! Provides command-line tools for working with plural expressions:
//! - `plurex eval` - Evaluate an expression for some counts
//! - `plurex check` - Validate expressions and print their canonical form
//! - `plurex table` - Tabulate an expression over a range of counts
//! - `plurex langs` - List the built-in per-language rules

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_check, run_eval, run_langs, run_table, CheckArgs, EvalArgs, LangsArgs, TableArgs,
};
use tracing::Level;

/// Plural-Forms expression tools.
#[derive(Debug, Parser)]
#[command(name = "plurex")]
#[command(about = "Plural-Forms expression tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Log cache and compile activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Evaluate an expression for one or more counts
    Eval(EvalArgs),
    /// Check expressions and print their canonical form
    Check(CheckArgs),
    /// Print the plural index for a range of counts
    Table(TableArgs),
    /// List the built-in rules for common languages
    Langs(LangsArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

fn setup_logging(verbose: bool) {
    if verbose {
        tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_writer(stderr)
            .with_target(false)
            .init();
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(1)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Eval(args) => run_eval(args),
        Commands::Check(args) => run_check(args),
        Commands::Table(args) => run_table(args),
        Commands::Langs(args) => run_langs(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}

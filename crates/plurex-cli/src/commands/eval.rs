//! Implementation of the `plurex eval` command.

use owo_colors::{OwoColorize, Stream};
use plurex::{Error, PluralEvaluator};
use tracing::debug;

use super::{compile_source, print_rows_json};
use crate::output::table::IndexRow;

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    /// Plural expression (e.g., "n % 10 == 1 ? 0 : 1")
    pub expression: String,

    /// Counts to evaluate
    #[arg(required = true, allow_negative_numbers = true)]
    pub counts: Vec<i64>,

    /// Reject indices outside 0..NPLURALS
    #[arg(long, value_parser = parse_nplurals)]
    pub nplurals: Option<usize>,

    /// Evaluate built-in rules through the general parser too
    #[arg(long)]
    pub no_commons: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_nplurals(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("nplurals must be at least 1".to_string()),
        Ok(count) => Ok(count),
        Err(e) => Err(format!("invalid nplurals '{}': {}", s, e)),
    }
}

/// Fail with [`Error::IndexOutOfRange`] if `index` is not a valid form.
fn check_range(index: i64, nplurals: Option<usize>) -> Result<i64, Error> {
    match nplurals {
        Some(nplurals) if usize::try_from(index).map_or(true, |i| i >= nplurals) => {
            Err(Error::IndexOutOfRange { index, nplurals })
        }
        _ => Ok(index),
    }
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs) -> miette::Result<i32> {
    // Syntax errors are reported against the text as typed
    compile_source(&args.expression)?;

    let evaluator = PluralEvaluator::builder()
        .use_commons(!args.no_commons)
        .build();
    let rows: Vec<IndexRow> = args
        .counts
        .iter()
        .map(|&n| {
            let index = evaluator
                .eval(&args.expression, n)
                .and_then(|index| check_range(index, args.nplurals));
            debug!(n, ?index, "evaluated");
            IndexRow {
                n,
                index: index.map_err(|e| e.to_string()),
            }
        })
        .collect();

    if args.json {
        print_rows_json(&rows)?;
    } else {
        for row in &rows {
            match &row.index {
                Ok(index) => println!(
                    "n={} -> {}",
                    row.n,
                    index.if_supports_color(Stream::Stdout, |t| t.green())
                ),
                Err(message) => println!(
                    "n={} -> {}",
                    row.n,
                    message.if_supports_color(Stream::Stdout, |t| t.red())
                ),
            }
        }
    }

    if rows.iter().any(|row| row.index.is_err()) {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

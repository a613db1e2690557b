//! Implementation of the `plurex table` command.

use clap::Args;
use miette::{miette, Result};

use super::{compile_source, print_rows_json};
use crate::output::table::{format_index_table, IndexRow};

/// Largest number of counts one table may list.
const MAX_ROWS: u64 = 10_000;

/// Arguments for the table command.
#[derive(Debug, Args)]
pub struct TableArgs {
    /// Plural expression (e.g., "n != 1")
    pub expression: String,

    /// First count (inclusive).
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub from: i64,

    /// Last count (inclusive).
    #[arg(long, default_value_t = 30, allow_negative_numbers = true)]
    pub to: i64,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Run the table command.
pub fn run_table(args: TableArgs) -> Result<i32> {
    if args.from > args.to {
        return Err(miette!(
            "empty range: --from {} is greater than --to {}",
            args.from,
            args.to
        ));
    }
    if args.to.abs_diff(args.from) >= MAX_ROWS {
        return Err(miette!("range is limited to {} counts", MAX_ROWS));
    }

    let plural = compile_source(&args.expression)?;
    let rows: Vec<IndexRow> = (args.from..=args.to)
        .map(|n| IndexRow {
            n,
            index: plural.eval(n).map_err(|e| e.to_string()),
        })
        .collect();

    if args.json {
        print_rows_json(&rows)?;
    } else {
        println!("{}", plural);
        println!("{}", format_index_table(&rows));
    }

    if rows.iter().any(|row| row.index.is_err()) {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

//! CLI command implementations.

mod check;
mod eval;
mod langs;
mod table;

use miette::IntoDiagnostic;
use plurex::Plural;
use serde::Serialize;

use crate::output::table::IndexRow;
use crate::output::PluralDiagnostic;

pub use check::{run_check, CheckArgs};
pub use eval::{run_eval, EvalArgs};
pub use langs::{run_langs, LangsArgs};
pub use table::{run_table, TableArgs};

/// JSON output for one evaluated count.
#[derive(Debug, Serialize)]
struct IndexJson {
    n: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<&IndexRow> for IndexJson {
    fn from(row: &IndexRow) -> Self {
        IndexJson {
            n: row.n,
            index: row.index.as_ref().ok().copied(),
            error: row.index.as_ref().err().cloned(),
        }
    }
}

/// Compile the expression exactly as typed so error offsets line up with it.
fn compile_source(source: &str) -> Result<Plural, PluralDiagnostic> {
    plurex::compile(source)
        .map_err(|e| PluralDiagnostic::from_compile_error("expression", source, &e))
}

fn print_json<T: Serialize>(value: &T) -> miette::Result<()> {
    let json = serde_json::to_string_pretty(value).into_diagnostic()?;
    println!("{}", json);
    Ok(())
}

fn print_rows_json(rows: &[IndexRow]) -> miette::Result<()> {
    let json: Vec<IndexJson> = rows.iter().map(IndexJson::from).collect();
    print_json(&json)
}

//! Implementation of the `plurex check` command.

use miette::Report;
use owo_colors::{OwoColorize, Stream};
use plurex::commons;
use plurex::interpreter::normalize;
use serde::Serialize;

use super::{compile_source, print_json};

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Expressions to check
    #[arg(required = true)]
    pub expressions: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one checked expression.
#[derive(Debug, Serialize)]
struct CheckJson {
    source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    canonical: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    languages: Vec<&'static str>,
    /// The expression never reads `n`.
    constant: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let mut results = Vec::new();
    let mut failed = false;

    for source in args.expressions {
        let languages = commons::lookup(&normalize(&source))
            .map(|rule| rule.languages.to_vec())
            .unwrap_or_default();

        match compile_source(&source) {
            Ok(plural) => {
                let canonical = plural.to_string();
                let constant = !plural.expression().uses_variable();
                if !args.json {
                    let mut notes = Vec::new();
                    if !languages.is_empty() {
                        notes.push(languages.join(", "));
                    }
                    if constant {
                        notes.push("constant".to_string());
                    }
                    print!(
                        "{} {}",
                        "ok".if_supports_color(Stream::Stdout, |t| t.green()),
                        canonical
                    );
                    if notes.is_empty() {
                        println!();
                    } else {
                        let note = format!("({})", notes.join("; "));
                        println!(" {}", note.if_supports_color(Stream::Stdout, |t| t.dimmed()));
                    }
                }
                results.push(CheckJson {
                    source,
                    canonical: Some(canonical),
                    languages,
                    constant,
                    error: None,
                });
            }
            Err(diagnostic) => {
                failed = true;
                let message = diagnostic.to_string();
                if !args.json {
                    eprintln!("{:?}", Report::new(diagnostic));
                }
                results.push(CheckJson {
                    source,
                    canonical: None,
                    languages,
                    constant: false,
                    error: Some(message),
                });
            }
        }
    }

    if args.json {
        print_json(&results)?;
    }

    if failed {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

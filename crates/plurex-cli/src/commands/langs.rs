//! Implementation of the `plurex langs` command.

use clap::Args;
use miette::{miette, Result};
use plurex::commons::{self, CommonRule, COMMON_RULES};
use plurex::{HeaderError, PluralForms};
use serde::Serialize;

use super::print_json;
use crate::output::table::format_rules_table;

/// Arguments for the langs command.
#[derive(Debug, Args)]
pub struct LangsArgs {
    /// Print the Plural-Forms header for one language (e.g., pt_BR, de-AT).
    pub language: Option<String>,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for a built-in rule.
#[derive(Debug, Serialize)]
struct RuleJson {
    languages: &'static [&'static str],
    nplurals: usize,
    plural: &'static str,
}

impl From<&CommonRule> for RuleJson {
    fn from(rule: &CommonRule) -> Self {
        RuleJson {
            languages: rule.languages,
            nplurals: rule.nplurals,
            plural: rule.source,
        }
    }
}

/// Run the langs command.
pub fn run_langs(args: LangsArgs) -> Result<i32> {
    let Some(language) = args.language else {
        if args.json {
            let json: Vec<RuleJson> = COMMON_RULES.iter().map(RuleJson::from).collect();
            print_json(&json)?;
        } else {
            let rules: Vec<&CommonRule> = COMMON_RULES.iter().collect();
            println!("{}", format_rules_table(&rules));
        }
        return Ok(exitcode::OK);
    };

    let Some(rule) = commons::for_language(&language) else {
        eprintln!("{}", HeaderError::UnknownLanguage { language });
        return Ok(exitcode::DATAERR);
    };

    if args.json {
        print_json(&RuleJson::from(rule))?;
    } else {
        let forms = PluralForms::for_language(&language).map_err(|e| miette!("{}", e))?;
        println!("Plural-Forms: {}", forms);
    }
    Ok(exitcode::OK)
}

//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use plurex::commons::CommonRule;

/// One evaluated count.
pub struct IndexRow {
    /// The count passed as `n`.
    pub n: i64,
    /// The selected index, or the evaluation error message.
    pub index: Result<i64, String>,
}

/// Format evaluated counts as an ASCII table.
pub fn format_index_table(rows: &[IndexRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["n", "Index"]);

    for row in rows {
        let index = match &row.index {
            Ok(index) => index.to_string(),
            Err(message) => format!("error: {message}"),
        };
        table.add_row(vec![row.n.to_string(), index]);
    }

    table
}

/// Format common rules as an ASCII table.
pub fn format_rules_table(rules: &[&CommonRule]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Languages", "Forms", "Rule"]);

    for rule in rules {
        table.add_row(vec![
            rule.languages.join(", "),
            rule.nplurals.to_string(),
            rule.source.to_string(),
        ]);
    }

    table
}

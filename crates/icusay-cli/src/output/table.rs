//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use serde::Serialize;

/// Check results for a single translation file.
#[derive(Serialize)]
pub struct FileSummary {
    /// Path as given on the command line.
    pub file: String,
    /// Number of messages in the file.
    pub messages: usize,
    /// Number of placeholders across all messages.
    pub placeholders: usize,
    /// Number of placeholders that failed to compile.
    pub errors: usize,
}

/// Format check results as an ASCII table.
pub fn format_summary_table(summaries: &[FileSummary]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["File", "Messages", "Placeholders", "Errors"]);

    for summary in summaries {
        table.add_row(vec![
            summary.file.clone(),
            summary.messages.to_string(),
            summary.placeholders.to_string(),
            summary.errors.to_string(),
        ]);
    }

    table
}

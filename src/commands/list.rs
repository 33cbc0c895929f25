use anyhow::Result;
use diary_core::{Entry, NoteStore};
use owo_colors::OwoColorize;

use crate::render::EntryListRender;

pub fn run(store: &NoteStore, expand: bool, limit: Option<usize>) -> Result<()> {
    let entries = store.entries()?;

    if entries.is_empty() {
        println!("{}", "No entries yet".dimmed());
        return Ok(());
    }

    for line in render_lines(&entries, expand, limit) {
        println!("{}", line);
    }

    Ok(())
}

/// The printed lines for `entries`, newest first, cut at `limit`.
fn render_lines(entries: &[Entry], expand: bool, limit: Option<usize>) -> Vec<String> {
    let shown = limit.unwrap_or(entries.len()).min(entries.len());
    let mut lines = Vec::new();

    for (i, entry) in entries.iter().take(shown).enumerate() {
        if expand {
            lines.push(entry.render_expanded());

            // Spacing between entries (but not after the last one)
            if i < shown - 1 {
                lines.push(String::new());
            }
        } else {
            lines.push(entry.render_row());
        }
    }

    if shown < entries.len() {
        let hidden = entries.len() - shown;
        lines.push(
            format!(
                "  ... and {} older {}",
                hidden,
                if hidden == 1 { "entry" } else { "entries" }
            )
            .dimmed()
            .to_string(),
        );
    }

    lines
}

use std::io::Write;
use std::process::Command;

use anyhow::{Context, Result, bail};
use tracing::debug;

const FALLBACK_EDITOR: &str = "vi";

/// The user's editor command: $VISUAL, then $EDITOR, then vi.
fn editor_command() -> String {
    ["VISUAL", "EDITOR"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|cmd| !cmd.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_EDITOR.to_string())
}

/// Open `initial` in the user's editor and return the edited text.
pub fn edit(initial: &str) -> Result<String> {
    let mut file = tempfile::Builder::new()
        .prefix("diary-")
        .suffix(".txt")
        .tempfile()
        .context("Failed to create a scratch file for the editor")?;
    file.write_all(initial.as_bytes())?;
    file.flush()?;

    let command = editor_command();
    let mut parts = command.split_whitespace();
    let program = parts.next().unwrap_or(FALLBACK_EDITOR);
    debug!(%program, file = %file.path().display(), "launching editor");

    let status = Command::new(program)
        .args(parts)
        .arg(file.path())
        .status()
        .with_context(|| format!("Failed to launch editor '{}'", program))?;

    if !status.success() {
        bail!("Editor '{}' exited with {}", program, status);
    }

    let edited = std::fs::read_to_string(file.path()).context("Failed to read the edited entry")?;
    debug!(bytes = edited.len(), "editor closed");
    Ok(edited)
}

use anyhow::{Result, anyhow};

/// Copy text to clipboard, warning on failure if `fail_hard` is false.
pub fn copy_to_clipboard(
    text: &str,
    fail_hard: bool,
) -> Result<()> {
    if let Err(e) = cli_clipboard::set_contents(text.to_owned()) {
        if fail_hard {
            return Err(anyhow!("Clipboard copy failed: {e}"));
        }
        tracing::warn!("WARNING: Clipboard copy failed: {e}");
    }
    Ok(())
}

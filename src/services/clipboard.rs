use anyhow::{Result, anyhow};
use dioxus::document;

/// Build the script that hands `text` to the webview clipboard. The payload
/// is JSON-encoded so quotes and newlines survive the trip into JS.
pub fn clipboard_write_script(text: &str) -> String {
    let payload = serde_json::Value::String(text.to_string());
    format!("return navigator.clipboard.writeText({payload});")
}

/// Write plain text to the host clipboard through the webview. The
/// environment may reject the write (no clipboard permission, headless
/// webview); callers surface that through the activity log.
pub async fn copy_text(text: &str) -> Result<()> {
    document::eval(&clipboard_write_script(text))
        .await
        .map_err(|err| anyhow!("clipboard write rejected: {err:?}"))?;
    Ok(())
}

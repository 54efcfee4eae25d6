//! Browser Dialogs

/// Blocking `window.prompt`. `None` when cancelled or no window is available.
pub fn prompt_text(message: &str) -> Option<String> {
    let window = web_sys::window()?;
    match window.prompt_with_message(message) {
        Ok(answer) => answer,
        Err(err) => {
            tracing::warn!(?err, "prompt failed");
            None
        }
    }
}

use crate::error::Result;

/// Put `text` on the system clipboard.
#[cfg(feature = "clipboard")]
pub fn copy_text(text: &str) -> Result<()> {
    use clipboard_rs::{Clipboard, ClipboardContext};

    use crate::error::BillingError;

    let ctx = ClipboardContext::new().map_err(|e| BillingError::Clipboard(e.to_string()))?;
    ctx.set_text(text.to_string())
        .map_err(|e| BillingError::Clipboard(e.to_string()))?;
    tracing::debug!(chars = text.chars().count(), "copied to clipboard");
    Ok(())
}

/// Without clipboard support the text is printed so it can be piped
/// into a clipboard tool.
#[cfg(not(feature = "clipboard"))]
pub fn copy_text(text: &str) -> Result<()> {
    println!("{text}");
    Ok(())
}

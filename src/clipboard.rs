use arboard::Clipboard;

/// Best-effort copy: extraction output on stdout is still useful when no
/// clipboard is available (headless sessions, SSH), so failures are silent.
pub fn copy(text: &str) {
    if let Ok(mut clipboard) = Clipboard::new() {
        let _ = clipboard.set_text(text.to_owned());
    }
}

/// What a global key press asks the shell to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Return to the overview and leave fullscreen.
    CloseFocus,
    ToggleFullscreen,
    ToggleHint,
    ToggleContact,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "Escape" => Some(KeyAction::CloseFocus),
        "Enter" => Some(KeyAction::ToggleFullscreen),
        "h" | "H" => Some(KeyAction::ToggleHint),
        "c" | "C" => Some(KeyAction::ToggleContact),
        _ => None,
    }
}

/// Keys typed into form fields belong to the field, not the scene.
#[inline]
pub fn is_text_entry_tag(tag_name: &str) -> bool {
    matches!(
        tag_name.to_ascii_uppercase().as_str(),
        "INPUT" | "TEXTAREA" | "SELECT"
    )
}

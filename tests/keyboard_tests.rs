// Host-side tests for pure keyboard functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod keymap {
    include!("../src/events/keymap.rs");
}

use keymap::*;

#[test]
fn key_action_maps_shell_keys() {
    assert_eq!(key_action("Escape"), Some(KeyAction::CloseFocus));
    assert_eq!(key_action("Enter"), Some(KeyAction::ToggleFullscreen));
    assert_eq!(key_action("h"), Some(KeyAction::ToggleHint));
    assert_eq!(key_action("H"), Some(KeyAction::ToggleHint));
    assert_eq!(key_action("c"), Some(KeyAction::ToggleContact));
    assert_eq!(key_action("C"), Some(KeyAction::ToggleContact));
}

#[test]
fn key_action_ignores_everything_else() {
    for key in ["a", "x", " ", "Tab", "ArrowUp", "Shift", "1", "esc", ""] {
        assert_eq!(key_action(key), None, "key {key:?}");
    }
}

#[test]
fn text_entry_tags_swallow_keys() {
    assert!(is_text_entry_tag("INPUT"));
    assert!(is_text_entry_tag("TEXTAREA"));
    assert!(is_text_entry_tag("textarea"));
    assert!(is_text_entry_tag("SELECT"));
    assert!(!is_text_entry_tag("CANVAS"));
    assert!(!is_text_entry_tag("BUTTON"));
    assert!(!is_text_entry_tag("DIV"));
}

//! Integration tests for TapText
//!
//! Tests are organized by component:
//! - view_test: Composition, tap contract, style table rebuild, cue dispatch
//! - ui_test: Rendering through TestBackend, mouse and keyboard taps
//! - audio_test: Cue decoding and asset resolution
//! - cli_test: Flags, config loading and merging

// Note: Each test file is a separate integration test crate
// Tests are run individually by cargo, not via mod.rs

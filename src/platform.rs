//! Platform-specific key hints

/// Submit shortcut display. Ctrl+S on every platform; terminals do not
/// forward Cmd.
pub const SAVE_SHORTCUT: &str = "Ctrl+S";

/// Shortcut hints for the editor's structural commands
pub const ADD_QUESTION_SHORTCUT: &str = "^N";
pub const REMOVE_QUESTION_SHORTCUT: &str = "^D";
pub const ADD_OPTION_SHORTCUT: &str = "^O";
pub const REMOVE_OPTION_SHORTCUT: &str = "^R";

use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::debug;
use tsp_types::{Bookmark, ExitStatus, OutputKind, TspResult};

// Builtin command modules
mod clear;
pub mod export;
mod help;
mod import;
mod neofetch;

#[cfg(test)]
pub(crate) mod mock;

/// Trait that provides an interface for builtin commands to interact with the startpage
/// This allows builtin commands to touch bookmarks and output without direct coupling
pub trait StartpageProxy {
    /// Appends a line to the output pane
    fn show(&mut self, text: &str, kind: OutputKind);

    /// Empties the output pane
    fn clear_output(&mut self);

    /// Current bookmark set in store order
    fn bookmarks(&self) -> &[Bookmark];

    /// Parses a bookmark HTML export and replaces the whole bookmark set with it.
    /// On error the existing set is left untouched.
    fn import_bookmarks(&mut self, html: &str) -> TspResult<usize>;

    /// Human readable location of the persisted bookmarks
    fn storage_location(&self) -> String;
}

/// Type alias for builtin command function signature
/// All builtin commands must conform to this signature
pub type BuiltinCommand = fn(argv: Vec<String>, proxy: &mut dyn StartpageProxy) -> ExitStatus;

/// Global registry of all builtin commands
pub static BUILTIN_COMMAND: Lazy<HashMap<&'static str, BuiltinCommand>> = Lazy::new(|| {
    let mut builtin = HashMap::new();

    builtin.insert("help", help::command as BuiltinCommand);
    builtin.insert("clear", clear::command as BuiltinCommand);

    // Bookmark file exchange
    builtin.insert("import", import::command as BuiltinCommand);
    builtin.insert("export", export::command as BuiltinCommand);

    // System information and its aliases
    builtin.insert("neofetch", neofetch::command as BuiltinCommand);
    builtin.insert("fastfetch", neofetch::command as BuiltinCommand);
    builtin.insert("ff", neofetch::command as BuiltinCommand);

    builtin
});

/// Retrieves a builtin command function by name
/// Returns None if the command is not found
pub fn get_command(name: &str) -> Option<BuiltinCommand> {
    let command = BUILTIN_COMMAND.get(name).copied();
    if command.is_none() {
        debug!("no builtin named {}", name);
    }
    command
}

/// Whether `name` is a reserved builtin keyword. Matching is exact; callers lowercase first.
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_COMMAND.contains_key(name)
}

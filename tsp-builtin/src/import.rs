use super::StartpageProxy;
use std::path::Path;
use tracing::{debug, warn};
use tsp_types::{ExitStatus, OutputKind, TspError};

/// Built-in import command implementation
///
/// Usage:
///   import <file>   - Replace all bookmarks with the anchors of a browser bookmark export
pub fn command(argv: Vec<String>, proxy: &mut dyn StartpageProxy) -> ExitStatus {
    if argv.len() < 2 {
        proxy.show(
            "Usage: import <file>. Select your bookmark HTML file exported from the browser.",
            OutputKind::Info,
        );
        return ExitStatus::failure();
    }

    // Paths may contain spaces; the interpreter splits on every single space.
    let path = argv[1..].join(" ");
    import_file(Path::new(path.trim()), proxy)
}

pub fn import_file(path: &Path, proxy: &mut dyn StartpageProxy) -> ExitStatus {
    debug!("importing bookmarks from {}", path.display());

    let html = match std::fs::read_to_string(path) {
        Ok(html) => html,
        Err(err) => {
            warn!("failed to read {}: {}", path.display(), err);
            proxy.show(
                &format!("Error: Failed to read file: {}", path.display()),
                OutputKind::Error,
            );
            return ExitStatus::failure();
        }
    };

    match proxy.import_bookmarks(&html) {
        Ok(count) => {
            proxy.show(
                &format!("Successfully imported {count} bookmarks"),
                OutputKind::Success,
            );
            ExitStatus::success()
        }
        Err(TspError::InvalidBookmarkFile) => {
            proxy.show("Error: Invalid bookmark file format", OutputKind::Error);
            ExitStatus::failure()
        }
        Err(err) => {
            proxy.show(&format!("Error: {err}"), OutputKind::Error);
            ExitStatus::failure()
        }
    }
}

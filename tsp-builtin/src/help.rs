use super::StartpageProxy;
use tsp_types::{ExitStatus, OutputKind};

const HELP_TEXT: &str = r#"Available commands:
  <bookmark_name> - Open bookmark by typing its name directly
  <url>           - Open URL directly (e.g., netflix.com, https://google.com)
  import <file>   - Import bookmarks from HTML file
  export [file]   - Export bookmarks to HTML file
  neofetch        - Show system information (aliases: fastfetch, ff)
  help            - Show this help message
  clear           - Clear terminal output

Search commands:
  b <query>       - Search Brave for query
  g <query>       - Search Google for query
  y <query>       - Search YouTube for query
  r <query>       - Search Reddit for query

Keyboard shortcuts:
  Ctrl+C          - Clear input (press twice to quit)
  Tab             - Autocomplete bookmark names
  ↑/↓             - Navigate command history
  Escape          - Clear autocomplete

Note: Use Tab for autocomplete and cycling through bookmark options"#;

/// Built-in help command implementation
pub fn command(_argv: Vec<String>, proxy: &mut dyn StartpageProxy) -> ExitStatus {
    proxy.show(HELP_TEXT, OutputKind::Info);
    ExitStatus::success()
}

use std::io::{self, Stdout, Write};
use tracing::{debug, warn};

/// Hands a URL to something that can show it. Fire-and-forget: failures are
/// logged and never reach the prompt.
pub trait UrlOpener {
    fn open(&mut self, url: &str);
}

/// Opens URLs in the system browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserOpener;

impl UrlOpener for BrowserOpener {
    fn open(&mut self, url: &str) {
        debug!("opening {} in browser", url);
        if let Err(err) = webbrowser::open(url) {
            warn!("failed to open {}: {}", url, err);
        }
    }
}

/// Writes URLs instead of opening them (dry runs, headless sessions).
pub struct PrintOpener<W: Write> {
    out: W,
}

impl PrintOpener<Stdout> {
    pub fn stdout() -> Self {
        PrintOpener::new(io::stdout())
    }
}

impl<W: Write> PrintOpener<W> {
    pub fn new(out: W) -> Self {
        PrintOpener { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> UrlOpener for PrintOpener<W> {
    fn open(&mut self, url: &str) {
        if let Err(err) = write!(self.out, "{}\r\n", url).and_then(|_| self.out.flush()) {
            warn!("failed to print {}: {}", url, err);
        }
    }
}

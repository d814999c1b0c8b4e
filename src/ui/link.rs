use std::io;

/// Opens a slide's external link in a new context.
pub trait LinkOpener: Send {
    fn open(&self, url: &str) -> io::Result<()>;
}

/// The platform's default browser.
#[derive(Debug, Default)]
pub struct SystemBrowser;

impl LinkOpener for SystemBrowser {
    fn open(&self, url: &str) -> io::Result<()> {
        open::that_detached(url)
    }
}

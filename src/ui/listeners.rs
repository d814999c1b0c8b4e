//! Scoped registration of the pager's input listeners.
//!
//! Keyboard events always reach the app once raw mode is on; pointer and
//! wheel events only arrive while mouse capture is enabled. Capture is held by
//! [`InputListeners`], which attaches at most once and always detaches when
//! dropped, however the pager is torn down.

use std::io::{self, Write};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::ExecutableCommand;

/// Something that can start and stop delivering pointer events.
pub trait ListenerHost {
    fn attach(&mut self) -> io::Result<()>;
    fn detach(&mut self) -> io::Result<()>;
}

/// Crossterm mouse capture on stdout.
#[derive(Debug, Default)]
pub struct MouseCaptureHost;

impl ListenerHost for MouseCaptureHost {
    fn attach(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.execute(EnableMouseCapture)?;
        stdout.flush()
    }

    fn detach(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.execute(DisableMouseCapture)?;
        stdout.flush()
    }
}

/// Idempotent attach/detach guard around a [`ListenerHost`].
pub struct InputListeners<H: ListenerHost> {
    host: H,
    attached: bool,
}

impl<H: ListenerHost> InputListeners<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            attached: false,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Attaches unless already attached.
    pub fn attach(&mut self) -> io::Result<()> {
        if self.attached {
            return Ok(());
        }
        self.host.attach()?;
        self.attached = true;
        tracing::debug!("Input listeners attached");
        Ok(())
    }

    /// Detaches unless already detached.
    pub fn detach(&mut self) -> io::Result<()> {
        if !self.attached {
            return Ok(());
        }
        self.attached = false;
        self.host.detach()?;
        tracing::debug!("Input listeners detached");
        Ok(())
    }
}

impl<H: ListenerHost> Drop for InputListeners<H> {
    fn drop(&mut self) {
        if let Err(err) = self.detach() {
            tracing::warn!(error = %err, "Failed to detach input listeners");
        }
    }
}

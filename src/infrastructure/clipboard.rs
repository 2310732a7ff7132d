use anyhow::{anyhow, Context, Result};
use std::sync::{mpsc, Mutex};
use std::thread::JoinHandle;

#[cfg_attr(test, mockall::automock)]
pub trait Clipboard: Send + Sync {
    fn copy_text(&self, text: &str) -> Result<()>;
}

/// An open connection to the system clipboard.
pub trait ClipboardHandle {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

impl ClipboardHandle for arboard::Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        arboard::Clipboard::set_text(self, text.to_string()).context("Failed to write clipboard")
    }
}

fn open_arboard() -> Result<arboard::Clipboard> {
    arboard::Clipboard::new().context("Clipboard unavailable")
}

type CopyRequest = (String, mpsc::Sender<Result<()>>);

/// System clipboard served by one long-lived thread.
///
/// On X11 and Wayland the copying process serves the selection, so the
/// contents vanish once its handle drops. The worker keeps the handle open
/// until this value drops, when arboard hands the contents to the clipboard
/// manager.
pub struct SystemClipboard {
    requests: Mutex<Option<mpsc::Sender<CopyRequest>>>,
    worker: Option<JoinHandle<()>>,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        Self::with_opener(open_arboard)
    }

    pub fn with_opener<H: ClipboardHandle + 'static>(open: fn() -> Result<H>) -> Result<Self> {
        let (tx, rx) = mpsc::channel::<CopyRequest>();
        let worker = std::thread::Builder::new()
            .name("clipboard".to_string())
            .spawn(move || {
                let mut handle = None;
                // Ends when the last sender drops
                for (text, reply) in rx {
                    let _ = reply.send(write(&mut handle, open, &text));
                }
            })
            .context("Failed to start clipboard thread")?;

        Ok(Self {
            requests: Mutex::new(Some(tx)),
            worker: Some(worker),
        })
    }
}

impl Drop for SystemClipboard {
    fn drop(&mut self) {
        if let Ok(mut requests) = self.requests.lock() {
            requests.take();
        }
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn write<H: ClipboardHandle>(
    slot: &mut Option<H>,
    open: fn() -> Result<H>,
    text: &str,
) -> Result<()> {
    if slot.is_none() {
        *slot = Some(open()?);
    }
    let handle = slot
        .as_mut()
        .ok_or_else(|| anyhow!("Clipboard unavailable"))?;
    if let Err(e) = handle.set_text(text) {
        // Reconnect on the next copy
        *slot = None;
        return Err(e);
    }
    tracing::debug!("Copied {} chars to clipboard", text.len());
    Ok(())
}

impl Clipboard for SystemClipboard {
    /// Blocks until the clipboard thread has written `text`.
    fn copy_text(&self, text: &str) -> Result<()> {
        let (reply_tx, reply_rx) = mpsc::channel();
        self.requests
            .lock()
            .map_err(|_| anyhow!("Clipboard lock poisoned"))?
            .as_ref()
            .ok_or_else(|| anyhow!("Clipboard closed"))?
            .send((text.to_string(), reply_tx))
            .map_err(|_| anyhow!("Clipboard thread stopped"))?;
        reply_rx
            .recv()
            .map_err(|_| anyhow!("Clipboard thread stopped"))?
    }
}

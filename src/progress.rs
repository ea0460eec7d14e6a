//! Progress dialog sessions and their update channel
//!
//! A progress dialog stays open while background work runs. The worker
//! holds a [`ProgressHandle`] and sends [`ProgressMsg`]s; the session
//! consumes them on its owning task only, so display state is never
//! touched from the producer's thread. Closing releases the channel
//! exactly once no matter which side initiated the teardown.

use crate::bus::ResultBus;
use crate::dialogs::{DialogConfig, ProgressConfig};
use crate::result::ButtonCode;
use crate::routing::Host;
use crate::session::DialogSession;
use crate::surface::{ProgressView, Surface};
use anyhow::Result;
use tokio::sync::mpsc;
use tracing::debug;

/// Depth of the update queue; producers outrunning the UI drop updates
/// rather than stalling the worker.
const UPDATE_QUEUE_DEPTH: usize = 64;

/// Out-of-band messages accepted by a visible progress dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMsg {
    /// Work units completed so far
    Update(i64),

    /// Dismiss the dialog without a decision
    Close,
}

/// Producer-side handle for feeding a progress session
///
/// Clones freely; send failures mean the session is already gone and are
/// reported as `false` rather than an error, since a finished dialog is a
/// normal way for a report to become irrelevant.
#[derive(Debug, Clone)]
pub struct ProgressHandle {
    tx: mpsc::Sender<ProgressMsg>,
}

impl ProgressHandle {
    pub async fn update(&self, progress: i64) -> bool {
        self.tx.send(ProgressMsg::Update(progress)).await.is_ok()
    }

    /// Non-blocking update; also returns `false` when the queue is full
    pub fn try_update(&self, progress: i64) -> bool {
        self.tx.try_send(ProgressMsg::Update(progress)).is_ok()
    }

    pub async fn close(&self) -> bool {
        self.tx.send(ProgressMsg::Close).await.is_ok()
    }

    pub fn try_close(&self) -> bool {
        self.tx.try_send(ProgressMsg::Close).is_ok()
    }
}

/// A running progress dialog
pub struct ProgressSession {
    session: DialogSession,
    rx: mpsc::Receiver<ProgressMsg>,
    quantity_max: i64,
    message: Option<String>,
    progress: i64,
    open: bool,
}

impl ProgressSession {
    /// Open from a screen host; the cancel decision goes to its listener
    pub fn open_via_screen(config: ProgressConfig, host: &dyn Host) -> (Self, ProgressHandle) {
        Self::with_session(
            config.clone(),
            DialogSession::show_via_screen(DialogConfig::Progress(config), host),
        )
    }

    /// Open with the cancel decision published on the result bus
    pub fn open_via_channel(config: ProgressConfig, bus: &ResultBus) -> (Self, ProgressHandle) {
        Self::with_session(
            config.clone(),
            DialogSession::show_via_channel(DialogConfig::Progress(config), bus),
        )
    }

    fn with_session(config: ProgressConfig, session: DialogSession) -> (Self, ProgressHandle) {
        let (tx, rx) = mpsc::channel(UPDATE_QUEUE_DEPTH);
        let session = Self {
            session,
            rx,
            quantity_max: config.quantity_max,
            message: config.message,
            progress: 0,
            open: true,
        };
        (session, ProgressHandle { tx })
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn progress(&self) -> i64 {
        self.progress
    }

    /// Completed percentage under determinate mode, 0 otherwise
    pub fn percent(&self) -> i64 {
        if self.quantity_max <= 0 {
            0
        } else {
            self.progress * 100 / self.quantity_max
        }
    }

    /// Draw the initial indicator, message and cancel button
    pub fn present(&mut self, surface: &mut dyn Surface) -> Result<()> {
        self.session.present(surface)
    }

    /// Drain every queued message without blocking
    ///
    /// Suits hosts with their own event loop; returns whether the session
    /// is still open afterwards.
    pub fn pump(&mut self, surface: &mut dyn Surface) -> Result<bool> {
        while let Ok(msg) = self.rx.try_recv() {
            self.apply(msg, surface)?;
        }
        Ok(self.open)
    }

    /// Consume messages until the session closes or every handle is gone
    ///
    /// When all handles drop without a `Close`, the dialog stays open; the
    /// user still owns the cancel button.
    pub async fn run(&mut self, surface: &mut dyn Surface) -> Result<()> {
        while self.open {
            match self.rx.recv().await {
                Some(msg) => self.apply(msg, surface)?,
                None => break,
            }
        }
        Ok(())
    }

    fn apply(&mut self, msg: ProgressMsg, surface: &mut dyn Surface) -> Result<()> {
        if !self.open {
            // Close already went through; late updates are dropped.
            return Ok(());
        }
        match msg {
            ProgressMsg::Update(progress) => {
                if self.quantity_max <= 0 {
                    // Indeterminate mode has no discrete progress to show.
                    return Ok(());
                }
                self.progress = progress;
                let view = ProgressView::Determinate {
                    progress,
                    quantity_max: self.quantity_max,
                    percent: self.percent(),
                };
                surface.render_progress(view, self.message.as_deref())
            }
            ProgressMsg::Close => self.close(surface),
        }
    }

    /// Cancel button press: deliver NEGATIVE, then tear down
    pub fn press_negative(&mut self, surface: &mut dyn Surface) -> Result<()> {
        if !self.open {
            return Ok(());
        }
        self.session.press_button(ButtonCode::Negative, surface)?;
        self.release();
        Ok(())
    }

    /// Dismiss without a decision; used for `Close` messages, programmatic
    /// shutdown and host-forced destruction. Safe to call twice.
    pub fn close(&mut self, surface: &mut dyn Surface) -> Result<()> {
        if !self.open {
            return Ok(());
        }
        self.session.cancel(surface)?;
        self.release();
        Ok(())
    }

    /// Release the update subscription exactly once
    fn release(&mut self) {
        if self.open {
            self.open = false;
            self.rx.close();
            debug!("progress channel released");
        }
    }
}

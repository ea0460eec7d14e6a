//! Request-key based result channel
//!
//! Callers that cannot (or do not want to) implement the listener
//! capability subscribe here instead: results are published under the
//! request key of the originating dialog and consumed from a plain mpsc
//! receiver on the caller's side.

use crate::result::DialogResult;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Pub/sub bus carrying [`DialogResult`]s keyed by request key
///
/// Cloning is cheap; all clones share one subscription table. A second
/// `subscribe` for the same key replaces the previous subscription, the
/// way re-registering a result listener does.
#[derive(Debug, Clone, Default)]
pub struct ResultBus {
    subscribers: Arc<Mutex<HashMap<String, mpsc::UnboundedSender<DialogResult>>>>,
}

impl ResultBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register interest in results for `request_key`
    pub fn subscribe(&self, request_key: impl Into<String>) -> mpsc::UnboundedReceiver<DialogResult> {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut subscribers = self.subscribers.lock().expect("result bus lock poisoned");
        subscribers.insert(request_key.into(), tx);
        rx
    }

    /// Drop the subscription for `request_key`, if any. Safe to call twice.
    pub fn unsubscribe(&self, request_key: &str) {
        let mut subscribers = self.subscribers.lock().expect("result bus lock poisoned");
        subscribers.remove(request_key);
    }

    /// Publish a result to whoever subscribed under its request key
    ///
    /// A result without a live subscriber is dropped; that mirrors a host
    /// that never registered a result listener and is not an error here.
    pub fn publish(&self, result: DialogResult) {
        let subscribers = self.subscribers.lock().expect("result bus lock poisoned");
        match subscribers.get(&result.request_key) {
            Some(tx) => {
                debug!(request_key = %result.request_key, code = result.result_code, "publishing dialog result");
                if tx.send(result).is_err() {
                    debug!("subscriber receiver already dropped");
                }
            }
            None => {
                warn!(request_key = %result.request_key, "dialog result published with no subscriber");
            }
        }
    }
}

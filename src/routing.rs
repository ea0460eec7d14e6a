//! Result routing: listener capability, host resolution, delivery
//!
//! A dialog's decision goes to exactly one destination, fixed when the
//! session attaches: the host screen (or its logical parent) when it
//! implements [`DialogListener`], or the [`ResultBus`] when the dialog was
//! opened through the channel entry point. The resolved destination is
//! cached in a [`Route`] so no type inspection happens at decision time.

use crate::bus::ResultBus;
use crate::result::{DialogResult, Payload, KEY_RESULT};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Capability a host implements to receive dialog decisions directly
pub trait DialogListener: Send + Sync {
    /// Called once per decision with the originating request key, the
    /// button code (or 0 for pure-selection dialogs) and the payload bag.
    fn receive_result(&self, request_key: &str, result_code: i32, payload: &Payload);
}

/// The environment a dialog session attaches to
///
/// Hosts that want direct callbacks return a listener; hosts nested inside
/// a larger screen expose that screen through `parent` so resolution can
/// walk one level up.
pub trait Host {
    fn listener(&self) -> Option<Arc<dyn DialogListener>> {
        None
    }

    fn parent(&self) -> Option<&dyn Host> {
        None
    }
}

/// Resolve the listener for a host: the host itself first, then its parent
pub fn resolve_listener(host: &dyn Host) -> Option<Arc<dyn DialogListener>> {
    host.listener()
        .or_else(|| host.parent().and_then(|parent| parent.listener()))
}

/// Cached delivery destination for one session
#[derive(Clone, Default)]
pub enum Route {
    /// Publish on the result bus under the request key
    Channel(ResultBus),

    /// Invoke the resolved listener callback
    Listener(Arc<dyn DialogListener>),

    /// No destination; results are undeliverable on this route
    #[default]
    Unresolved,
}

impl Route {
    /// Deliver exactly one result through this route
    ///
    /// The channel route mirrors the result code into the payload so
    /// bus consumers see it without inspecting the envelope. Taking the
    /// listener path with nothing resolved is a wiring error on the
    /// caller's side and aborts rather than dropping the decision.
    pub fn deliver(&self, mut result: DialogResult) {
        match self {
            Route::Channel(bus) => {
                result
                    .payload
                    .insert(KEY_RESULT.to_string(), serde_json::json!(result.result_code));
                bus.publish(result);
            }
            Route::Listener(listener) => {
                debug!(request_key = %result.request_key, code = result.result_code, "delivering to listener");
                listener.receive_result(&result.request_key, result.result_code, &result.payload);
            }
            Route::Unresolved => {
                panic!(
                    "dialog result for '{}' has no destination: host does not implement DialogListener",
                    result.request_key
                );
            }
        }
    }

    pub fn is_channel(&self) -> bool {
        matches!(self, Route::Channel(_))
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Channel(_) => f.write_str("Route::Channel"),
            Route::Listener(_) => f.write_str("Route::Listener"),
            Route::Unresolved => f.write_str("Route::Unresolved"),
        }
    }
}

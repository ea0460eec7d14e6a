//! Dialog results and button codes
//!
//! A decision leaves a dialog as a single [`DialogResult`]: the request key
//! naming the logical request, a result code, and an open key-value payload.
//! Button-driven dialogs use the three canonical negative codes; the
//! one-shot item picker resolves with [`SELECTION_RESULT_CODE`] and carries
//! the chosen index in the payload instead.

use serde::{Deserialize, Serialize};

/// Payload key for the mirrored button code on the channel route
pub const KEY_RESULT: &str = "result";

/// Payload key for a chosen or currently-checked item index
pub const KEY_SELECTED_INDEX: &str = "selectedIndex";

/// Payload key for the ordered checked-state list of a multi-choice dialog
pub const KEY_CHECK_STATE_LIST: &str = "checkStateList";

/// Payload keys for the date picker decision
pub const KEY_YEAR: &str = "year";
pub const KEY_MONTH: &str = "month";
pub const KEY_DAY_OF_MONTH: &str = "dayOfMonth";

/// Payload keys for the time picker decision
pub const KEY_HOUR: &str = "hour";
pub const KEY_MINUTE: &str = "minute";

/// Result code used by pure-selection dialogs that have no confirm buttons
pub const SELECTION_RESULT_CODE: i32 = 0;

/// Open key-value bag attached to a result
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// The three-way outcome classifier for button-driven dialogs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonCode {
    Positive,
    Negative,
    Neutral,
}

impl ButtonCode {
    /// Wire value of the code (-1: positive, -2: negative, -3: neutral)
    pub const fn code(self) -> i32 {
        match self {
            ButtonCode::Positive => -1,
            ButtonCode::Negative => -2,
            ButtonCode::Neutral => -3,
        }
    }

    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(ButtonCode::Positive),
            -2 => Some(ButtonCode::Negative),
            -3 => Some(ButtonCode::Neutral),
            _ => None,
        }
    }
}

/// One user decision, packaged for delivery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogResult {
    /// Identifies which logical request this result answers
    pub request_key: String,

    /// Button code, or [`SELECTION_RESULT_CODE`] for pure-selection dialogs
    pub result_code: i32,

    /// Kind-specific decision data
    pub payload: Payload,
}

impl DialogResult {
    pub fn new(request_key: impl Into<String>, result_code: i32, payload: Payload) -> Self {
        Self {
            request_key: request_key.into(),
            result_code,
            payload,
        }
    }
}

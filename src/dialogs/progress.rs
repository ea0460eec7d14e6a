//! Progress dialog: long-lived session fed by an asynchronous channel

use super::{CommonConfig, DialogKind};
use crate::error::{is_blank, BuildError};
use serde::{Deserialize, Serialize};

/// Frozen progress dialog parameters
///
/// `quantity_max == 0` means the total workload is unknown and the surface
/// shows an indeterminate indicator. The negative button is the only way
/// for the user to leave, so its label is mandatory, and the dialog is
/// never dismissable by tapping outside regardless of other settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressConfig {
    pub common: CommonConfig,

    /// Optional message shown while waiting
    pub message: Option<String>,

    /// Total workload; 0 selects indeterminate mode
    pub quantity_max: i64,

    /// Label of the mandatory cancel button
    pub negative_label: String,
}

impl ProgressConfig {
    pub fn is_indeterminate(&self) -> bool {
        self.quantity_max <= 0
    }
}

/// Builder for [`ProgressConfig`]
#[derive(Debug, Clone)]
pub struct ProgressDialogBuilder {
    request_key: String,
    tag: Option<String>,
    message: String,
    quantity_max: i64,
    negative_label: String,
}

impl ProgressDialogBuilder {
    pub fn new() -> Self {
        Self {
            request_key: String::new(),
            tag: None,
            message: String::new(),
            quantity_max: 0,
            negative_label: String::new(),
        }
    }

    /// Message shown while the work runs; unlike the message dialog this
    /// is optional
    pub fn message(mut self, text: impl Into<String>) -> Self {
        self.message = text.into();
        self
    }

    /// Total number of work units; leave at 0 when unknown
    pub fn quantity_max(mut self, quantity: i64) -> Self {
        self.quantity_max = quantity;
        self
    }

    /// Label of the cancel button
    pub fn negative_label(mut self, label: impl Into<String>) -> Self {
        self.negative_label = label.into();
        self
    }

    pub fn request_key(mut self, key: impl Into<String>) -> Self {
        self.request_key = key.into();
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn build(self) -> Result<ProgressConfig, BuildError> {
        if is_blank(&self.request_key) {
            return Err(BuildError::RequestKeyMissing);
        }
        if self.quantity_max < 0 {
            return Err(BuildError::NegativeQuantity);
        }
        if is_blank(&self.negative_label) {
            return Err(BuildError::NegativeButtonMissing);
        }
        Ok(ProgressConfig {
            common: CommonConfig {
                request_key: self.request_key,
                tag: self
                    .tag
                    .unwrap_or_else(|| DialogKind::Progress.name().to_string()),
                // Only the cancel button closes a progress dialog.
                cancelable: false,
            },
            message: super::normalize_label(self.message),
            quantity_max: self.quantity_max,
            negative_label: self.negative_label,
        })
    }
}

impl Default for ProgressDialogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

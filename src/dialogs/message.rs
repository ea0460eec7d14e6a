//! Message dialog: title, body text, and up to three labeled buttons

use super::{normalize_label, CommonConfig, DialogKind};
use crate::error::{is_blank, BuildError};
use serde::{Deserialize, Serialize};

/// Frozen message dialog parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageConfig {
    pub common: CommonConfig,
    pub title: String,
    pub text: String,
    pub positive_label: Option<String>,
    pub negative_label: Option<String>,
    pub neutral_label: Option<String>,
}

/// Builder for [`MessageConfig`]
///
/// Title, text and request key are required, and at least one of the three
/// button labels must be non-blank so the user has a way to answer.
#[derive(Debug, Clone)]
pub struct MessageDialogBuilder {
    request_key: String,
    tag: Option<String>,
    cancelable: bool,
    title: String,
    text: String,
    positive_label: String,
    negative_label: String,
    neutral_label: String,
}

impl MessageDialogBuilder {
    pub fn new() -> Self {
        Self {
            request_key: String::new(),
            tag: None,
            cancelable: true,
            title: String::new(),
            text: String::new(),
            positive_label: String::new(),
            negative_label: String::new(),
            neutral_label: String::new(),
        }
    }

    /// Title shown above the body text
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Body text of the message
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Label for the affirmative button
    pub fn positive_label(mut self, label: impl Into<String>) -> Self {
        self.positive_label = label.into();
        self
    }

    /// Label for the dismissive button
    pub fn negative_label(mut self, label: impl Into<String>) -> Self {
        self.negative_label = label.into();
        self
    }

    /// Label for the deferring button
    pub fn neutral_label(mut self, label: impl Into<String>) -> Self {
        self.neutral_label = label.into();
        self
    }

    /// Key the result will be delivered under; blank is rejected at build
    pub fn request_key(mut self, key: impl Into<String>) -> Self {
        self.request_key = key.into();
        self
    }

    /// Display/lookup name for the session
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Whether tapping outside the dialog dismisses it
    pub fn cancelable(mut self, cancelable: bool) -> Self {
        self.cancelable = cancelable;
        self
    }

    pub fn build(self) -> Result<MessageConfig, BuildError> {
        if is_blank(&self.request_key) {
            return Err(BuildError::RequestKeyMissing);
        }
        if is_blank(&self.title) {
            return Err(BuildError::TitleMissing);
        }
        if is_blank(&self.text) {
            return Err(BuildError::TextMissing);
        }
        let positive_label = normalize_label(self.positive_label);
        let negative_label = normalize_label(self.negative_label);
        let neutral_label = normalize_label(self.neutral_label);
        if positive_label.is_none() && negative_label.is_none() && neutral_label.is_none() {
            return Err(BuildError::ButtonNotDefined);
        }
        Ok(MessageConfig {
            common: CommonConfig {
                request_key: self.request_key,
                tag: self
                    .tag
                    .unwrap_or_else(|| DialogKind::Message.name().to_string()),
                cancelable: self.cancelable,
            },
            title: self.title,
            text: self.text,
            positive_label,
            negative_label,
            neutral_label,
        })
    }
}

impl Default for MessageDialogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

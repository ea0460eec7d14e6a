//! Selectable option entities for the choice dialogs
//!
//! A [`SelectorItem`] is one row (or grid cell) of a selection dialog. The
//! core never touches pixels, so icons travel as opaque [`IconHandle`]
//! resource keys that the rendering surface resolves on its side. Items are
//! serialized verbatim when a session is saved for host recreation.

use crate::error::{is_blank, BuildError};
use serde::{Deserialize, Serialize};

/// Opaque handle to an image resource owned by the rendering environment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IconHandle(pub String);

impl IconHandle {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IconHandle {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

/// One selectable option
///
/// At least one of a non-blank `text` or an `icon` must be present; an item
/// with neither has nothing to render and is rejected at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectorItem {
    /// Label text, may be empty when an icon is supplied
    pub text: String,

    /// Optional icon resource key
    pub icon: Option<IconHandle>,

    /// Current checked state, mutated only by the selection engine
    pub checked: bool,

    /// Whether the item accepts activation at all
    pub selectable: bool,
}

impl SelectorItem {
    /// Create an item, enforcing the text-or-icon invariant
    pub fn new(
        text: impl Into<String>,
        icon: Option<IconHandle>,
        checked: bool,
        selectable: bool,
    ) -> Result<Self, BuildError> {
        let text = text.into();
        if is_blank(&text) && icon.is_none() {
            return Err(BuildError::SelectorItemInvalid);
        }
        Ok(Self {
            text,
            icon,
            checked,
            selectable,
        })
    }

    /// Plain unchecked, selectable text item
    pub fn text(text: impl Into<String>) -> Result<Self, BuildError> {
        Self::new(text, None, false, true)
    }

    /// Unchecked, selectable icon-only item
    pub fn icon(icon: IconHandle) -> Result<Self, BuildError> {
        Self::new("", Some(icon), false, true)
    }
}

//! Single-choice dialog: radio-button list with confirm buttons

use super::{normalize_label, CommonConfig, DialogKind};
use crate::error::{is_blank, BuildError};
use crate::item::SelectorItem;
use serde::{Deserialize, Serialize};

/// Frozen single-choice dialog parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleChoiceConfig {
    pub common: CommonConfig,
    pub title: String,
    pub columns: u16,
    pub items: Vec<SelectorItem>,
    pub positive_label: Option<String>,
    pub negative_label: Option<String>,
    pub neutral_label: Option<String>,
}

/// Builder for [`SingleChoiceConfig`]
#[derive(Debug, Clone)]
pub struct SingleChoiceDialogBuilder {
    request_key: String,
    tag: Option<String>,
    cancelable: bool,
    title: String,
    columns: u16,
    items: Option<Vec<SelectorItem>>,
    positive_label: String,
    negative_label: String,
    neutral_label: String,
}

impl SingleChoiceDialogBuilder {
    pub fn new() -> Self {
        Self {
            request_key: String::new(),
            tag: None,
            cancelable: true,
            title: String::new(),
            columns: 1,
            items: None,
            positive_label: String::new(),
            negative_label: String::new(),
            neutral_label: String::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Column count for the item grid; text items read best in one column
    pub fn column_num(mut self, columns: u16) -> Self {
        self.columns = columns;
        self
    }

    /// The selectable options; at most one may start checked
    pub fn selector_items(mut self, items: Vec<SelectorItem>) -> Self {
        self.items = Some(items);
        self
    }

    pub fn positive_label(mut self, label: impl Into<String>) -> Self {
        self.positive_label = label.into();
        self
    }

    pub fn negative_label(mut self, label: impl Into<String>) -> Self {
        self.negative_label = label.into();
        self
    }

    pub fn neutral_label(mut self, label: impl Into<String>) -> Self {
        self.neutral_label = label.into();
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

    pub fn cancelable(mut self, cancelable: bool) -> Self {
        self.cancelable = cancelable;
        self
    }

    pub fn build(self) -> Result<SingleChoiceConfig, BuildError> {
        if is_blank(&self.request_key) {
            return Err(BuildError::RequestKeyMissing);
        }
        if is_blank(&self.title) {
            return Err(BuildError::TitleMissing);
        }
        let items = match self.items {
            Some(items) if !items.is_empty() => items,
            _ => return Err(BuildError::SelectorItemsEmpty),
        };
        let positive_label = normalize_label(self.positive_label);
        let negative_label = normalize_label(self.negative_label);
        let neutral_label = normalize_label(self.neutral_label);
        if positive_label.is_none() && negative_label.is_none() && neutral_label.is_none() {
            return Err(BuildError::ButtonNotDefined);
        }
        Ok(SingleChoiceConfig {
            common: CommonConfig {
                request_key: self.request_key,
                tag: self
                    .tag
                    .unwrap_or_else(|| DialogKind::SingleChoice.name().to_string()),
                cancelable: self.cancelable,
            },
            title: self.title,
            columns: self.columns.max(1),
            items,
            positive_label,
            negative_label,
            neutral_label,
        })
    }
}

impl Default for SingleChoiceDialogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! One-shot item picker: choosing an item closes the dialog immediately

use super::{CommonConfig, DialogKind};
use crate::error::{is_blank, BuildError};
use crate::item::SelectorItem;
use serde::{Deserialize, Serialize};

/// Frozen item-select dialog parameters
///
/// There are no buttons; the first activation of a selectable item is the
/// decision and carries its index in the result payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSelectConfig {
    pub common: CommonConfig,
    pub title: String,
    pub columns: u16,
    pub items: Vec<SelectorItem>,
}

/// Builder for [`ItemSelectConfig`]
#[derive(Debug, Clone)]
pub struct ItemSelectDialogBuilder {
    request_key: String,
    tag: Option<String>,
    cancelable: bool,
    title: String,
    columns: u16,
    items: Option<Vec<SelectorItem>>,
}

impl ItemSelectDialogBuilder {
    pub fn new() -> Self {
        Self {
            request_key: String::new(),
            tag: None,
            cancelable: true,
            title: String::new(),
            columns: 1,
            items: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn column_num(mut self, columns: u16) -> Self {
        self.columns = columns;
        self
    }

    pub fn selector_items(mut self, items: Vec<SelectorItem>) -> Self {
        self.items = Some(items);
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

    pub fn build(self) -> Result<ItemSelectConfig, BuildError> {
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
        Ok(ItemSelectConfig {
            common: CommonConfig {
                request_key: self.request_key,
                tag: self
                    .tag
                    .unwrap_or_else(|| DialogKind::ItemSelect.name().to_string()),
                cancelable: self.cancelable,
            },
            title: self.title,
            columns: self.columns.max(1),
            items,
        })
    }
}

impl Default for ItemSelectDialogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_items() -> Vec<SelectorItem> {
        vec![
            SelectorItem::text("Camera").unwrap(),
            SelectorItem::text("Gallery").unwrap(),
        ]
    }

    #[test]
    fn test_input_correct() {
        let config = ItemSelectDialogBuilder::new()
            .title("TestDialogTitle")
            .selector_items(sample_items())
            .request_key("TestDialog")
            .build()
            .unwrap();
        assert_eq!(config.common.tag, "ItemSelectDialog");
        assert_eq!(config.columns, 1);
    }

    #[test]
    fn test_input_all_function() {
        let config = ItemSelectDialogBuilder::new()
            .title("TestDialogTitle")
            .column_num(3)
            .selector_items(sample_items())
            .request_key("TestDialog")
            .tag("TestTag")
            .cancelable(false)
            .build()
            .unwrap();
        assert_eq!(config.columns, 3);
        assert!(!config.common.cancelable);
    }

    #[test]
    fn test_missing_title() {
        let err = ItemSelectDialogBuilder::new()
            .selector_items(sample_items())
            .request_key("TestDialog")
            .build()
            .unwrap_err();
        assert_eq!(err, BuildError::TitleMissing);
    }

    #[test]
    fn test_missing_items() {
        let err = ItemSelectDialogBuilder::new()
            .title("TestDialogTitle")
            .request_key("TestDialog")
            .build()
            .unwrap_err();
        assert_eq!(err, BuildError::SelectorItemsEmpty);
    }

    #[test]
    fn test_missing_request_key() {
        let err = ItemSelectDialogBuilder::new()
            .title("TestDialogTitle")
            .selector_items(sample_items())
            .build()
            .unwrap_err();
        assert_eq!(err, BuildError::RequestKeyMissing);
    }
}

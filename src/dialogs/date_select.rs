//! Date picker dialog

use super::{CommonConfig, DialogKind};
use crate::error::{is_blank, BuildError};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Frozen date picker parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateSelectConfig {
    pub common: CommonConfig,

    /// Initially selected date
    pub date: NaiveDate,
}

/// Builder for [`DateSelectConfig`]
///
/// Only the request key is validated; the initial date defaults to today.
#[derive(Debug, Clone)]
pub struct DateSelectDialogBuilder {
    request_key: String,
    tag: Option<String>,
    cancelable: bool,
    date: Option<NaiveDate>,
}

impl DateSelectDialogBuilder {
    pub fn new() -> Self {
        Self {
            request_key: String::new(),
            tag: None,
            cancelable: true,
            date: None,
        }
    }

    /// Date shown when the picker opens
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
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

    pub fn build(self) -> Result<DateSelectConfig, BuildError> {
        if is_blank(&self.request_key) {
            return Err(BuildError::RequestKeyMissing);
        }
        Ok(DateSelectConfig {
            common: CommonConfig {
                request_key: self.request_key,
                tag: self
                    .tag
                    .unwrap_or_else(|| DialogKind::DateSelect.name().to_string()),
                cancelable: self.cancelable,
            },
            date: self.date.unwrap_or_else(|| Local::now().date_naive()),
        })
    }
}

impl Default for DateSelectDialogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

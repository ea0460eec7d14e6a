//! Time picker dialog

use super::{CommonConfig, DialogKind};
use crate::error::{is_blank, BuildError};
use chrono::{Local, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Frozen time picker parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSelectConfig {
    pub common: CommonConfig,

    /// Initially selected time
    pub time: NaiveTime,

    /// Whether the surface should lay the picker out in 24-hour notation
    pub display_24h: bool,
}

/// Builder for [`TimeSelectConfig`]
///
/// Only the request key is validated; the initial time defaults to now,
/// truncated to the minute the way the picker displays it.
#[derive(Debug, Clone)]
pub struct TimeSelectDialogBuilder {
    request_key: String,
    tag: Option<String>,
    cancelable: bool,
    time: Option<NaiveTime>,
    display_24h: bool,
}

impl TimeSelectDialogBuilder {
    pub fn new() -> Self {
        Self {
            request_key: String::new(),
            tag: None,
            cancelable: true,
            time: None,
            display_24h: true,
        }
    }

    /// Time shown when the picker opens
    pub fn time(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    /// 24-hour notation toggle; defaults to on
    pub fn display_24h(mut self, display_24h: bool) -> Self {
        self.display_24h = display_24h;
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

    pub fn build(self) -> Result<TimeSelectConfig, BuildError> {
        if is_blank(&self.request_key) {
            return Err(BuildError::RequestKeyMissing);
        }
        let time = self.time.unwrap_or_else(|| {
            let now = Local::now().time();
            NaiveTime::from_hms_opt(now.hour(), now.minute(), 0).unwrap_or(now)
        });
        Ok(TimeSelectConfig {
            common: CommonConfig {
                request_key: self.request_key,
                tag: self
                    .tag
                    .unwrap_or_else(|| DialogKind::TimeSelect.name().to_string()),
                cancelable: self.cancelable,
            },
            time,
            display_24h: self.display_24h,
        })
    }
}

impl Default for TimeSelectDialogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

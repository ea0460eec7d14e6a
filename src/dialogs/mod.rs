//! Dialog kinds and their frozen configurations
//!
//! Each dialog variant has its own builder module; a successful build
//! freezes the parameters into a kind-specific config struct, wrapped in
//! [`DialogConfig`] for the session layer. Configs are immutable after
//! build and serialize as a whole for host recreation. Every kind owns its
//! schema outright; there is no key sharing between kinds.

pub mod date_select;
pub mod item_select;
pub mod message;
pub mod multi_choice;
pub mod progress;
pub mod single_choice;
pub mod time_select;

pub use date_select::{DateSelectConfig, DateSelectDialogBuilder};
pub use item_select::{ItemSelectConfig, ItemSelectDialogBuilder};
pub use message::{MessageConfig, MessageDialogBuilder};
pub use multi_choice::{MultiChoiceConfig, MultiChoiceDialogBuilder};
pub use progress::{ProgressConfig, ProgressDialogBuilder};
pub use single_choice::{SingleChoiceConfig, SingleChoiceDialogBuilder};
pub use time_select::{TimeSelectConfig, TimeSelectDialogBuilder};

use crate::item::SelectorItem;
use crate::selection::SelectionMode;
use crate::surface::ButtonLabels;
use serde::{Deserialize, Serialize};

/// The preconfigured dialog variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogKind {
    Message,
    SingleChoice,
    MultiChoice,
    ItemSelect,
    DateSelect,
    TimeSelect,
    Progress,
}

impl DialogKind {
    /// Display/lookup name, also the default session tag
    pub const fn name(self) -> &'static str {
        match self {
            DialogKind::Message => "MessageDialog",
            DialogKind::SingleChoice => "SingleChoiceDialog",
            DialogKind::MultiChoice => "MultiChoiceDialog",
            DialogKind::ItemSelect => "ItemSelectDialog",
            DialogKind::DateSelect => "DateSelectDialog",
            DialogKind::TimeSelect => "TimeSelectDialog",
            DialogKind::Progress => "ProgressDialog",
        }
    }
}

/// Fields shared by every dialog kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommonConfig {
    /// Identifies which logical request a result belongs to
    pub request_key: String,

    /// Display/lookup name, defaults to the kind's name
    pub tag: String,

    /// Whether tapping outside the dialog dismisses it
    pub cancelable: bool,
}

/// A finalized dialog configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum DialogConfig {
    Message(MessageConfig),
    SingleChoice(SingleChoiceConfig),
    MultiChoice(MultiChoiceConfig),
    ItemSelect(ItemSelectConfig),
    DateSelect(DateSelectConfig),
    TimeSelect(TimeSelectConfig),
    Progress(ProgressConfig),
}

impl DialogConfig {
    pub fn kind(&self) -> DialogKind {
        match self {
            DialogConfig::Message(_) => DialogKind::Message,
            DialogConfig::SingleChoice(_) => DialogKind::SingleChoice,
            DialogConfig::MultiChoice(_) => DialogKind::MultiChoice,
            DialogConfig::ItemSelect(_) => DialogKind::ItemSelect,
            DialogConfig::DateSelect(_) => DialogKind::DateSelect,
            DialogConfig::TimeSelect(_) => DialogKind::TimeSelect,
            DialogConfig::Progress(_) => DialogKind::Progress,
        }
    }

    pub fn common(&self) -> &CommonConfig {
        match self {
            DialogConfig::Message(config) => &config.common,
            DialogConfig::SingleChoice(config) => &config.common,
            DialogConfig::MultiChoice(config) => &config.common,
            DialogConfig::ItemSelect(config) => &config.common,
            DialogConfig::DateSelect(config) => &config.common,
            DialogConfig::TimeSelect(config) => &config.common,
            DialogConfig::Progress(config) => &config.common,
        }
    }

    pub fn request_key(&self) -> &str {
        &self.common().request_key
    }

    pub fn tag(&self) -> &str {
        &self.common().tag
    }

    pub fn cancelable(&self) -> bool {
        self.common().cancelable
    }

    /// Selection policy for the kinds that carry an item list
    pub fn selection_mode(&self) -> Option<SelectionMode> {
        match self {
            DialogConfig::SingleChoice(_) => Some(SelectionMode::Exclusive),
            DialogConfig::MultiChoice(_) => Some(SelectionMode::Independent),
            DialogConfig::ItemSelect(_) => Some(SelectionMode::OneShot),
            _ => None,
        }
    }

    /// Items as built, for seeding the selection engine
    pub fn items(&self) -> Option<&[SelectorItem]> {
        match self {
            DialogConfig::SingleChoice(config) => Some(&config.items),
            DialogConfig::MultiChoice(config) => Some(&config.items),
            DialogConfig::ItemSelect(config) => Some(&config.items),
            _ => None,
        }
    }

    /// Column count for list layout; 1 for the kinds without a list
    pub fn columns(&self) -> u16 {
        match self {
            DialogConfig::SingleChoice(config) => config.columns,
            DialogConfig::MultiChoice(config) => config.columns,
            DialogConfig::ItemSelect(config) => config.columns,
            _ => 1,
        }
    }

    /// Button row as built; kinds without buttons return an empty set
    pub fn button_labels(&self) -> ButtonLabels {
        match self {
            DialogConfig::Message(config) => ButtonLabels {
                positive: config.positive_label.clone(),
                negative: config.negative_label.clone(),
                neutral: config.neutral_label.clone(),
            },
            DialogConfig::SingleChoice(config) => ButtonLabels {
                positive: config.positive_label.clone(),
                negative: config.negative_label.clone(),
                neutral: config.neutral_label.clone(),
            },
            DialogConfig::MultiChoice(config) => ButtonLabels {
                positive: config.positive_label.clone(),
                negative: config.negative_label.clone(),
                neutral: config.neutral_label.clone(),
            },
            DialogConfig::Progress(config) => ButtonLabels {
                negative: Some(config.negative_label.clone()),
                ..Default::default()
            },
            DialogConfig::ItemSelect(_)
            | DialogConfig::DateSelect(_)
            | DialogConfig::TimeSelect(_) => ButtonLabels::default(),
        }
    }
}

impl From<MessageConfig> for DialogConfig {
    fn from(config: MessageConfig) -> Self {
        DialogConfig::Message(config)
    }
}

impl From<SingleChoiceConfig> for DialogConfig {
    fn from(config: SingleChoiceConfig) -> Self {
        DialogConfig::SingleChoice(config)
    }
}

impl From<MultiChoiceConfig> for DialogConfig {
    fn from(config: MultiChoiceConfig) -> Self {
        DialogConfig::MultiChoice(config)
    }
}

impl From<ItemSelectConfig> for DialogConfig {
    fn from(config: ItemSelectConfig) -> Self {
        DialogConfig::ItemSelect(config)
    }
}

impl From<DateSelectConfig> for DialogConfig {
    fn from(config: DateSelectConfig) -> Self {
        DialogConfig::DateSelect(config)
    }
}

impl From<TimeSelectConfig> for DialogConfig {
    fn from(config: TimeSelectConfig) -> Self {
        DialogConfig::TimeSelect(config)
    }
}

impl From<ProgressConfig> for DialogConfig {
    fn from(config: ProgressConfig) -> Self {
        DialogConfig::Progress(config)
    }
}

/// Store a label only when it is actually displayable
pub(crate) fn normalize_label(label: String) -> Option<String> {
    if crate::error::is_blank(&label) {
        None
    } else {
        Some(label)
    }
}

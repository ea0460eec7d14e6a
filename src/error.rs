//! Construction-time error taxonomy
//!
//! Every builder validates its parameters synchronously in `build()` and
//! fails with one of these variants. There is no partial-build recovery;
//! the caller fixes the parameters and builds again.

/// Errors raised while assembling a dialog configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("Request key can't enter empty or blank word.")]
    RequestKeyMissing,

    #[error("Title is required.")]
    TitleMissing,

    #[error("Text Message is required.")]
    TextMissing,

    #[error("Either positive_label(), negative_label(), or neutral_label() must be defined")]
    ButtonNotDefined,

    #[error("Function selector_items() requires at least one SelectorItem element.")]
    SelectorItemsEmpty,

    #[error("Values less than 0 cannot be entered")]
    NegativeQuantity,

    #[error("negative_label() must be defined")]
    NegativeButtonMissing,

    #[error("text or icon is required.")]
    SelectorItemInvalid,
}

/// Whitespace-only strings count as missing everywhere a field is required.
pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

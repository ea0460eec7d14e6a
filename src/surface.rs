//! Rendering surface contract
//!
//! The toolkit draws nothing itself. The consuming environment supplies a
//! [`Surface`] per open dialog: something that can lay out an ordered item
//! list, a row of labeled buttons, and a progress indicator, and that can
//! tear its window down on `dismiss`. Surfaces receive read-only item
//! snapshots and report interactions back to the session by position or
//! button code; they must not retain the snapshot past the call.

use crate::item::SelectorItem;
use anyhow::Result;

/// Button labels as built; a `None` means the button is not shown
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonLabels {
    pub positive: Option<String>,
    pub negative: Option<String>,
    pub neutral: Option<String>,
}

impl ButtonLabels {
    pub fn is_empty(&self) -> bool {
        self.positive.is_none() && self.negative.is_none() && self.neutral.is_none()
    }
}

/// What the progress indicator should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressView {
    /// Unknown total quantity; show a spinner or equivalent
    Indeterminate,

    /// Discrete progress with the precomputed integer percentage
    Determinate {
        progress: i64,
        quantity_max: i64,
        percent: i64,
    },
}

/// One dialog's visual surface, implemented by the host environment
pub trait Surface {
    /// Draw the full item list with the configured column count
    fn render_list(&mut self, items: &[SelectorItem], columns: u16) -> Result<()>;

    /// Redraw only the listed positions after a selection change
    ///
    /// The default falls back to a full redraw, which is always acceptable;
    /// surfaces backed by item views should override and repaint only the
    /// changed positions.
    fn render_changed(
        &mut self,
        positions: &[usize],
        items: &[SelectorItem],
        columns: u16,
    ) -> Result<()> {
        let _ = positions;
        self.render_list(items, columns)
    }

    /// Draw the button row; absent labels hide their button
    fn render_buttons(&mut self, labels: &ButtonLabels) -> Result<()>;

    /// Refresh the progress indicator and its quantity/percentage text
    fn render_progress(&mut self, view: ProgressView, message: Option<&str>) -> Result<()>;

    /// Tear down the dialog window. Must tolerate repeated calls.
    fn dismiss(&mut self) -> Result<()>;
}


#[cfg(test)]
mod tests {
    use super::*;

    struct FullRedrawOnly {
        full_redraws: usize,
    }

    impl Surface for FullRedrawOnly {
        fn render_list(&mut self, _items: &[SelectorItem], _columns: u16) -> Result<()> {
            self.full_redraws += 1;
            Ok(())
        }

        fn render_buttons(&mut self, _labels: &ButtonLabels) -> Result<()> {
            Ok(())
        }

        fn render_progress(&mut self, _view: ProgressView, _message: Option<&str>) -> Result<()> {
            Ok(())
        }

        fn dismiss(&mut self) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_changed_render_defaults_to_full_redraw() {
        let mut surface = FullRedrawOnly { full_redraws: 0 };
        let items = vec![crate::item::SelectorItem::text("a").unwrap()];
        surface.render_changed(&[0], &items, 1).unwrap();
        assert_eq!(surface.full_redraws, 1);
    }

    #[test]
    fn test_button_labels_empty() {
        assert!(ButtonLabels::default().is_empty());
        let labels = ButtonLabels {
            negative: Some("Cancel".to_string()),
            ..Default::default()
        };
        assert!(!labels.is_empty());
    }
}

//! Selection state engines for the choice dialogs
//!
//! The session owns the canonical item sequence; surfaces only see
//! read-only snapshots and report activations back by position. Two
//! persistent policies cover the checkbox and radio-button dialogs, and a
//! degenerate one-shot policy backs the tap-to-choose item picker.

use crate::item::SelectorItem;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Exclusivity policy applied to activations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMode {
    /// Checkbox semantics: each position toggles independently
    Independent,

    /// Radio-button semantics: at most one position checked at a time
    Exclusive,

    /// Tap-to-choose: activation resolves immediately, no state retained
    OneShot,
}

/// Outcome of one activation event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Checked flags changed at exactly these positions; redraw them
    Changed(Vec<usize>),

    /// Nothing changed (re-click of the active radio position)
    Unchanged,

    /// One-shot choice resolved to this index; the session should end
    Chosen(usize),

    /// Position out of range or item not selectable
    Ignored,
}

/// Mutable checked-state over an ordered item sequence
#[derive(Debug, Clone)]
pub struct SelectionEngine {
    mode: SelectionMode,
    items: Vec<SelectorItem>,

    /// Last activated position under the exclusive policy. Initialized
    /// lazily from whichever position is checked when the first activation
    /// arrives, so a pre-selected initial item is honored.
    last_clicked: Option<usize>,
}

impl SelectionEngine {
    pub fn new(mode: SelectionMode, items: Vec<SelectorItem>) -> Self {
        Self {
            mode,
            items,
            last_clicked: None,
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Read-only snapshot for the rendering surface
    pub fn items(&self) -> &[SelectorItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Apply one activation event at `position`
    pub fn activate(&mut self, position: usize) -> Activation {
        let Some(item) = self.items.get(position) else {
            return Activation::Ignored;
        };
        if !item.selectable {
            return Activation::Ignored;
        }

        match self.mode {
            SelectionMode::Independent => {
                self.items[position].checked = !self.items[position].checked;
                debug!(position, checked = self.items[position].checked, "toggled item");
                Activation::Changed(vec![position])
            }
            SelectionMode::Exclusive => {
                let last = self
                    .last_clicked
                    .or_else(|| self.checked_position());
                self.last_clicked = Some(position);
                if last == Some(position) {
                    return Activation::Unchanged;
                }
                let mut changed = Vec::with_capacity(2);
                if let Some(prev) = last {
                    self.items[prev].checked = false;
                    changed.push(prev);
                }
                self.items[position].checked = true;
                changed.push(position);
                debug!(position, ?changed, "moved exclusive selection");
                Activation::Changed(changed)
            }
            SelectionMode::OneShot => Activation::Chosen(position),
        }
    }

    /// Position of the first checked item, if any
    pub fn checked_position(&self) -> Option<usize> {
        self.items.iter().position(|item| item.checked)
    }

    /// Indices of all checked items in item order
    pub fn checked_positions(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.checked)
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Checked flag of every item in item order
    pub fn checked_states(&self) -> Vec<bool> {
        self.items.iter().map(|item| item.checked).collect()
    }

    /// Overwrite checked flags from a saved state list
    ///
    /// Extra saved entries are ignored; missing entries leave the item as
    /// built. Restoring resets the lazy exclusive tracking so the next
    /// activation re-derives it from the restored flags.
    pub fn restore_checked_states(&mut self, states: &[bool]) {
        for (item, &checked) in self.items.iter_mut().zip(states.iter()) {
            item.checked = checked;
        }
        self.last_clicked = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<SelectorItem> {
        (0..n)
            .map(|i| SelectorItem::text(format!("item {i}")).unwrap())
            .collect()
    }

    #[test]
    fn test_independent_toggle_is_its_own_inverse() {
        let mut engine = SelectionEngine::new(SelectionMode::Independent, items(4));
        assert_eq!(engine.activate(2), Activation::Changed(vec![2]));
        assert!(engine.checked_states()[2]);
        assert_eq!(engine.activate(2), Activation::Changed(vec![2]));
        assert!(!engine.checked_states()[2]);
    }

    #[test]
    fn test_independent_positions_do_not_interfere() {
        let mut engine = SelectionEngine::new(SelectionMode::Independent, items(4));
        engine.activate(0);
        engine.activate(3);
        assert_eq!(engine.checked_positions(), vec![0, 3]);
        engine.activate(0);
        assert_eq!(engine.checked_positions(), vec![3]);
    }

    #[test]
    fn test_exclusive_moves_selection() {
        let mut engine = SelectionEngine::new(SelectionMode::Exclusive, items(5));
        assert_eq!(engine.activate(1), Activation::Changed(vec![1]));
        assert_eq!(engine.activate(3), Activation::Changed(vec![1, 3]));
        assert_eq!(engine.checked_positions(), vec![3]);
    }

    #[test]
    fn test_exclusive_reclick_is_idempotent() {
        let mut engine = SelectionEngine::new(SelectionMode::Exclusive, items(5));
        engine.activate(2);
        assert_eq!(engine.activate(2), Activation::Unchanged);
        assert_eq!(engine.checked_positions(), vec![2]);
    }

    #[test]
    fn test_exclusive_honors_preselected_item() {
        let mut list = items(4);
        list[1].checked = true;
        let mut engine = SelectionEngine::new(SelectionMode::Exclusive, list);
        // First activation must clear the pre-checked position.
        assert_eq!(engine.activate(3), Activation::Changed(vec![1, 3]));
        assert_eq!(engine.checked_positions(), vec![3]);
    }

    #[test]
    fn test_exclusive_reclick_of_preselected_item() {
        let mut list = items(4);
        list[1].checked = true;
        let mut engine = SelectionEngine::new(SelectionMode::Exclusive, list);
        assert_eq!(engine.activate(1), Activation::Unchanged);
        assert_eq!(engine.checked_positions(), vec![1]);
    }

    #[test]
    fn test_unselectable_items_ignore_activation() {
        let mut list = items(3);
        list[1].selectable = false;
        let mut engine = SelectionEngine::new(SelectionMode::Independent, list.clone());
        assert_eq!(engine.activate(1), Activation::Ignored);
        assert!(engine.checked_positions().is_empty());

        let mut engine = SelectionEngine::new(SelectionMode::Exclusive, list);
        assert_eq!(engine.activate(1), Activation::Ignored);
        assert!(engine.checked_positions().is_empty());
    }

    #[test]
    fn test_out_of_range_activation_ignored() {
        let mut engine = SelectionEngine::new(SelectionMode::OneShot, items(2));
        assert_eq!(engine.activate(9), Activation::Ignored);
    }

    #[test]
    fn test_one_shot_resolves_immediately() {
        let mut engine = SelectionEngine::new(SelectionMode::OneShot, items(3));
        assert_eq!(engine.activate(2), Activation::Chosen(2));
        // No checked state is retained.
        assert!(engine.checked_positions().is_empty());
    }

    #[test]
    fn test_restore_checked_states() {
        let mut engine = SelectionEngine::new(SelectionMode::Independent, items(3));
        engine.restore_checked_states(&[true, false, true]);
        assert_eq!(engine.checked_states(), vec![true, false, true]);
    }

    #[test]
    fn test_restore_then_exclusive_activation_rederives_tracking() {
        let mut engine = SelectionEngine::new(SelectionMode::Exclusive, items(3));
        engine.activate(0);
        engine.restore_checked_states(&[false, true, false]);
        assert_eq!(engine.activate(2), Activation::Changed(vec![1, 2]));
    }
}

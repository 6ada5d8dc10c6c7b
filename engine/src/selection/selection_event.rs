//! Events and small enums of the selection state machine.

use common::active_filter::ActiveFilters;
use serde::{Deserialize, Serialize};


/// Emitted after committed mutations only, never while multi-select values are staged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SelectionEvent {
    FiltersChanged(ActiveFilters),
    /// Every keystroke in basic mode.
    BasicQueryChanged(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpenList {
    Columns,
    Values,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueListState {
    /// No `Select` facet is being edited.
    NotApplicable,
    /// A provider lookup for the selected facet has not resolved yet.
    Pending,
    Ready,
}

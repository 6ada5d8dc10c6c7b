//! Selection store: the only mutable state of a filtering session.

mod list_navigation;
pub use list_navigation::{enter_target, next_index, prev_index};

mod selection_event;
pub use selection_event::{NavKey, OpenList, SelectionEvent, ValueListState};

mod selection_store;
pub use selection_store::SelectionStore;

//! Faceted filtering engine: selection state machine, suggestions, record matching and chip layout.

pub mod suggestions;
pub mod value_provider;
pub mod matching;
pub mod chip_layout;
pub mod selection;

pub use selection::{NavKey, OpenList, SelectionEvent, SelectionStore, ValueListState};

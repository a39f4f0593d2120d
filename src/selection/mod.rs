//! Option-list reconciliation shared by the filter and multi-select controls.
//!
//! Several views present a catalogue of named records (regions, branches,
//! centres) and a selection of their ids: the centre filter on the history
//! page and the per-category access pickers on the staff access editor. The
//! pure lookup, search and toggle operations live here so the page modules
//! only deal with rendering.

mod domain;
mod ops;
mod single;

pub use domain::{FilterRow, OptionId, SelectOption};
pub use ops::{resolve, search, search_with_all, toggle_in, toggle_out};
pub use single::SingleSelectFilter;

//! Cash-collection entry and history.
//!
//! New collections are validated locally and posted to the backend; the
//! history page pulls the full record set and applies text search, centre
//! filtering and date sorting in the dashboard.

mod create_endpoint;
mod entry_page;
mod history;
mod history_page;

pub use create_endpoint::create_collection_endpoint;
pub use entry_page::get_new_collection_page;
pub use history_page::{get_centre_options_partial, get_history_page};

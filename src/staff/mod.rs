//! Staff listing and per-staff access management.
//!
//! A staff member's access is a tri-category selection of regions, branches
//! and centres. The editor renders one chip per selected option and a
//! checkbox picker per category; every mutation re-submits the full
//! tri-category selection to the backend.

mod access_page;
mod domain;
mod list_page;
mod update_endpoint;

pub use access_page::get_access_page;
pub use list_page::get_staff_page;
pub use update_endpoint::update_access_endpoint;

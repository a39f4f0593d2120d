//! The client for the external backend REST API.
//!
//! All reads and writes of business data go through [ApiClient]; this
//! application keeps no storage of its own. Identifier normalisation
//! happens here, on response parse, via [crate::selection::OptionId]'s
//! deserialiser.

mod client;
mod models;

pub use client::{ApiClient, ClientConfig};
pub(crate) use models::{
    ArmUser, CashCollection, Catalogue, DATE_FORMAT, NewCashCollection, StaffAccess,
};

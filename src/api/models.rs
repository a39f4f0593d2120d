//! Wire models for the backend REST API.

use serde::{Deserialize, Serialize, Serializer};
use time::{Date, OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

use crate::selection::{OptionId, SelectOption};

/// The full region/branch/centre catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Catalogue {
    /// All regions.
    #[serde(default)]
    pub regions: Vec<SelectOption>,
    /// All branches.
    #[serde(default)]
    pub branches: Vec<SelectOption>,
    /// All centres.
    #[serde(default)]
    pub centres: Vec<SelectOption>,
}

/// A staff member's tri-category access selection.
///
/// This is both the GET response shape and the PUT request body: every
/// mutation re-submits all three categories, never a delta.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffAccess {
    /// Ids of the regions the staff member may access.
    #[serde(default)]
    pub region_ids: Vec<OptionId>,
    /// Ids of the branches the staff member may access.
    #[serde(default)]
    pub branch_ids: Vec<OptionId>,
    /// Ids of the centres the staff member may access.
    #[serde(default)]
    pub centre_ids: Vec<OptionId>,
}

/// An ARM user with their current cash position.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmUser {
    /// The user's identifier.
    pub id: OptionId,
    /// Cash currently held by the user.
    #[serde(default)]
    pub cash_in_hand: f64,
}

/// One recorded external cash collection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashCollection {
    /// The record's identifier.
    pub id: OptionId,
    /// The amount of cash received.
    pub amount_received: f64,
    /// The centre the cash was collected from.
    #[serde(default)]
    pub source: String,
    /// When the cash was received.
    #[serde(with = "time::serde::rfc3339")]
    pub amount_received_date: OffsetDateTime,
    /// Free-text note attached to the collection.
    #[serde(default)]
    pub remark: String,
    /// The record's OT workflow status.
    #[serde(default)]
    pub ot_status: String,
}

/// The history endpoint wraps its records in a `data` field.
#[derive(Debug, Deserialize)]
pub(crate) struct HistoryResponse {
    pub data: Vec<CashCollection>,
}

/// A new collection to submit to the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCashCollection {
    /// The amount of cash received.
    pub amount_received: f64,
    /// The centre the cash was collected from.
    pub source: String,
    /// The date the cash was received, sent as `YYYY-MM-DD` to match the
    /// HTML date input it originates from.
    #[serde(serialize_with = "serialize_date")]
    pub amount_received_date: Date,
    /// Free-text note attached to the collection.
    pub remark: String,
}

/// The date format used for collection dates on the wire and in forms.
pub(crate) const DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

fn serialize_date<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
    let formatted = date
        .format(&DATE_FORMAT)
        .map_err(serde::ser::Error::custom)?;

    serializer.serialize_str(&formatted)
}

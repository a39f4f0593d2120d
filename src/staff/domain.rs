//! Core access-selection domain types.

use crate::{
    api::StaffAccess,
    selection::{OptionId, toggle_out},
};

/// The three categories a staff member's access is scoped by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessCategory {
    Regions,
    Branches,
    Centres,
}

impl AccessCategory {
    /// All categories, in display order.
    pub const ALL: [AccessCategory; 3] = [
        AccessCategory::Regions,
        AccessCategory::Branches,
        AccessCategory::Centres,
    ];

    /// The form field name carrying this category's selected ids.
    pub fn field_name(self) -> &'static str {
        match self {
            AccessCategory::Regions => "regions",
            AccessCategory::Branches => "branches",
            AccessCategory::Centres => "centres",
        }
    }

    /// The section heading shown in the editor.
    pub fn heading(self) -> &'static str {
        match self {
            AccessCategory::Regions => "Regions",
            AccessCategory::Branches => "Branches",
            AccessCategory::Centres => "Centres",
        }
    }

    /// Parse a form field name back into a category.
    pub fn parse(value: &str) -> Option<Self> {
        AccessCategory::ALL
            .into_iter()
            .find(|category| category.field_name() == value)
    }
}

/// A staff member's access selection, one independent multi selection per
/// category. Insertion order is preserved for chip display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccessSelection {
    pub regions: Vec<OptionId>,
    pub branches: Vec<OptionId>,
    pub centres: Vec<OptionId>,
}

impl AccessSelection {
    /// The selected ids for one category.
    pub fn selection(&self, category: AccessCategory) -> &[OptionId] {
        match category {
            AccessCategory::Regions => &self.regions,
            AccessCategory::Branches => &self.branches,
            AccessCategory::Centres => &self.centres,
        }
    }

    /// Return a selection with `id` removed from `category`; a no-op if the
    /// id is not selected. The other two categories are untouched.
    pub fn remove(&self, category: AccessCategory, id: &OptionId) -> Self {
        self.with_category(category, toggle_out(self.selection(category), id))
    }

    fn with_category(&self, category: AccessCategory, ids: Vec<OptionId>) -> Self {
        let mut updated = self.clone();

        match category {
            AccessCategory::Regions => updated.regions = ids,
            AccessCategory::Branches => updated.branches = ids,
            AccessCategory::Centres => updated.centres = ids,
        }

        updated
    }
}

impl From<StaffAccess> for AccessSelection {
    fn from(access: StaffAccess) -> Self {
        Self {
            regions: access.region_ids,
            branches: access.branch_ids,
            centres: access.centre_ids,
        }
    }
}

impl From<AccessSelection> for StaffAccess {
    fn from(selection: AccessSelection) -> Self {
        Self {
            region_ids: selection.regions,
            branch_ids: selection.branches,
            centre_ids: selection.centres,
        }
    }
}

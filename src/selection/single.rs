//! State for the searchable single-select filter control.

use super::{
    domain::{FilterRow, SelectOption},
    ops::search_with_all,
};

/// The interaction state of a searchable single-select filter.
///
/// The control owns a text query, an open/closed flag and at most one
/// selected option; no selection means "no filter applied". Derivation of
/// the visible rows goes through [search_with_all] so the control carries no
/// rendering concerns and can be driven entirely from request parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SingleSelectFilter {
    query: String,
    open: bool,
    selected: Option<SelectOption>,
}

impl SingleSelectFilter {
    /// A closed filter with `selected` applied, as restored from request
    /// parameters.
    pub fn with_selected(selected: Option<SelectOption>) -> Self {
        Self {
            query: String::new(),
            open: false,
            selected,
        }
    }

    /// Open the option list. Opening clears nothing.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the option list and reset the query.
    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
    }

    /// Whether the option list is currently shown.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Replace the search query.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_owned();
    }

    /// The current search query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Apply a choice and close the control.
    ///
    /// `None` is the sentinel choice: the externally visible selection
    /// becomes "no filter applied".
    pub fn select(&mut self, choice: Option<SelectOption>) {
        self.selected = choice;
        self.close();
    }

    /// The currently applied option, if any.
    pub fn selected(&self) -> Option<&SelectOption> {
        self.selected.as_ref()
    }

    /// The label to show on the closed control.
    pub fn selected_label<'a>(&'a self, all_label: &'a str) -> &'a str {
        match &self.selected {
            Some(option) => &option.name,
            None => all_label,
        }
    }

    /// The rows to render for the current query, sentinel first.
    pub fn visible_rows(&self, options: &[SelectOption], all_label: &str) -> Vec<FilterRow> {
        search_with_all(options, &self.query, all_label)
    }

    /// Whether the current query matched none of `options`.
    ///
    /// Distinct from an empty query; the caller renders an explicit
    /// no-matches state for this case instead of showing the full list.
    pub fn has_no_matches(&self, options: &[SelectOption]) -> bool {
        !self.query.trim().is_empty() && self.visible_rows(options, "").len() == 1
    }
}

#[cfg(test)]
mod single_select_filter_tests {
    use super::SingleSelectFilter;
    use crate::selection::SelectOption;

    fn test_options() -> Vec<SelectOption> {
        vec![
            SelectOption::new("1", "Alpha"),
            SelectOption::new("2", "Beta"),
        ]
    }

    #[test]
    fn closing_resets_the_query() {
        let mut filter = SingleSelectFilter::default();
        filter.open();
        filter.set_query("alp");

        filter.close();

        assert!(!filter.is_open());
        assert_eq!(filter.query(), "");
    }

    #[test]
    fn opening_clears_no_state() {
        let mut filter = SingleSelectFilter::with_selected(Some(SelectOption::new("1", "Alpha")));
        filter.set_query("be");

        filter.open();

        assert_eq!(filter.query(), "be");
        assert_eq!(filter.selected(), Some(&SelectOption::new("1", "Alpha")));
    }

    #[test]
    fn selecting_an_option_closes_the_control() {
        let mut filter = SingleSelectFilter::default();
        filter.open();
        filter.set_query("bet");

        filter.select(Some(SelectOption::new("2", "Beta")));

        assert!(!filter.is_open());
        assert_eq!(filter.query(), "");
        assert_eq!(filter.selected_label("All Centers"), "Beta");
    }

    #[test]
    fn selecting_the_sentinel_clears_the_filter() {
        let mut filter = SingleSelectFilter::with_selected(Some(SelectOption::new("2", "Beta")));

        filter.select(None);

        assert_eq!(filter.selected(), None);
        assert_eq!(filter.selected_label("All Centers"), "All Centers");
    }

    #[test]
    fn no_matches_is_flagged_only_for_non_empty_queries() {
        let options = test_options();
        let mut filter = SingleSelectFilter::default();

        assert!(!filter.has_no_matches(&options));

        filter.set_query("zzz");

        assert!(filter.has_no_matches(&options));

        filter.set_query("alpha");

        assert!(!filter.has_no_matches(&options));
    }
}

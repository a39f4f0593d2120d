//! Pure reconciliation operations over option lists and selections.

use super::domain::{FilterRow, OptionId, SelectOption};

/// Map selected ids back to their display records.
///
/// Ids are looked up in `options` in selection order. Ids that are not in
/// `options` are omitted silently rather than erroring, so a selection that
/// references records the backend no longer returns simply renders without
/// them. The output never contains duplicate ids.
pub fn resolve(options: &[SelectOption], selection: &[OptionId]) -> Vec<SelectOption> {
    let mut resolved: Vec<SelectOption> = Vec::with_capacity(selection.len());

    for id in selection {
        if resolved.iter().any(|option| &option.id == id) {
            continue;
        }

        if let Some(option) = options.iter().find(|option| &option.id == id) {
            resolved.push(option.clone());
        }
    }

    resolved
}

/// Case-insensitive substring search over option names.
///
/// An empty (or all-whitespace) query returns the full set unchanged. The
/// option list itself is never mutated.
pub fn search<'a>(options: &'a [SelectOption], query: &str) -> Vec<&'a SelectOption> {
    let query = query.trim().to_lowercase();

    if query.is_empty() {
        return options.iter().collect();
    }

    options
        .iter()
        .filter(|option| option.name.to_lowercase().contains(&query))
        .collect()
}

/// Search for a single-select context: the "All X" sentinel row is prepended
/// exactly once, ahead of the matches.
///
/// An empty option set, or a query matching nothing, yields just the
/// sentinel; callers can tell the zero-match case apart from "no query" by
/// checking the query themselves and must render an explicit no-matches
/// state rather than falling back to the full list.
pub fn search_with_all(options: &[SelectOption], query: &str, all_label: &str) -> Vec<FilterRow> {
    let mut rows = vec![FilterRow {
        id: None,
        name: all_label.to_owned(),
    }];

    rows.extend(search(options, query).into_iter().map(|option| FilterRow {
        id: Some(option.id.clone()),
        name: option.name.clone(),
    }));

    rows
}

/// Return `selection` with `id` appended, or an equal selection if `id` is
/// already present.
pub fn toggle_in(selection: &[OptionId], id: &OptionId) -> Vec<OptionId> {
    let mut updated = selection.to_vec();

    if !updated.contains(id) {
        updated.push(id.clone());
    }

    updated
}

/// Return `selection` with `id` removed, or an equal selection if `id` is
/// absent.
pub fn toggle_out(selection: &[OptionId], id: &OptionId) -> Vec<OptionId> {
    selection
        .iter()
        .filter(|selected| *selected != id)
        .cloned()
        .collect()
}

#[cfg(test)]
mod resolve_tests {
    use super::{resolve, toggle_out};
    use crate::selection::{OptionId, SelectOption};

    fn test_options() -> Vec<SelectOption> {
        vec![
            SelectOption::new("1", "Alpha"),
            SelectOption::new("2", "Beta"),
        ]
    }

    #[test]
    fn resolves_in_selection_order() {
        let options = test_options();
        let selection = vec![OptionId::new("2"), OptionId::new("1")];

        let got = resolve(&options, &selection);

        assert_eq!(
            got,
            vec![
                SelectOption::new("2", "Beta"),
                SelectOption::new("1", "Alpha"),
            ]
        );
    }

    #[test]
    fn omits_unknown_ids_silently() {
        let options = test_options();
        let selection = vec![
            OptionId::new("1"),
            OptionId::new("missing"),
            OptionId::new("2"),
        ];

        let got = resolve(&options, &selection);

        assert_eq!(got.len(), 2);
        assert!(got.iter().all(|option| option.id != OptionId::new("missing")));
    }

    #[test]
    fn never_returns_duplicates() {
        let options = test_options();
        let selection = vec![OptionId::new("1"), OptionId::new("1"), OptionId::new("2")];

        let got = resolve(&options, &selection);

        assert_eq!(
            got,
            vec![
                SelectOption::new("1", "Alpha"),
                SelectOption::new("2", "Beta"),
            ]
        );
    }

    #[test]
    fn empty_option_set_resolves_to_nothing() {
        let got = resolve(&[], &[OptionId::new("1")]);

        assert!(got.is_empty());
    }

    #[test]
    fn toggle_out_then_resolve() {
        let options = test_options();
        let selection = vec![OptionId::new("1"), OptionId::new("2")];

        let selection = toggle_out(&selection, &OptionId::new("2"));

        assert_eq!(selection, vec![OptionId::new("1")]);
        assert_eq!(
            resolve(&options, &selection),
            vec![SelectOption::new("1", "Alpha")]
        );
    }
}

#[cfg(test)]
mod search_tests {
    use super::{search, search_with_all};
    use crate::selection::{FilterRow, OptionId, SelectOption};

    fn test_options() -> Vec<SelectOption> {
        vec![
            SelectOption::new("1", "Alpha"),
            SelectOption::new("2", "Beta"),
        ]
    }

    #[test]
    fn empty_query_returns_full_set_in_order() {
        let options = test_options();

        let got = search(&options, "");

        assert_eq!(got, options.iter().collect::<Vec<_>>());
    }

    #[test]
    fn matches_are_case_insensitive() {
        let options = test_options();

        let got = search(&options, "AL");

        assert_eq!(got, vec![&options[0]]);
    }

    #[test]
    fn search_is_idempotent() {
        let options = test_options();

        let first = search(&options, "beta");
        let second = search(&options, "beta");

        assert_eq!(first, second);
        assert_eq!(options, test_options(), "search must not mutate its input");
    }

    #[test]
    fn zero_matches_is_distinct_from_no_query() {
        let options = test_options();

        assert!(search(&options, "zzz").is_empty());
        assert_eq!(search(&options, "").len(), options.len());
    }

    #[test]
    fn prepends_sentinel_exactly_once() {
        let options = test_options();

        let got = search_with_all(&options, "", "All Centers");

        assert_eq!(got.len(), 3);
        assert_eq!(
            got[0],
            FilterRow {
                id: None,
                name: "All Centers".to_owned(),
            }
        );
        assert_eq!(
            got.iter().filter(|row| row.id.is_none()).count(),
            1,
            "want exactly one sentinel row"
        );
    }

    #[test]
    fn sentinel_plus_matching_option() {
        let options = test_options();

        let got = search_with_all(&options, "al", "All Centers");

        assert_eq!(
            got,
            vec![
                FilterRow {
                    id: None,
                    name: "All Centers".to_owned(),
                },
                FilterRow {
                    id: Some(OptionId::new("1")),
                    name: "Alpha".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn empty_option_set_yields_just_the_sentinel() {
        let got = search_with_all(&[], "", "All Centers");

        assert_eq!(got.len(), 1);
        assert!(got[0].id.is_none());
    }
}

#[cfg(test)]
mod toggle_tests {
    use super::{toggle_in, toggle_out};
    use crate::selection::OptionId;

    #[test]
    fn toggle_in_then_out_restores_original() {
        let original = vec![OptionId::new("1"), OptionId::new("2")];

        let added = toggle_in(&original, &OptionId::new("3"));
        let restored = toggle_out(&added, &OptionId::new("3"));

        assert_eq!(restored, original);
    }

    #[test]
    fn toggle_in_is_a_noop_when_present() {
        let original = vec![OptionId::new("1"), OptionId::new("2")];

        let got = toggle_in(&original, &OptionId::new("1"));

        assert_eq!(got, original, "selection set and order must be unchanged");
    }

    #[test]
    fn toggle_out_is_a_noop_when_absent() {
        let original = vec![OptionId::new("1")];

        let got = toggle_out(&original, &OptionId::new("2"));

        assert_eq!(got, original);
    }

    #[test]
    fn toggle_in_appends_preserving_insertion_order() {
        let got = toggle_in(&[OptionId::new("2")], &OptionId::new("1"));

        assert_eq!(got, vec![OptionId::new("2"), OptionId::new("1")]);
    }
}

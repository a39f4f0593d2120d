//! Pure operations over the collection history record set.

use serde::Deserialize;

use crate::api::CashCollection;

/// The sort direction for history rows, keyed on the received date.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Most recently received first.
    #[default]
    NewestFirst,
    /// Oldest received first.
    OldestFirst,
}

impl SortOrder {
    /// The value this order takes in the history page's query string.
    pub fn as_param(self) -> &'static str {
        match self {
            SortOrder::NewestFirst => "newest_first",
            SortOrder::OldestFirst => "oldest_first",
        }
    }

    /// The opposite direction, used for the sort toggle link.
    pub fn reversed(self) -> Self {
        match self {
            SortOrder::NewestFirst => SortOrder::OldestFirst,
            SortOrder::OldestFirst => SortOrder::NewestFirst,
        }
    }
}

/// Records whose source or remark contains `query`, case-insensitively.
///
/// An empty or whitespace query keeps every record.
pub fn search_collections(records: &[CashCollection], query: &str) -> Vec<CashCollection> {
    let query = query.trim().to_lowercase();

    if query.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| {
            record.source.to_lowercase().contains(&query)
                || record.remark.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

/// Records collected from the centre named `centre_name`.
///
/// History records carry the centre by name in their source field, so the
/// match is on the resolved centre name, case-insensitively.
pub fn filter_by_centre(records: &[CashCollection], centre_name: &str) -> Vec<CashCollection> {
    records
        .iter()
        .filter(|record| record.source.eq_ignore_ascii_case(centre_name))
        .cloned()
        .collect()
}

/// Sort records by their received date in the given order.
///
/// The sort is stable, so records sharing a date keep the backend's order.
pub fn sort_by_received_date(records: &mut [CashCollection], order: SortOrder) {
    match order {
        SortOrder::NewestFirst => {
            records.sort_by(|a, b| b.amount_received_date.cmp(&a.amount_received_date))
        }
        SortOrder::OldestFirst => {
            records.sort_by(|a, b| a.amount_received_date.cmp(&b.amount_received_date))
        }
    }
}

/// The sum of the received amounts across `records`.
pub fn total_received(records: &[CashCollection]) -> f64 {
    records.iter().map(|record| record.amount_received).sum()
}

#[cfg(test)]
mod history_tests {
    use time::macros::datetime;

    use super::{
        SortOrder, filter_by_centre, search_collections, sort_by_received_date, total_received,
    };
    use crate::{api::CashCollection, selection::OptionId};

    fn record(id: &str, source: &str, remark: &str, amount: f64, day: u8) -> CashCollection {
        CashCollection {
            id: OptionId::new(id),
            amount_received: amount,
            source: source.to_owned(),
            amount_received_date: datetime!(2026-08-01 09:00 UTC).replace_day(day).unwrap(),
            remark: remark.to_owned(),
            ot_status: String::new(),
        }
    }

    fn test_records() -> Vec<CashCollection> {
        vec![
            record("1", "Harbour", "weekly drop", 100.0, 3),
            record("2", "Hillside", "", 200.0, 1),
            record("3", "Harbour", "extra", 50.0, 7),
        ]
    }

    #[test]
    fn search_matches_source_and_remark_case_insensitively() {
        let records = test_records();

        let by_source = search_collections(&records, "HILL");
        assert_eq!(by_source.len(), 1);
        assert_eq!(by_source[0].id, OptionId::new("2"));

        let by_remark = search_collections(&records, "weekly");
        assert_eq!(by_remark.len(), 1);
        assert_eq!(by_remark[0].id, OptionId::new("1"));
    }

    #[test]
    fn blank_search_keeps_every_record() {
        let records = test_records();

        assert_eq!(search_collections(&records, "  ").len(), records.len());
    }

    #[test]
    fn centre_filter_matches_the_source_name() {
        let records = test_records();

        let filtered = filter_by_centre(&records, "harbour");

        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|record| record.source == "Harbour"));
    }

    #[test]
    fn centre_filter_with_unknown_name_matches_nothing() {
        assert!(filter_by_centre(&test_records(), "Nowhere").is_empty());
    }

    #[test]
    fn sorts_newest_and_oldest_first() {
        let mut records = test_records();

        sort_by_received_date(&mut records, SortOrder::NewestFirst);
        let newest: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(newest, vec!["3", "1", "2"]);

        sort_by_received_date(&mut records, SortOrder::OldestFirst);
        let oldest: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(oldest, vec!["2", "1", "3"]);
    }

    #[test]
    fn totals_the_received_amounts() {
        assert_eq!(total_received(&test_records()), 350.0);
        assert_eq!(total_received(&[]), 0.0);
    }

    #[test]
    fn sort_order_round_trips_through_its_param() {
        assert_eq!(SortOrder::NewestFirst.as_param(), "newest_first");
        assert_eq!(SortOrder::OldestFirst.reversed(), SortOrder::NewestFirst);

        let parsed: SortOrder = serde_json::from_str("\"oldest_first\"").unwrap();
        assert_eq!(parsed, SortOrder::OldestFirst);
    }
}

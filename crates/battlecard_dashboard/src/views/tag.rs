use std::collections::HashSet;

use battlecard_client::DealRecord;
use serde::Serialize;

use super::{fold_by, rounded_percent};

/// A pie-chart slice: percentage of deals that produced a record with `name`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TagSlice {
    pub name: String,
    pub value: u32,
}

/// Tag mentions over distinct deals.
///
/// The numerator counts tagged records, the denominator counts distinct
/// non-empty deal ids across all records, so a tag repeated within one deal
/// weighs more than once. Slices are sorted by value, largest first.
pub fn tag_view(records: &[DealRecord]) -> Vec<TagSlice> {
    let deals: HashSet<&str> = records
        .iter()
        .map(|r| r.deal_id.as_str())
        .filter(|id| !id.is_empty())
        .collect();
    let deal_count = deals.len();

    let mut slices: Vec<TagSlice> =
        fold_by::<usize, _, _>(records, |r| r.tag.as_deref(), |n, _| *n += 1)
            .into_iter()
            .map(|(name, count)| TagSlice {
                name: name.to_string(),
                value: rounded_percent(count, deal_count),
            })
            .collect();
    slices.sort_by(|a, b| b.value.cmp(&a.value));
    slices
}

use battlecard_client::DealRecord;
use serde::Serialize;

use super::{DealOutcome, DealTally, ObjectionCounts, TOP_OBJECTIONS, fold_by};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepRow {
    pub rep_name: String,
    #[serde(flatten)]
    pub outcome: DealOutcome,
    pub top_objections: Vec<String>,
}

#[derive(Debug, Default)]
struct RepStats<'a> {
    deals: DealTally<'a>,
    objections: ObjectionCounts<'a>,
}

/// Deal outcomes per rep, plus the objections the rep hears most often.
pub fn rep_view(records: &[DealRecord]) -> Vec<RepRow> {
    fold_by::<RepStats, _, _>(
        records,
        |r| r.rep_name.as_deref(),
        |stats, r| {
            stats.deals.record(r);
            stats.objections.record(r);
        },
    )
    .into_iter()
    .map(|(rep, stats)| RepRow {
        rep_name: rep.to_string(),
        outcome: stats.deals.outcome(),
        top_objections: stats.objections.top(TOP_OBJECTIONS),
    })
    .collect()
}

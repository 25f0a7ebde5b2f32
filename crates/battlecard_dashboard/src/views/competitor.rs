use battlecard_client::DealRecord;
use serde::Serialize;

use super::{DealOutcome, DealTally, fold_by};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorRow {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub outcome: DealOutcome,
}

/// Deal outcomes per competitor named in the calls.
pub fn competitor_view(records: &[DealRecord]) -> Vec<CompetitorRow> {
    fold_by::<DealTally, _, _>(
        records,
        |r| r.competitor_name.as_deref(),
        |tally, r| tally.record(r),
    )
    .into_iter()
    .map(|(name, tally)| CompetitorRow {
        id: name.to_string(),
        name: name.to_string(),
        outcome: tally.outcome(),
    })
    .collect()
}

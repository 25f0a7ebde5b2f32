use battlecard_client::DealRecord;
use serde::Serialize;

use super::{DealOutcome, DealTally, fold_by};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRow {
    pub product: String,
    #[serde(flatten)]
    pub outcome: DealOutcome,
}

/// Deal outcomes per product discussed on the call (`heading`).
pub fn product_view(records: &[DealRecord]) -> Vec<ProductRow> {
    fold_by::<DealTally, _, _>(
        records,
        |r| r.product_heading.as_deref(),
        |tally, r| tally.record(r),
    )
    .into_iter()
    .map(|(product, tally)| ProductRow {
        product: product.to_string(),
        outcome: tally.outcome(),
    })
    .collect()
}

use battlecard_client::DealRecord;
use serde::Serialize;

use super::{NO_OBJECTION, fold_by, win_rate};
use crate::stages::{SALES_STAGE_LOST, SALES_STAGE_WON};

/// Outcome counts per objection category.
///
/// Unlike the other views these count mentions, not deals: a deal raising the
/// same objection on two calls contributes twice. The won/lost judgment reads
/// the call-time `sales_stage` against two exact labels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectionCategoryRow {
    pub category: String,
    pub total_deals: usize,
    pub open_deals: usize,
    pub closed_deals: usize,
    pub wins: usize,
    pub losses: usize,
    pub win_rate: u32,
}

#[derive(Debug, Default)]
struct MentionCounts {
    total: usize,
    open: usize,
    closed: usize,
    wins: usize,
    losses: usize,
}

pub fn objection_category_view(records: &[DealRecord]) -> Vec<ObjectionCategoryRow> {
    fold_by::<MentionCounts, _, _>(
        records,
        |r| {
            r.objection_category
                .as_deref()
                .filter(|c| *c != NO_OBJECTION)
        },
        |c, r| {
            c.total += 1;
            match r.sales_stage.as_deref() {
                Some(SALES_STAGE_WON) => {
                    c.wins += 1;
                    c.closed += 1;
                }
                Some(SALES_STAGE_LOST) => {
                    c.losses += 1;
                    c.closed += 1;
                }
                _ => c.open += 1,
            }
        },
    )
    .into_iter()
    .map(|(category, c)| ObjectionCategoryRow {
        category: category.to_string(),
        total_deals: c.total,
        open_deals: c.open,
        closed_deals: c.closed,
        wins: c.wins,
        losses: c.losses,
        win_rate: win_rate(c.wins, c.closed),
    })
    .collect()
}

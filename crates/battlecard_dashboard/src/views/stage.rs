use battlecard_client::DealRecord;
use serde::Serialize;

use super::{DealTally, ObjectionCounts, TOP_OBJECTIONS, fold_by};

/// Funnel conversion for deals grouped by the stage they left.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageRow {
    pub stage: String,
    pub total_deals: usize,
    pub moved_to_closed_deals: usize,
    pub wins: usize,
    pub losses: usize,
    pub win_rate: u32,
    pub top_objections: Vec<String>,
}

#[derive(Debug, Default)]
struct StageStats<'a> {
    deals: DealTally<'a>,
    objections: ObjectionCounts<'a>,
}

pub fn stage_view(records: &[DealRecord]) -> Vec<StageRow> {
    fold_by::<StageStats, _, _>(
        records,
        |r| r.previous_deal_stage.as_deref(),
        |stats, r| {
            stats.deals.record(r);
            stats.objections.record(r);
        },
    )
    .into_iter()
    .map(|(stage, stats)| {
        let outcome = stats.deals.outcome();
        StageRow {
            stage: stage.to_string(),
            total_deals: outcome.total_deals,
            moved_to_closed_deals: outcome.closed_deals,
            wins: outcome.wins,
            losses: outcome.losses,
            win_rate: outcome.win_rate,
            top_objections: stats.objections.top(TOP_OBJECTIONS),
        }
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::test_support::deal;

    fn moved(id: &str, from: &str, to: &str, objection: Option<&str>) -> DealRecord {
        DealRecord {
            previous_deal_stage: Some(from.into()),
            objection_category: objection.map(Into::into),
            ..deal(id, to)
        }
    }

    #[test]
    fn groups_by_previous_stage() {
        let records = vec![
            moved("1", "Proposal", "Closed Won", Some("Price")),
            moved("1", "Proposal", "Closed Won", Some("Price")),
            moved("2", "Proposal", "Closed-Lost", Some("Timing")),
            moved("3", "Proposal", "Finalize", Some("NA")),
            moved("4", "RFP", "Close - Lost", None),
        ];
        let rows = stage_view(&records);
        assert_eq!(rows.len(), 2);

        let proposal = &rows[0];
        assert_eq!(proposal.stage, "Proposal");
        assert_eq!(proposal.total_deals, 3);
        assert_eq!(proposal.moved_to_closed_deals, 2);
        assert_eq!(proposal.wins, 1);
        assert_eq!(proposal.losses, 1);
        assert_eq!(proposal.win_rate, 50);
        assert_eq!(proposal.top_objections, vec!["Price", "Timing"]);

        let rfp = &rows[1];
        assert_eq!(rfp.moved_to_closed_deals, 1);
        assert_eq!(rfp.win_rate, 0);
        assert!(rfp.top_objections.is_empty());
    }

    #[test]
    fn records_without_previous_stage_are_skipped() {
        let records = vec![deal("1", "Closed Won")];
        assert!(stage_view(&records).is_empty());
    }

    #[test]
    fn serializes_moved_to_closed_key() {
        let records = vec![moved("1", "Proposal", "Closed Won", None)];
        let json = serde_json::to_value(stage_view(&records)).unwrap();
        assert_eq!(json[0]["movedToClosedDeals"], 1);
        assert_eq!(json[0]["topObjections"], serde_json::json!([]));
    }
}

//! Chart-ready reshapes of the table views.

use serde::Serialize;

use super::{CompetitorRow, ObjectionCategoryRow, ProductRow, StageRow};

/// Number of stages that get a label on the stage scatter.
pub const LABELLED_STAGES: usize = 5;

/// Smallest bubble size on the stage scatter.
const MIN_STAGE_BUBBLE: usize = 40;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CompetitorPoint {
    pub competitor: String,
    /// win rate
    pub x: u32,
    /// total deals
    pub y: usize,
    /// closed deals
    pub size: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProductPoint {
    pub product: String,
    pub x: u32,
    pub y: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StagePoint {
    pub x: u32,
    pub y: usize,
    /// Empty unless the stage is among the busiest.
    pub name: String,
    pub z: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WordCloudEntry {
    pub text: String,
    pub value: usize,
}

pub fn competitor_scatter(rows: &[CompetitorRow]) -> Vec<CompetitorPoint> {
    rows.iter()
        .map(|r| CompetitorPoint {
            competitor: r.name.clone(),
            x: r.outcome.win_rate,
            y: r.outcome.total_deals,
            size: r.outcome.closed_deals,
        })
        .collect()
}

pub fn product_scatter(rows: &[ProductRow]) -> Vec<ProductPoint> {
    rows.iter()
        .map(|r| ProductPoint {
            product: r.product.clone(),
            x: r.outcome.win_rate,
            y: r.outcome.total_deals,
        })
        .collect()
}

/// Plot stages by win rate against deals moved to closed. Only the
/// [`LABELLED_STAGES`] stages with the most closed deals keep their name.
pub fn stage_scatter(rows: &[StageRow]) -> Vec<StagePoint> {
    let mut ranked: Vec<&StageRow> = rows.iter().collect();
    ranked.sort_by(|a, b| b.moved_to_closed_deals.cmp(&a.moved_to_closed_deals));
    let labelled: Vec<&str> = ranked
        .iter()
        .take(LABELLED_STAGES)
        .map(|r| r.stage.as_str())
        .collect();

    rows.iter()
        .map(|r| StagePoint {
            x: r.win_rate,
            y: r.moved_to_closed_deals,
            name: if labelled.contains(&r.stage.as_str()) {
                r.stage.clone()
            } else {
                String::new()
            },
            z: MIN_STAGE_BUBBLE.max(r.moved_to_closed_deals * 6),
        })
        .collect()
}

/// Word sizes follow objection mention counts.
pub fn objection_word_cloud(rows: &[ObjectionCategoryRow]) -> Vec<WordCloudEntry> {
    rows.iter()
        .map(|r| WordCloudEntry {
            text: r.category.clone(),
            value: r.total_deals,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::DealOutcome;

    fn stage(name: &str, closed: usize, win_rate: u32) -> StageRow {
        StageRow {
            stage: name.into(),
            total_deals: closed,
            moved_to_closed_deals: closed,
            wins: 0,
            losses: 0,
            win_rate,
            top_objections: vec![],
        }
    }

    #[test]
    fn competitor_points_carry_closed_as_size() {
        let rows = vec![CompetitorRow {
            id: "X".into(),
            name: "X".into(),
            outcome: DealOutcome {
                total_deals: 4,
                open_deals: 1,
                closed_deals: 3,
                wins: 2,
                losses: 1,
                win_rate: 67,
            },
        }];
        assert_eq!(
            competitor_scatter(&rows),
            vec![CompetitorPoint {
                competitor: "X".into(),
                x: 67,
                y: 4,
                size: 3
            }]
        );
    }

    #[test]
    fn stage_scatter_labels_top_five_only() {
        let rows = vec![
            stage("a", 1, 0),
            stage("b", 9, 10),
            stage("c", 3, 20),
            stage("d", 8, 30),
            stage("e", 2, 40),
            stage("f", 7, 50),
            stage("g", 5, 60),
        ];
        let points = stage_scatter(&rows);
        let names: Vec<_> = points.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["", "b", "c", "d", "", "f", "g"]);
        assert_eq!(points[0].z, 40);
        assert_eq!(points[1].z, 54);
        assert_eq!(points[1].x, 10);
        assert_eq!(points[1].y, 9);
    }

    #[test]
    fn word_cloud_uses_mention_totals() {
        let rows = vec![ObjectionCategoryRow {
            category: "Price".into(),
            total_deals: 5,
            open_deals: 5,
            closed_deals: 0,
            wins: 0,
            losses: 0,
            win_rate: 0,
        }];
        assert_eq!(
            objection_word_cloud(&rows),
            vec![WordCloudEntry {
                text: "Price".into(),
                value: 5
            }]
        );
    }
}

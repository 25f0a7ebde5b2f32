//! Competitive win-loss analytics over battlecard call records.
//!
//! A [`Dashboard`] holds one immutable snapshot of [`DealRecord`]s for the
//! session. Every filter change calls [`Dashboard::recompute`], which narrows
//! the snapshot with [`filter::filter_records`] and folds the result into the
//! six [`views`] plus their chart projections.

use std::sync::Arc;

use battlecard_client::{BattlecardClient, DealRecord};
use serde::Serialize;

pub mod config;
pub mod distinct;
pub mod error;
pub mod filter;
pub mod stages;
pub mod views;

pub use distinct::{DistinctValues, FilterOption, distinct_values};
pub use error::{DashboardError, DashboardResult};
pub use filter::{DateRange, FilterSpec, Selection, filter_records};

use views::charts::{
    CompetitorPoint, ProductPoint, StagePoint, WordCloudEntry, competitor_scatter,
    objection_word_cloud, product_scatter, stage_scatter,
};
use views::{
    CompetitorRow, ObjectionCategoryRow, ProductRow, RepRow, StageRow, TagSlice,
    competitor_view, objection_category_view, product_view, rep_view, stage_view, tag_view,
};

/// Everything the presentation layer renders for one filter state.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardViews {
    pub competitors: Vec<CompetitorRow>,
    pub competitor_scatter: Vec<CompetitorPoint>,
    pub products: Vec<ProductRow>,
    pub product_scatter: Vec<ProductPoint>,
    pub reps: Vec<RepRow>,
    pub objection_categories: Vec<ObjectionCategoryRow>,
    pub objection_word_cloud: Vec<WordCloudEntry>,
    pub stages: Vec<StageRow>,
    pub stage_scatter: Vec<StagePoint>,
    pub tags: Vec<TagSlice>,
    /// Filtered, unaggregated rows for the drill-down table.
    pub records: Vec<DealRecord>,
}

impl DashboardViews {
    /// Run every view over already-filtered records.
    pub fn from_filtered(records: Vec<DealRecord>) -> Self {
        let competitors = competitor_view(&records);
        let products = product_view(&records);
        let objection_categories = objection_category_view(&records);
        let stages = stage_view(&records);
        Self {
            competitor_scatter: competitor_scatter(&competitors),
            product_scatter: product_scatter(&products),
            objection_word_cloud: objection_word_cloud(&objection_categories),
            stage_scatter: stage_scatter(&stages),
            reps: rep_view(&records),
            tags: tag_view(&records),
            competitors,
            products,
            objection_categories,
            stages,
            records,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// One session's record snapshot and the filter options derived from it.
#[derive(Clone, Debug)]
pub struct Dashboard {
    records: Arc<[DealRecord]>,
    options: DistinctValues,
}

impl Dashboard {
    pub fn new(records: Vec<DealRecord>) -> Self {
        let options = distinct_values(&records);
        Self {
            records: records.into(),
            options,
        }
    }

    /// Fetch the snapshot once. There is no retry; a failed load needs a new
    /// call.
    pub async fn load<C>(client: &C) -> DashboardResult<Self>
    where
        C: BattlecardClient + ?Sized,
    {
        let records = client.fetch_records().await?;
        tracing::info!(records = records.len(), "battlecard snapshot loaded");
        Ok(Self::new(records))
    }

    pub fn records(&self) -> &[DealRecord] {
        &self.records
    }

    pub fn options(&self) -> &DistinctValues {
        &self.options
    }

    /// Filter the snapshot and rebuild every view. Pure with respect to the
    /// snapshot: identical specs give structurally identical results.
    pub fn recompute(&self, spec: &FilterSpec) -> DashboardViews {
        let filtered = filter_records(&self.records, spec);
        metrics::counter!("dashboard_recompute_total").increment(1);
        tracing::debug!(
            snapshot = self.records.len(),
            filtered = filtered.len(),
            "recomputing dashboard views"
        );
        DashboardViews::from_filtered(filtered)
    }

    /// Render the filter options, the active filter and its views as one
    /// pretty-printed JSON document.
    pub fn render_json(
        &self,
        spec: &FilterSpec,
        views: &DashboardViews,
    ) -> DashboardResult<String> {
        let report = Report {
            filter_options: &self.options,
            filter: spec,
            views,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    filter_options: &'a DistinctValues,
    filter: &'a FilterSpec,
    views: &'a DashboardViews,
}

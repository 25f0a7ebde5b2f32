//! Aggregated dashboard views.
//!
//! Every view is a single left fold over the filtered records into a keyed
//! accumulator, followed by a projection into serializable rows. Groups come
//! out in the order their key is first seen.
//!
//! Deal outcomes are counted per deal (sets of `deal_id`), objection and tag
//! frequencies per mention. The objection-category view is the exception that
//! counts outcomes per mention as well.
//!
//! # Modules
//!
//! - [`competitor`]: win/loss by competitor
//! - [`product`]: win/loss by discussed product
//! - [`rep`]: win/loss and top objections by rep
//! - [`objection`]: per-mention outcomes by objection category
//! - [`stage`]: funnel conversion by previous deal stage
//! - [`tag`]: share of deals carrying each positioning tag
//! - [`charts`]: scatter and word-cloud projections of the above

pub mod charts;
pub mod competitor;
pub mod objection;
pub mod product;
pub mod rep;
pub mod stage;
pub mod tag;

use std::collections::{HashMap, HashSet};

use battlecard_client::DealRecord;
use serde::Serialize;

use crate::stages::{StageClass, classify};

pub use competitor::{CompetitorRow, competitor_view};
pub use objection::{ObjectionCategoryRow, objection_category_view};
pub use product::{ProductRow, product_view};
pub use rep::{RepRow, rep_view};
pub use stage::{StageRow, stage_view};
pub use tag::{TagSlice, tag_view};

/// Objection label meaning "no objection raised".
pub const NO_OBJECTION: &str = "NA";

/// How many objections the rep and stage views report.
pub const TOP_OBJECTIONS: usize = 3;

/// `round(100 * part / whole)` with round-half-up, or 0 when `whole` is 0.
pub fn rounded_percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((200 * part + whole) / (2 * whole)) as u32
}

/// Share of closed deals that were won.
pub fn win_rate(wins: usize, closed: usize) -> u32 {
    rounded_percent(wins, closed)
}

/// Insertion-ordered map from group key to accumulator.
pub(crate) struct Groups<'a, S> {
    index: HashMap<&'a str, usize>,
    entries: Vec<(&'a str, S)>,
}

impl<S> Default for Groups<'_, S> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<'a, S: Default> Groups<'a, S> {
    pub(crate) fn entry(&mut self, key: &'a str) -> &mut S {
        let idx = *self.index.entry(key).or_insert_with(|| {
            self.entries.push((key, S::default()));
            self.entries.len() - 1
        });
        &mut self.entries[idx].1
    }

    pub(crate) fn into_entries(self) -> Vec<(&'a str, S)> {
        self.entries
    }
}

/// Group records by a key, skipping records where the key is absent or empty.
pub(crate) fn fold_by<'a, S, K, F>(
    records: &'a [DealRecord],
    key: K,
    mut step: F,
) -> Vec<(&'a str, S)>
where
    S: Default,
    K: Fn(&'a DealRecord) -> Option<&'a str>,
    F: FnMut(&mut S, &'a DealRecord),
{
    let mut groups = Groups::default();
    for rec in records {
        let Some(k) = key(rec).filter(|k| !k.is_empty()) else {
            continue;
        };
        step(groups.entry(k), rec);
    }
    groups.into_entries()
}

/// Deduplicated deal-id sets for one group.
#[derive(Debug, Default)]
pub(crate) struct DealTally<'a> {
    total: HashSet<&'a str>,
    open: HashSet<&'a str>,
    closed: HashSet<&'a str>,
    wins: HashSet<&'a str>,
    losses: HashSet<&'a str>,
}

impl<'a> DealTally<'a> {
    /// Add the record's deal to the total and to whichever outcome sets its
    /// `deal_stage` belongs to. Re-adding a deal is a no-op.
    pub(crate) fn record(&mut self, rec: &'a DealRecord) {
        let id = rec.deal_id.as_str();
        self.total.insert(id);
        let class = classify(rec.deal_stage.as_deref());
        if class.is_closed() {
            self.closed.insert(id);
        }
        match class {
            StageClass::Open => {
                self.open.insert(id);
            }
            StageClass::Won => {
                self.wins.insert(id);
            }
            StageClass::Lost => {
                self.losses.insert(id);
            }
            StageClass::Unclassified => {}
        }
    }

    pub(crate) fn outcome(&self) -> DealOutcome {
        DealOutcome {
            total_deals: self.total.len(),
            open_deals: self.open.len(),
            closed_deals: self.closed.len(),
            wins: self.wins.len(),
            losses: self.losses.len(),
            win_rate: win_rate(self.wins.len(), self.closed.len()),
        }
    }
}

/// Deal counts shared by every outcome row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DealOutcome {
    pub total_deals: usize,
    pub open_deals: usize,
    pub closed_deals: usize,
    pub wins: usize,
    pub losses: usize,
    pub win_rate: u32,
}

/// Objection mention counts in first-seen order.
#[derive(Debug, Default)]
pub(crate) struct ObjectionCounts<'a> {
    counts: Groups<'a, usize>,
}

impl<'a> ObjectionCounts<'a> {
    /// Count the record's objection unless it is missing or `"NA"`.
    pub(crate) fn record(&mut self, rec: &'a DealRecord) {
        if let Some(cat) = rec
            .objection_category
            .as_deref()
            .filter(|c| !c.is_empty() && *c != NO_OBJECTION)
        {
            *self.counts.entry(cat) += 1;
        }
    }

    /// Most frequent categories first; ties keep first-seen order.
    pub(crate) fn top(self, n: usize) -> Vec<String> {
        let mut entries = self.counts.into_entries();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
            .into_iter()
            .take(n)
            .map(|(cat, _)| cat.to_string())
            .collect()
    }
}

impl<S> std::fmt::Debug for Groups<'_, S>
where
    S: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}

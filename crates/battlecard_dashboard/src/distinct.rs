//! Selectable filter options, scanned once from the unfiltered snapshot.

use battlecard_client::DealRecord;
use serde::{Serialize, Serializer};

/// An entry of a filter dropdown. `All` always comes first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterOption {
    All,
    Value(String),
}

impl FilterOption {
    pub fn label(&self) -> &str {
        match self {
            FilterOption::All => "All",
            FilterOption::Value(v) => v,
        }
    }
}

/// Options serialize as their display label. The sentinel and a real value
/// spelled "All" therefore render identically; keep the typed
/// [`FilterOption`] (or the first-position rule) when telling them apart.
impl Serialize for FilterOption {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistinctValues {
    pub product_lines: Vec<FilterOption>,
    pub competitors: Vec<FilterOption>,
    pub sales_stages: Vec<FilterOption>,
    pub products: Vec<FilterOption>,
    pub objection_categories: Vec<FilterOption>,
}

fn push_unique(options: &mut Vec<FilterOption>, value: Option<&str>) {
    let Some(v) = value.filter(|v| !v.is_empty()) else {
        return;
    };
    if !options
        .iter()
        .any(|o| matches!(o, FilterOption::Value(existing) if existing == v))
    {
        options.push(FilterOption::Value(v.to_string()));
    }
}

/// Collect the distinct non-empty values of every filterable dimension, in
/// first-seen order. Sorting is left to callers.
pub fn distinct_values(records: &[DealRecord]) -> DistinctValues {
    let mut out = DistinctValues {
        product_lines: vec![FilterOption::All],
        competitors: vec![FilterOption::All],
        sales_stages: vec![FilterOption::All],
        products: vec![FilterOption::All],
        objection_categories: vec![FilterOption::All],
    };
    for rec in records {
        push_unique(&mut out.product_lines, rec.product_line.as_deref());
        push_unique(&mut out.competitors, rec.competitor_name.as_deref());
        push_unique(&mut out.sales_stages, rec.sales_stage.as_deref());
        push_unique(&mut out.products, rec.product_heading.as_deref());
        push_unique(
            &mut out.objection_categories,
            rec.objection_category.as_deref(),
        );
    }
    out
}

//! Record filtering by call date and category selections.

use battlecard_client::DealRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A per-dimension selection: everything, or an explicit set of values.
///
/// `Only` keeps values in the order they were chosen and never holds the same
/// value twice.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "values", rename_all = "lowercase")]
pub enum Selection {
    #[default]
    All,
    Only(Vec<String>),
}

impl Selection {
    pub fn only<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for v in values {
            let v = v.into();
            if !out.contains(&v) {
                out.push(v);
            }
        }
        Selection::Only(out)
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// An absent field never matches an explicit selection, and an empty
    /// `Only` matches nothing.
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(values) => value.is_some_and(|v| values.iter().any(|s| s == v)),
        }
    }

    /// Toggle a value the way the filter bar does: picking from `All` starts a
    /// new selection, picking a selected value removes it (falling back to
    /// `All` once nothing is left), anything else is appended.
    pub fn choose(&mut self, value: impl Into<String>) {
        let value = value.into();
        match self {
            Selection::All => *self = Selection::Only(vec![value]),
            Selection::Only(values) => {
                if let Some(pos) = values.iter().position(|v| *v == value) {
                    values.remove(pos);
                    if values.is_empty() {
                        *self = Selection::All;
                    }
                } else {
                    values.push(value);
                }
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Selection::All;
    }
}

/// Inclusive range of calendar days.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    pub fn contains(&self, date: Option<NaiveDate>) -> bool {
        date.is_some_and(|d| d >= self.from && d <= self.to)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    pub date_range: DateRange,
    #[serde(default)]
    pub product_line: Selection,
    #[serde(default)]
    pub competitor: Selection,
    #[serde(default)]
    pub sales_stage: Selection,
    #[serde(default)]
    pub product: Selection,
    #[serde(default)]
    pub objection_category: Selection,
}

impl FilterSpec {
    /// A spec that only constrains the call date.
    pub fn for_range(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            date_range: DateRange::new(from, to),
            product_line: Selection::All,
            competitor: Selection::All,
            sales_stage: Selection::All,
            product: Selection::All,
            objection_category: Selection::All,
        }
    }

    pub fn matches(&self, rec: &DealRecord) -> bool {
        self.date_range.contains(rec.call_date)
            && self.product_line.matches(rec.product_line.as_deref())
            && self.competitor.matches(rec.competitor_name.as_deref())
            && self.sales_stage.matches(rec.sales_stage.as_deref())
            && self.product.matches(rec.product_heading.as_deref())
            && self
                .objection_category
                .matches(rec.objection_category.as_deref())
    }
}

/// Keep the records that pass every dimension of `spec`, in input order.
pub fn filter_records(records: &[DealRecord], spec: &FilterSpec) -> Vec<DealRecord> {
    records.iter().filter(|r| spec.matches(r)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rec(id: &str, competitor: Option<&str>, date: NaiveDate) -> DealRecord {
        DealRecord {
            deal_id: id.into(),
            competitor_name: competitor.map(Into::into),
            call_date: Some(date),
            ..Default::default()
        }
    }

    #[test]
    fn all_selection_passes_missing_fields() {
        let spec = FilterSpec::for_range(day(2024, 1, 1), day(2024, 12, 31));
        let records = vec![
            rec("1", Some("X"), day(2024, 3, 1)),
            rec("2", None, day(2024, 4, 1)),
        ];
        assert_eq!(filter_records(&records, &spec).len(), 2);
    }

    #[test]
    fn explicit_selection_excludes_missing_and_other_values() {
        let mut spec = FilterSpec::for_range(day(2024, 1, 1), day(2024, 12, 31));
        spec.competitor = Selection::only(["X"]);
        let records = vec![
            rec("1", Some("X"), day(2024, 3, 1)),
            rec("2", None, day(2024, 4, 1)),
            rec("3", Some("Y"), day(2024, 5, 1)),
        ];
        let out = filter_records(&records, &spec);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].deal_id, "1");
    }

    #[test]
    fn date_range_is_inclusive_and_requires_a_date() {
        let spec = FilterSpec::for_range(day(2024, 3, 1), day(2024, 3, 31));
        let mut undated = rec("4", Some("X"), day(2024, 3, 5));
        undated.call_date = None;
        let records = vec![
            rec("1", Some("X"), day(2024, 3, 1)),
            rec("2", Some("X"), day(2024, 3, 31)),
            rec("3", Some("X"), day(2024, 4, 1)),
            undated,
        ];
        let ids: Vec<_> = filter_records(&records, &spec)
            .into_iter()
            .map(|r| r.deal_id)
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn empty_only_selection_excludes_everything() {
        let mut spec = FilterSpec::for_range(day(2024, 1, 1), day(2024, 12, 31));
        spec.competitor = Selection::Only(vec![]);
        let records = vec![rec("1", Some("X"), day(2024, 3, 1))];
        assert!(filter_records(&records, &spec).is_empty());
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let spec = FilterSpec::for_range(day(2024, 1, 1), day(2024, 12, 31));
        assert!(filter_records(&[], &spec).is_empty());
    }

    #[test]
    fn literal_all_value_is_not_the_sentinel() {
        let sel = Selection::only(["All"]);
        assert!(!sel.is_all());
        assert!(sel.matches(Some("All")));
        assert!(!sel.matches(Some("X")));
    }

    #[test]
    fn choose_accumulates_and_falls_back_to_all() {
        let mut sel = Selection::All;
        sel.choose("A");
        assert_eq!(sel, Selection::Only(vec!["A".into()]));
        sel.choose("B");
        assert_eq!(sel, Selection::Only(vec!["A".into(), "B".into()]));
        sel.choose("A");
        assert_eq!(sel, Selection::Only(vec!["B".into()]));
        sel.choose("B");
        assert_eq!(sel, Selection::All);
    }

    #[test]
    fn reset_clears_selection() {
        let mut sel = Selection::only(["A", "B", "A"]);
        assert_eq!(sel, Selection::Only(vec!["A".into(), "B".into()]));
        sel.reset();
        assert!(sel.is_all());
    }

    #[test]
    fn every_dimension_is_checked() {
        let mut r = rec("1", Some("X"), day(2024, 3, 1));
        r.product_line = Some("Platform".into());
        r.sales_stage = Some("Proposal".into());
        r.product_heading = Some("Analytics".into());
        r.objection_category = Some("Price".into());

        let mut spec = FilterSpec::for_range(day(2024, 1, 1), day(2024, 12, 31));
        spec.product_line = Selection::only(["Platform"]);
        spec.sales_stage = Selection::only(["Proposal"]);
        spec.product = Selection::only(["Analytics"]);
        spec.objection_category = Selection::only(["Price"]);
        assert!(spec.matches(&r));

        spec.product = Selection::only(["Other"]);
        assert!(!spec.matches(&r));
    }
}

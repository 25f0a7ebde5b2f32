//! Initial filter for the command-line run, read from the environment.

use chrono::NaiveDate;

use crate::error::{DashboardError, DashboardResult};
use crate::filter::{FilterSpec, Selection};

/// Earliest call date shown by default.
pub fn default_from() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or(NaiveDate::MIN)
}

pub struct FilterConfig;

impl FilterConfig {
    pub fn from_env(today: NaiveDate) -> DashboardResult<FilterSpec> {
        Self::from_env_with(|k| std::env::var(k).ok(), today)
    }

    /// Build a [`FilterSpec`] from `BATTLECARD_*` values supplied by `get`.
    ///
    /// Dates default to 2024-01-01 through `today`. Category lists are
    /// comma-separated; a missing or blank list, or one containing `All`,
    /// leaves that dimension unfiltered.
    pub fn from_env_with<F>(mut get: F, today: NaiveDate) -> DashboardResult<FilterSpec>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let from =
            parse_date(get("BATTLECARD_FROM"), "BATTLECARD_FROM")?.unwrap_or_else(default_from);
        let to = parse_date(get("BATTLECARD_TO"), "BATTLECARD_TO")?.unwrap_or(today);
        if from > to {
            return Err(DashboardError::Config(format!(
                "BATTLECARD_FROM ({from}) is after BATTLECARD_TO ({to})"
            )));
        }

        let mut spec = FilterSpec::for_range(from, to);
        spec.product_line = parse_selection(get("BATTLECARD_PRODUCT_LINES"));
        spec.competitor = parse_selection(get("BATTLECARD_COMPETITORS"));
        spec.sales_stage = parse_selection(get("BATTLECARD_SALES_STAGES"));
        spec.product = parse_selection(get("BATTLECARD_PRODUCTS"));
        spec.objection_category = parse_selection(get("BATTLECARD_OBJECTION_CATEGORIES"));
        Ok(spec)
    }
}

fn parse_date(raw: Option<String>, key: &str) -> DashboardResult<Option<NaiveDate>> {
    let Some(raw) = raw.filter(|v| !v.trim().is_empty()) else {
        return Ok(None);
    };
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map(Some)
        .map_err(|e| DashboardError::Config(format!("{key}: invalid date {raw:?}: {e}")))
}

fn parse_selection(raw: Option<String>) -> Selection {
    let Some(raw) = raw else {
        return Selection::All;
    };
    let values: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .collect();
    if values.is_empty() || values.contains(&"All") {
        Selection::All
    } else {
        Selection::only(values)
    }
}

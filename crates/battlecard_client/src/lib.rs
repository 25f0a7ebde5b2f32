//! Battlecard record source: the flat deal/call rows behind the win-loss dashboard
//! and a reqwest-based client that fetches them.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

pub mod config;
pub mod http_client;
pub mod utils;

#[derive(Debug, Error)]
pub enum BattlecardError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("configuration error: {0}")]
    Config(String),
}

/// One mention of a deal aspect inside a single call.
///
/// A deal shows up in many records (one per call, topic or objection), so
/// anything counting deals must deduplicate on [`DealRecord::deal_id`].
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct DealRecord {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub deal_id: String,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub deal_stage: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub previous_deal_stage: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub sales_stage: Option<String>,
    #[serde(rename = "Rep_name", default, deserialize_with = "deserialize_non_empty")]
    pub rep_name: Option<String>,
    #[serde(
        rename = "Competitor_name",
        default,
        deserialize_with = "deserialize_non_empty"
    )]
    pub competitor_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub objection_category: Option<String>,
    #[serde(
        rename = "funnel_by_product",
        default,
        deserialize_with = "deserialize_non_empty"
    )]
    pub product_line: Option<String>,
    #[serde(rename = "heading", default, deserialize_with = "deserialize_non_empty")]
    pub product_heading: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub tag: Option<String>,
    #[serde(default, deserialize_with = "deserialize_call_date")]
    pub call_date: Option<NaiveDate>,

    // Drill-down passthrough; never aggregated.
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub deal_title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub call_title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub excerpt: Option<String>,
    #[serde(
        rename = "Rep_handling",
        default,
        deserialize_with = "deserialize_non_empty"
    )]
    pub rep_handling: Option<String>,
    #[serde(rename = "Nature", default, deserialize_with = "deserialize_non_empty")]
    pub nature: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub call_link: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub detail: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub timestamp: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub prospect_company: Option<String>,
}

/// Strings pass through, anything else keeps its JSON text form, and a
/// missing or `null` id becomes the empty id.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

/// Empty strings, `null`, `false`, zero and missing keys all collapse to
/// `None`. Other non-string values are kept in their JSON text form.
fn deserialize_non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) if s.is_empty() => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Bool(false)) => None,
        Some(serde_json::Value::Number(n)) if n.as_f64() == Some(0.0) => None,
        Some(other) => Some(other.to_string()),
    })
}

fn deserialize_call_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => utils::parse_call_date(&s),
        _ => None,
    })
}

/// Decode a raw record array row by row. Rows that are not JSON objects are
/// skipped with a warning instead of failing the whole snapshot.
pub fn decode_records(rows: Vec<serde_json::Value>) -> Vec<DealRecord> {
    let total = rows.len();
    let records: Vec<DealRecord> = rows
        .into_iter()
        .enumerate()
        .filter_map(|(idx, row)| match serde_json::from_value::<DealRecord>(row) {
            Ok(rec) => Some(rec),
            Err(e) => {
                tracing::warn!(row = idx, error = %e, "skipping malformed battlecard row");
                None
            }
        })
        .collect();
    if records.len() < total {
        tracing::debug!(kept = records.len(), total, "dropped malformed rows");
    }
    records
}

#[async_trait]
pub trait BattlecardClient: Send + Sync + 'static {
    /// Fetch the full record snapshot in one request.
    async fn fetch_records(&self) -> Result<Vec<DealRecord>, BattlecardError>;
}

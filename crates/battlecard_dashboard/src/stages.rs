//! Deal-stage vocabulary.
//!
//! The CRM stage labels are fixed for the lifetime of the process. The three
//! lists are disjoint; a label found in none of them is "unclassified" and only
//! counts towards totals.

/// Stages that keep a deal in progress.
pub const OPEN_STAGES: &[&str] = &[
    "Qualify (RSD/VP Qualification)",
    "Renewal Identified",
    "Finalize",
    "Partner Sign Up In Progress",
    "Non POC Deal",
    "RFP",
    "Outcome Definition",
    "Technical Win / Negotiation (if not yet secured)",
    "POC Objective Defined",
    "MQL/Prospecting",
    "POC In-Progress",
    "RFI",
    "Sale In Progress",
    "Review in Progress",
    "Pilot In-Progress",
    "Proposal",
    "Credit Hold",
];

/// Stages that count a deal as closed-won.
pub const WIN_STAGES: &[&str] = &[
    "Close - Won",
    "Closed-Won",
    "Closed Won",
    "Technical Win / Negotiation",
    "Renewal Accepted/Validated by Customer",
    "Signed Partner",
    "SP/MSP Business Awarded",
];

/// Stages that count a deal as closed-lost.
pub const LOSS_STAGES: &[&str] = &[
    "Close - Lost",
    "Closed-Lost",
    "Closed - Invalid",
    "Closed Contingent- T&B",
    "Closed Contingent",
];

/// Literal `sales_stage` labels used by the objection-category view. These are
/// matched exactly and intentionally do not go through [`classify`].
pub const SALES_STAGE_WON: &str = "Closed Won";
pub const SALES_STAGE_LOST: &str = "Closed-Lost";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageClass {
    Open,
    Won,
    Lost,
    Unclassified,
}

impl StageClass {
    pub fn is_closed(self) -> bool {
        matches!(self, StageClass::Won | StageClass::Lost)
    }
}

/// Classify a `deal_stage` label. Missing labels are unclassified.
pub fn classify(stage: Option<&str>) -> StageClass {
    let Some(stage) = stage else {
        return StageClass::Unclassified;
    };
    if OPEN_STAGES.contains(&stage) {
        StageClass::Open
    } else if WIN_STAGES.contains(&stage) {
        StageClass::Won
    } else if LOSS_STAGES.contains(&stage) {
        StageClass::Lost
    } else {
        StageClass::Unclassified
    }
}

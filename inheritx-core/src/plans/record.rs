//! Plan records.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::InheritxError;

/// Display format of transfer dates, e.g. `Jan 19, 2026`.
pub const TRANSFER_DATE_FORMAT: &str = "%b %d, %Y";

/// Lifecycle status of a plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlanStatus {
    /// Created, not yet active.
    Pending,
    /// Active.
    Active,
    /// Temporarily halted.
    Paused,
    /// Assets transferred.
    Executed,
    /// Cancelled by the owner.
    Cancelled,
}

impl PlanStatus {
    /// Every status.
    pub const ALL: [PlanStatus; 5] = [
        Self::Pending,
        Self::Active,
        Self::Paused,
        Self::Executed,
        Self::Cancelled,
    ];

    /// Uppercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Active => "ACTIVE",
            Self::Paused => "PAUSED",
            Self::Executed => "EXECUTED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanStatus {
    type Err = InheritxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| InheritxError::validation(format!("unknown plan status: {}", s)))
    }
}

/// One inheritance plan row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRecord {
    /// Row id.
    pub id: u32,
    /// Plan name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Owner label; `–` when unknown.
    pub owner: String,
    /// Amount with asset symbol, kept as display text.
    pub amount: String,
    /// Number of beneficiaries.
    pub beneficiary_count: u32,
    /// Scheduled transfer date.
    #[serde(with = "transfer_date")]
    pub transfer_date: NaiveDate,
    /// Current status.
    pub status: PlanStatus,
}

impl PlanRecord {
    /// Transfer date in display format.
    pub fn transfer_date_display(&self) -> String {
        self.transfer_date.format(TRANSFER_DATE_FORMAT).to_string()
    }
}

mod transfer_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::TRANSFER_DATE_FORMAT;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(TRANSFER_DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, TRANSFER_DATE_FORMAT).map_err(de::Error::custom)
    }
}

/// Only used in `const` items, so an impossible date fails the build.
const fn demo_date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid demo plan date"),
    }
}

const TESTNET_DATE: NaiveDate = demo_date(2026, 1, 19);
const SOMETHING_DATE: NaiveDate = demo_date(2928, 10, 10);
const WEDDING_DATE: NaiveDate = demo_date(2027, 1, 10);

fn plan(
    id: u32,
    name: &str,
    description: &str,
    amount: &str,
    beneficiary_count: u32,
    transfer_date: NaiveDate,
    status: PlanStatus,
) -> PlanRecord {
    PlanRecord {
        id,
        name: name.to_string(),
        description: description.to_string(),
        owner: "–".to_string(),
        amount: amount.to_string(),
        beneficiary_count,
        transfer_date,
        status,
    }
}

/// The demonstration plan list, in display order.
pub fn demo_plans() -> Vec<PlanRecord> {
    const WEDDING: &str = "Wedding Fund";
    const WEDDING_DESC: &str = "Fund my daughters plan";

    vec![
        plan(
            1,
            "Testnet testing",
            "Just testing out inheritx dapp",
            "0.000000001 USDC",
            1,
            TESTNET_DATE,
            PlanStatus::Pending,
        ),
        plan(
            2,
            "Testing something",
            "Hello soemthing nnew",
            "0.0001 ETH",
            2,
            SOMETHING_DATE,
            PlanStatus::Active,
        ),
        plan(3, WEDDING, WEDDING_DESC, "0.0001 ETH", 2, WEDDING_DATE, PlanStatus::Paused),
        plan(4, WEDDING, WEDDING_DESC, "0.0001 ETH", 2, WEDDING_DATE, PlanStatus::Executed),
        plan(5, WEDDING, WEDDING_DESC, "0.0001 ETH", 2, WEDDING_DATE, PlanStatus::Cancelled),
    ]
}

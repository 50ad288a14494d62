//! Test fixtures and data builders.

use chrono::NaiveDate;

use crate::plans::{PlanRecord, PlanStatus};

/// Collection of commonly used test values.
pub struct TestFixtures;

impl TestFixtures {
    /// A Stellar account address that displays as `GABC...WXYZ`.
    pub const ADDRESS: &'static str = "GABCDEFGHIJKLMNOPQRSTUVWXYZ234567ABCDEFGHIJKLMNOPQRSWXYZ";

    /// Another valid-looking Stellar account address.
    pub const OTHER_ADDRESS: &'static str =
        "GBRPYHIL2CI3FNQ4BXLFMNDLFJUNPU2HY3ZMFSHONUCEOASW7QC7OX2H";

    /// Admin email used across tests.
    pub const ADMIN_EMAIL: &'static str = "admin@inheritx.com";
}

/// Build a plan record with neutral defaults for everything but name and status.
pub fn plan_named(id: u32, name: &str, description: &str, status: PlanStatus) -> PlanRecord {
    PlanRecord {
        id,
        name: name.to_string(),
        description: description.to_string(),
        owner: "–".to_string(),
        amount: "1 XLM".to_string(),
        beneficiary_count: 1,
        transfer_date: NaiveDate::MIN,
        status,
    }
}

//! Inheritance plan list shown on `/admin/all-plans`.
//!
//! Plans are static demonstration data; [`PlanListView`] filters them by
//! status tab and a free-text search over name and description.

mod record;
mod view;

pub use record::{demo_plans, PlanRecord, PlanStatus, TRANSFER_DATE_FORMAT};
pub use view::{filter_plans, PlanListView, PlanQuery, PlanTab};

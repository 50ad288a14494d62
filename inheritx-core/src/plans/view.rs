//! Tab and search filtering over plan records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::record::{demo_plans, PlanRecord, PlanStatus};
use crate::InheritxError;

/// Status tab above the plan table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanTab {
    /// No status filter. Pending plans only show here.
    #[default]
    All,
    /// `ACTIVE` plans.
    Active,
    /// `PAUSED` plans.
    Paused,
    /// `EXECUTED` plans.
    Executed,
    /// `CANCELLED` plans.
    Cancelled,
}

impl PlanTab {
    /// Tabs in display order.
    pub const ALL: [PlanTab; 5] = [
        Self::All,
        Self::Active,
        Self::Paused,
        Self::Executed,
        Self::Cancelled,
    ];

    /// Tab label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Paused => "Paused",
            Self::Executed => "Executed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Status selected by this tab; `None` for `All`.
    pub fn status(&self) -> Option<PlanStatus> {
        match self {
            Self::All => None,
            Self::Active => Some(PlanStatus::Active),
            Self::Paused => Some(PlanStatus::Paused),
            Self::Executed => Some(PlanStatus::Executed),
            Self::Cancelled => Some(PlanStatus::Cancelled),
        }
    }

    /// Whether a plan with `status` belongs under this tab.
    pub fn includes(&self, status: PlanStatus) -> bool {
        self.status().map_or(true, |s| s == status)
    }
}

impl fmt::Display for PlanTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PlanTab {
    type Err = InheritxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InheritxError::validation(format!("unknown plan tab: {}", s)))
    }
}

/// Active tab plus search text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanQuery {
    /// Selected tab.
    pub tab: PlanTab,
    /// Case-insensitive substring of name or description; empty matches all.
    pub search: String,
}

impl PlanQuery {
    /// Create a query.
    pub fn new(tab: PlanTab, search: impl Into<String>) -> Self {
        Self {
            tab,
            search: search.into(),
        }
    }

    /// Whether `record` passes both filters.
    pub fn matches(&self, record: &PlanRecord) -> bool {
        if !self.tab.includes(record.status) {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        record.name.to_lowercase().contains(&needle)
            || record.description.to_lowercase().contains(&needle)
    }
}

/// Records matching `query`, in their original order.
pub fn filter_plans<'a>(plans: &'a [PlanRecord], query: &PlanQuery) -> Vec<&'a PlanRecord> {
    plans.iter().filter(|p| query.matches(p)).collect()
}

/// The all-plans table: a fixed record list and the current query.
#[derive(Clone, Debug)]
pub struct PlanListView {
    plans: Vec<PlanRecord>,
    query: PlanQuery,
}

impl PlanListView {
    /// View over `plans` with tab `All` and no search.
    pub fn new(plans: Vec<PlanRecord>) -> Self {
        Self {
            plans,
            query: PlanQuery::default(),
        }
    }

    /// View over the demonstration plans.
    pub fn demo() -> Self {
        Self::new(demo_plans())
    }

    pub fn tab(&self) -> PlanTab {
        self.query.tab
    }

    pub fn search(&self) -> &str {
        &self.query.search
    }

    pub fn query(&self) -> &PlanQuery {
        &self.query
    }

    /// All records, unfiltered.
    pub fn plans(&self) -> &[PlanRecord] {
        &self.plans
    }

    pub fn set_tab(&mut self, tab: PlanTab) {
        self.query.tab = tab;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
    }

    /// Records to render.
    pub fn visible(&self) -> Vec<&PlanRecord> {
        filter_plans(&self.plans, &self.query)
    }

    /// Whether the "no plans found" placeholder should show.
    pub fn is_empty_state(&self) -> bool {
        !self.plans.iter().any(|p| self.query.matches(p))
    }
}

impl Default for PlanListView {
    fn default() -> Self {
        Self::demo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(view: &PlanListView) -> Vec<(&str, PlanStatus)> {
        view.visible()
            .into_iter()
            .map(|p| (p.name.as_str(), p.status))
            .collect()
    }

    #[test]
    fn test_default_shows_everything() {
        let view = PlanListView::demo();
        assert_eq!(view.tab(), PlanTab::All);
        assert_eq!(view.search(), "");
        assert_eq!(view.visible().len(), 5);
        assert!(!view.is_empty_state());
    }

    #[test]
    fn test_active_tab() {
        let mut view = PlanListView::demo();
        view.set_tab(PlanTab::Active);
        assert_eq!(names(&view), vec![("Testing something", PlanStatus::Active)]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut view = PlanListView::demo();
        for needle in ["wedding", "WEDDING"] {
            view.set_search(needle);
            assert_eq!(
                names(&view),
                vec![
                    ("Wedding Fund", PlanStatus::Paused),
                    ("Wedding Fund", PlanStatus::Executed),
                    ("Wedding Fund", PlanStatus::Cancelled),
                ]
            );
        }
    }

    #[test]
    fn test_search_matches_description() {
        let mut view = PlanListView::demo();
        view.set_search("DAPP");
        assert_eq!(names(&view), vec![("Testnet testing", PlanStatus::Pending)]);
    }

    #[test]
    fn test_pending_only_under_all() {
        let mut view = PlanListView::demo();
        for tab in PlanTab::ALL.into_iter().skip(1) {
            view.set_tab(tab);
            assert!(view.visible().iter().all(|p| p.status != PlanStatus::Pending));
        }
    }

    #[test]
    fn test_empty_state() {
        let mut view = PlanListView::demo();
        view.set_tab(PlanTab::Executed);
        view.set_search("testnet");
        assert!(view.visible().is_empty());
        assert!(view.is_empty_state());
    }

    #[test]
    fn test_tab_parse() {
        assert_eq!("cancelled".parse::<PlanTab>().unwrap(), PlanTab::Cancelled);
        assert_eq!(" Active ".parse::<PlanTab>().unwrap(), PlanTab::Active);
        assert!("pending".parse::<PlanTab>().is_err());
        assert_eq!(PlanTab::Paused.to_string(), "Paused");
    }
}

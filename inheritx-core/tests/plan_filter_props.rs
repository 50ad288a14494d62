//! Property-based tests for the plan tab/search filter.

use inheritx_core::plans::{demo_plans, filter_plans, PlanListView, PlanQuery, PlanStatus, PlanTab};
use inheritx_core::test_utils::plan_named;
use proptest::prelude::*;

fn any_tab() -> impl Strategy<Value = PlanTab> {
    prop::sample::select(PlanTab::ALL.to_vec())
}

fn any_status() -> impl Strategy<Value = PlanStatus> {
    prop::sample::select(PlanStatus::ALL.to_vec())
}

/// The filter rule stated directly over strings.
fn expected(tab: PlanTab, search: &str, name: &str, description: &str, status: PlanStatus) -> bool {
    let tab_ok = tab == PlanTab::All || status.as_str() == tab.label().to_uppercase();
    let search_ok = search.is_empty()
        || name.to_lowercase().contains(&search.to_lowercase())
        || description.to_lowercase().contains(&search.to_lowercase());
    tab_ok && search_ok
}

proptest! {
    /// Every demo record is shown exactly when the rule says so.
    #[test]
    fn demo_filter_follows_rule(tab in any_tab(), search in ".{0,12}") {
        let plans = demo_plans();
        let query = PlanQuery::new(tab, search.clone());
        let visible: Vec<u32> = filter_plans(&plans, &query).iter().map(|p| p.id).collect();
        let wanted: Vec<u32> = plans
            .iter()
            .filter(|p| expected(tab, &search, &p.name, &p.description, p.status))
            .map(|p| p.id)
            .collect();
        prop_assert_eq!(visible, wanted);
    }

    /// Arbitrary records, including mixed case, follow the same rule.
    #[test]
    fn generated_records_follow_rule(
        tab in any_tab(),
        search in "[a-zA-Z ]{0,4}",
        records in prop::collection::vec(("[a-zA-Z ]{0,10}", "[a-zA-Z ]{0,16}", any_status()), 0..12),
    ) {
        let plans: Vec<_> = records
            .iter()
            .enumerate()
            .map(|(i, (name, desc, status))| plan_named(i as u32, name, desc, *status))
            .collect();

        let mut view = PlanListView::new(plans.clone());
        view.set_tab(tab);
        view.set_search(search.clone());

        let shown: Vec<u32> = view.visible().iter().map(|p| p.id).collect();
        let wanted: Vec<u32> = plans
            .iter()
            .filter(|p| expected(tab, &search, &p.name, &p.description, p.status))
            .map(|p| p.id)
            .collect();
        prop_assert_eq!(view.is_empty_state(), wanted.is_empty());
        prop_assert_eq!(shown, wanted);
    }

    /// An empty search never hides anything the tab allows.
    #[test]
    fn empty_search_is_tab_only(tab in any_tab()) {
        let plans = demo_plans();
        let visible = filter_plans(&plans, &PlanQuery::new(tab, ""));
        let by_tab = plans.iter().filter(|p| tab.includes(p.status)).count();
        prop_assert_eq!(visible.len(), by_tab);
    }

    /// Narrowing the search never adds records.
    #[test]
    fn longer_search_is_subset(tab in any_tab(), prefix in "[a-z]{0,3}", extra in "[a-z]{1,3}") {
        let plans = demo_plans();
        let short = filter_plans(&plans, &PlanQuery::new(tab, prefix.clone()));
        let long = filter_plans(&plans, &PlanQuery::new(tab, format!("{}{}", prefix, extra)));
        prop_assert!(long.iter().all(|p| short.iter().any(|q| q.id == p.id)));
    }
}

#[test]
fn pending_shows_only_under_all() {
    let plans = demo_plans();
    for tab in PlanTab::ALL {
        let has_pending = filter_plans(&plans, &PlanQuery::new(tab, ""))
            .iter()
            .any(|p| p.status == PlanStatus::Pending);
        assert_eq!(has_pending, tab == PlanTab::All);
    }
}

//! Plans command - the all-plans table

use anyhow::Result;
use colored::Colorize;
use inheritx_core::plans::{PlanListView, PlanRecord, PlanTab};

use crate::ui;

/// One table row, without color.
pub fn format_row(plan: &PlanRecord) -> String {
    format!(
        "{:>3}  {:<20} {:<18} {:>2}  {:<13}",
        plan.id,
        plan.name,
        plan.amount,
        plan.beneficiary_count,
        plan.transfer_date_display(),
    )
}

fn tab_strip(active: PlanTab) -> String {
    PlanTab::ALL
        .iter()
        .map(|tab| {
            if *tab == active {
                format!("[{}]", tab.label()).cyan().bold().to_string()
            } else {
                tab.label().dimmed().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn run(tab: &str, search: &str, json: bool) -> Result<()> {
    let mut view = PlanListView::demo();
    view.set_tab(tab.parse()?);
    view.set_search(search);

    if json {
        ui::json(&serde_json::to_value(view.visible())?);
        return Ok(());
    }

    ui::header("All Plans");
    println!("{}", tab_strip(view.tab()));
    if !view.search().is_empty() {
        ui::key_value("Search", view.search());
    }
    ui::separator();

    if view.is_empty_state() {
        ui::info("No plans found");
        return Ok(());
    }

    for plan in view.visible() {
        println!("{} {}", format_row(plan), ui::status_badge(plan.status));
        println!("       {}", plan.description.dimmed());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use inheritx_core::plans::demo_plans;

    #[test]
    fn test_format_row() {
        let plans = demo_plans();
        let row = format_row(&plans[1]);
        assert!(row.contains("Testing something"));
        assert!(row.contains("0.0001 ETH"));
        assert!(row.contains("Oct 10, 2928"));
    }

    #[test]
    fn test_run_accepts_lowercase_tab() {
        assert!(run("paused", "wedding", true).is_ok());
    }

    #[test]
    fn test_run_rejects_unknown_tab() {
        let err = run("Pending", "", true).unwrap_err();
        assert!(err.to_string().contains("unknown plan tab"));
    }
}

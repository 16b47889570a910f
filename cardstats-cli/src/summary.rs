use cardstats_ingest::ScanOutput;
use cardstats_report::{date_range, Dashboard, Panel, PanelKind};
use std::fmt::Write;

/// Plain-text rendering of the dashboard for the terminal.
pub fn render(scan: &ScanOutput, dash: &Dashboard) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# Card activity ({})\n", dash.meal_plan_type);
    if let Some((from, to)) = date_range(scan) {
        let _ = writeln!(
            out,
            "Period: {} to {}\n",
            from.format("%Y-%m-%d"),
            to.format("%Y-%m-%d")
        );
    }

    for panel in &dash.panels {
        render_panel(&mut out, panel);
    }

    if !scan.skipped.is_empty() {
        let _ = writeln!(out, "## Skipped rows\n");
        for s in &scan.skipped {
            let _ = writeln!(out, "- row {} ({}): {}", s.index, s.section, s.error);
        }
    }

    out
}

fn render_panel(out: &mut String, panel: &Panel) {
    let _ = writeln!(out, "## {}\n", panel.title);
    let total = match panel.kind {
        PanelKind::MealSwipes => panel.total.to_string(),
        _ => format!("${:.2}", panel.total),
    };
    let _ = writeln!(out, "{}: {}\n", panel.kind.total_caption(), total);

    let shares = panel.pie.percentages();
    for ((label, value), pct) in panel.pie.labels.iter().zip(&panel.pie.values).zip(shares) {
        let _ = writeln!(out, "- {label}: {value} ({pct}%)");
    }

    if !panel.bar.labels.is_empty() {
        let _ = writeln!(out, "\nPer week:");
        for (week, total) in panel.bar.labels.iter().zip(panel.bar.column_totals()) {
            let _ = writeln!(out, "- {week}: {total}");
        }
    }
    let _ = writeln!(out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardstats_core::{ColorStreams, MoneyTransaction};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_render_lists_totals_and_weeks() {
        let at = NaiveDate::from_ymd_opt(2023, 1, 9)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let scan = ScanOutput {
            debit: vec![MoneyTransaction::new(at, dec!(-5.00), dec!(45.00), "Crossroads")],
            ..ScanOutput::default()
        };
        let dash = Dashboard::build(&scan, &mut ColorStreams::seeded(1));
        let text = render(&scan, &dash);

        assert!(text.contains("Total Debit Spent: $5.00"));
        assert!(text.contains("- Crossroads: 5 (100%)"));
        assert!(text.contains("- Sun Jan 08 2023 to Sat Jan 14 2023: 5"));
        assert!(text.contains("Total Swipes Used: 0"));
    }
}

//! Plain-text rendering of a [`SalesReport`].

use std::fmt::Write as _;

use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Table};

use sales_analytics::report::SalesReport;
use sales_analytics::types::{PeriodSummary, SegmentSummary};

fn amount(v: f64) -> String {
    format!("{v:.2}")
}

fn percent(v: f64) -> String {
    format!("{v:.1}%")
}

fn right(s: impl ToString) -> Cell {
    Cell::new(s).set_alignment(CellAlignment::Right)
}

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL).set_header(header.to_vec());
    table
}

fn overview_table(report: &SalesReport) -> Table {
    let o = &report.overview;
    let mut table = new_table(&["Metric", "Value"]);
    table
        .add_row(vec![Cell::new("Total amount"), right(amount(o.total_amount))])
        .add_row(vec![Cell::new("Total quantity"), right(o.total_quantity)])
        .add_row(vec![Cell::new("Average order"), right(amount(o.average_order_amount))])
        .add_row(vec![Cell::new("Orders"), right(o.record_count)]);
    table
}

fn segment_table(label: &str, rows: &[SegmentSummary]) -> Table {
    let mut table = new_table(&[label, "Quantity", "Amount", "Average", "Orders", "Share"]);
    for s in rows {
        table.add_row(vec![
            Cell::new(&s.key),
            right(s.total_quantity),
            right(amount(s.total_amount)),
            right(amount(s.average_amount)),
            right(s.record_count),
            right(percent(s.market_share)),
        ]);
    }
    table
}

fn period_table(rows: &[PeriodSummary]) -> Table {
    let mut table = new_table(&["Date", "Quantity", "Amount", "Growth"]);
    for p in rows {
        table.add_row(vec![
            Cell::new(&p.key),
            right(p.total_quantity),
            right(amount(p.total_amount)),
            right(p.growth),
        ]);
    }
    table
}

fn trend_block(report: &SalesReport, out: &mut String) -> std::fmt::Result {
    let t = &report.trend;
    match t.overall_growth.map(|g| g.to_string()) {
        // Label follows the displayed sign, so "+0.0%" never appears.
        Some(g) if g.starts_with('+') => writeln!(out, "Overall growth: {g}")?,
        Some(g) => writeln!(out, "Overall change: {g}")?,
        None => writeln!(out, "Overall change: - (fewer than two periods)")?,
    }
    if let Some(best) = &t.best_period {
        writeln!(out, "Best period:    {} ({})", best.key, amount(best.total_amount))?;
    }
    if let Some(worst) = &t.worst_period {
        writeln!(out, "Worst period:   {} ({})", worst.key, amount(worst.total_amount))?;
    }
    Ok(())
}

/// Render every section of `report` as text tables.
pub fn render_report(report: &SalesReport) -> Result<String, std::fmt::Error> {
    let mut out = String::new();

    writeln!(out, "== Overview ==")?;
    writeln!(out, "{}", overview_table(report))?;
    if report.skipped_rows > 0 {
        writeln!(out, "Skipped {} malformed row(s)", report.skipped_rows)?;
    }

    writeln!(out, "\n== By product ==")?;
    writeln!(out, "{}", segment_table("Product", &report.by_product))?;
    if let Some(top) = report.top_product() {
        writeln!(out, "Top product: {} ({})", top.key, amount(top.total_amount))?;
    }

    writeln!(out, "\n== By region ==")?;
    writeln!(out, "{}", segment_table("Region", &report.by_region))?;
    if let Some(top) = report.top_region() {
        writeln!(out, "Top region: {} ({})", top.key, amount(top.total_amount))?;
    }

    writeln!(out, "\n== By date ==")?;
    writeln!(out, "{}", period_table(&report.by_date))?;
    trend_block(report, &mut out)?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::render_report;
    use sales_analytics::report::SalesReport;
    use sales_analytics::types::SalesRecord;

    #[test]
    fn renders_every_section_with_sentinels() {
        let records = vec![
            SalesRecord::new("2024-01-01", "Widget", 10, 100.0, "North"),
            SalesRecord::new("2024-01-01", "Gadget", 5, 50.0, "South"),
            SalesRecord::new("2024-01-02", "Widget", 20, 200.0, "North"),
        ];
        let text = render_report(&SalesReport::from_records(&records, 2)).unwrap();

        assert!(text.contains("Skipped 2 malformed row(s)"));
        assert!(text.contains("Top product: Widget (300.00)"));
        assert!(text.contains("Top region: North (300.00)"));
        assert!(text.contains("+33.3%"));
        assert!(text.contains("85.7%"));
        assert!(text.contains("Overall growth: +33.3%"));
        assert!(text.contains("Best period:    2024-01-02 (200.00)"));
        assert!(text.contains("Worst period:   2024-01-01 (150.00)"));
    }

    #[test]
    fn tiny_overall_growth_is_an_unsigned_change() {
        let records = vec![
            SalesRecord::new("2024-01-01", "Widget", 1, 10_000.0, "North"),
            SalesRecord::new("2024-01-02", "Widget", 1, 10_004.0, "North"),
        ];
        let text = render_report(&SalesReport::from_records(&records, 0)).unwrap();

        assert!(text.contains("Overall change: 0.0%"));
        assert!(!text.contains("+0.0%"));
    }
}

use bast_core::form::fill::FillReport;
use bast_core::highlight::PageHighlights;

pub fn print_fill(report: &FillReport) {
    for (i, form) in report.forms.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("--- Row {}: {} ---\n", form.row_number, form.output_name);

        let width = form
            .assignments
            .iter()
            .map(|a| a.cell.len())
            .max()
            .unwrap_or(4);
        for a in &form.assignments {
            println!("  {:<width$}  {}", a.cell, a.value, width = width);
        }
    }

    if !report.failures.is_empty() {
        println!("\nSkipped records:");
        for f in &report.failures {
            println!("  row {}: {}", f.row_number, f.reason);
        }
    }
}

pub fn print_highlights(pages: &[PageHighlights]) {
    let total: usize = pages.iter().map(|p| p.match_count).sum();
    if total == 0 {
        println!("No matches.");
        return;
    }

    println!(
        "  {:<5} {:<4} {:>9} {:>9} {:>9} {:>9}",
        "Page", "Row", "x_min", "y_min", "x_max", "y_max"
    );
    println!("  {}", "-".repeat(50));

    for page in pages {
        for r in &page.regions {
            let row = if r.row_offset == 0 {
                "hit".to_string()
            } else {
                format!("+{}", r.row_offset)
            };
            println!(
                "  {:<5} {:<4} {:>9.2} {:>9.2} {:>9.2} {:>9.2}",
                r.page_number, row, r.bbox.x_min, r.bbox.y_min, r.bbox.x_max, r.bbox.y_max
            );
        }
    }

    let regions: usize = pages.iter().map(|p| p.regions.len()).sum();
    println!("\n  {} match(es), {} region(s)", total, regions);
}

//! Terminal rendering of the view model.

use pricer_core::{CompRowView, ResultView};

pub fn print_result(result: &ResultView) {
    println!("{}", result.title);
    println!(
        "${:.2}\u{2013}${:.2} ({})",
        result.low, result.high, result.confidence
    );

    if !result.rationale.is_empty() {
        println!();
        println!("Why this range:");
        for (index, line) in result.rationale.iter().enumerate() {
            println!("  {}. {}", index + 1, line);
        }
    }

    if !result.notes.is_empty() {
        println!();
        println!("Notes:");
        for line in &result.notes {
            println!("  - {line}");
        }
    }

    if !result.keywords.is_empty() {
        println!();
        println!("Suggested keywords: {}", result.keywords.join(", "));
    }

    if !result.comps.is_empty() {
        println!();
        println!("Comparable listings:");
        print!("{}", comps_table(&result.comps));
    }

    if let Some(image_url) = &result.image_url {
        println!();
        println!("Uploaded image: {image_url}");
    }
    println!();
    println!("Took {} ms", result.duration_ms);
}

/// Plain-text table: Title | Price | Status | Date | Link, one row per comp.
pub fn comps_table(rows: &[CompRowView]) -> String {
    let headers = ["Title", "Price", "Status", "Date", "Link"];
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        let cells = row_cells(row);
        for (width, cell) in widths.iter_mut().zip(cells.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &headers.map(String::from), &widths);
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &separator, &widths);
    for row in rows {
        push_row(&mut out, &row_cells(row), &widths);
    }
    out
}

fn row_cells(row: &CompRowView) -> [String; 5] {
    [
        row.title.clone(),
        row.price_label.clone(),
        row.status_label.to_string(),
        row.date_label.clone(),
        row.url.clone(),
    ]
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let mut first = true;
    for (cell, width) in cells.iter().zip(widths.iter()) {
        if !first {
            out.push_str("  ");
        }
        first = false;
        out.push_str(cell);
        let pad = width.saturating_sub(cell.chars().count());
        out.push_str(&" ".repeat(pad));
    }
    // Trailing spaces on the last column are noise; trim them.
    while out.ends_with(' ') {
        out.pop();
    }
    out.push('\n');
}

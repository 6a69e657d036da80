//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.
//!
//! ## Factors
//!
//! ```text
//! Columns: 12 (24 tracks)
//! Factors: 2, 3, 4, 6, 12
//! ```
//!
//! ## Selectors
//!
//! ```text
//! Equal-column (5)
//!     .gs--ec2 > *     span 12
//!     .gs--ec3 > *     span 8
//! Column-span (12)
//!     .gs__cs1         span 2
//! ```
//!
//! ## Build
//!
//! ```text
//! Stylesheet → dist/grid--gs-12.css (4211 bytes)
//! Demo → dist/index.html
//! Generated 5 equal-column and 12 column-span selectors
//! ```

use crate::factorize::FactorSet;
use crate::pipeline::GeneratedGrid;
use crate::selectors::COLUMNS_MULTIPLIER;
use std::path::Path;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format a selector line with the span aligned in a column.
fn selector_line(selector: &str, span: u32, width: usize) -> String {
    format!("{}{:<width$} span {}", indent(1), selector, span)
}

pub fn format_factors(columns: u32, factors: &FactorSet) -> Vec<String> {
    let listed = if factors.is_empty() {
        "none".to_string()
    } else {
        factors
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };
    vec![
        format!(
            "Columns: {} ({} tracks)",
            columns,
            u64::from(columns) * u64::from(COLUMNS_MULTIPLIER)
        ),
        format!("Factors: {listed}"),
    ]
}

pub fn print_factors(columns: u32, factors: &FactorSet) {
    for line in format_factors(columns, factors) {
        println!("{}", line);
    }
}

pub fn format_selectors(grid: &GeneratedGrid) -> Vec<String> {
    let ec: Vec<(String, u32)> = grid
        .equal_column
        .iter()
        .map(|s| (format!("{} > *", s.selector), s.span))
        .collect();
    let cs: Vec<(String, u32)> = grid
        .column_span
        .iter()
        .map(|s| (s.selector.clone(), s.span))
        .collect();
    let width = ec
        .iter()
        .chain(cs.iter())
        .map(|(selector, _)| selector.len())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(ec.len() + cs.len() + 2);
    lines.push(format!("Equal-column ({})", ec.len()));
    lines.extend(ec.iter().map(|(s, span)| selector_line(s, *span, width)));
    lines.push(format!("Column-span ({})", cs.len()));
    lines.extend(cs.iter().map(|(s, span)| selector_line(s, *span, width)));
    lines
}

pub fn print_selectors(grid: &GeneratedGrid) {
    for line in format_selectors(grid) {
        println!("{}", line);
    }
}

pub fn format_build_output(grid: &GeneratedGrid, css_path: &Path, html_path: &Path) -> Vec<String> {
    vec![
        format!(
            "Stylesheet → {} ({} bytes)",
            css_path.display(),
            grid.css.len()
        ),
        format!("Demo → {}", html_path.display()),
        format!(
            "Generated {} equal-column and {} column-span selectors",
            grid.equal_column.len(),
            grid.column_span.len()
        ),
    ]
}

pub fn print_build_output(grid: &GeneratedGrid, css_path: &Path, html_path: &Path) {
    for line in format_build_output(grid, css_path, html_path) {
        println!("{}", line);
    }
}

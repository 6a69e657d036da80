//! Stylesheet composition.
//!
//! The generated CSS is mobile-first and layered through custom properties.
//! Each tier only overrides the variables that change; the rules that consume
//! them are declared once.
//!
//! ```text
//! .gs { ... }                       base: tracks, gaps, full-width span
//! :where(.gs--ec2, ...) > *,
//! .gs__cs1, ... { grid-column }     single consumer of the span variable
//! @media (tablet)  { ... }          gaps, half-width span, __ac / __ae
//! @media (desktop) { ... }          gaps, per-selector span values
//! ```
//!
//! Breakpoints and gaps are interpolated verbatim. Nothing here parses or
//! validates CSS; a malformed breakpoint simply produces a media query the
//! browser will ignore.

use crate::config::GridParameters;
use crate::selectors::{
    COLUMNS_MULTIPLIER, ColumnSpanSelector, EqualColumnSelector, Selector,
    column_span_selectors, equal_column_selectors,
};

/// Public columns every cell spans at mobile sizes.
pub const MOBILE_COLUMNS: u32 = 1;
/// Public columns every cell spans at tablet sizes.
pub const TABLET_COLUMNS: u32 = 2;
/// Selectors per line in the combined span rule.
const SELECTORS_PER_LINE: usize = 3;

/// Render a comma-separated selector list.
///
/// At most `max_per_line` selectors go on one line. When the list spans more
/// than one line, `indent_multiline` indents every line by two spaces and
/// `newline_wrap` puts the whole list on its own lines, which reads well
/// inside `:where(...)`.
///
/// ```text
/// selector_list(5 selectors, 3, true, true)
///
/// \n  .a, .b, .c,\n  .d, .e\n
/// ```
pub fn selector_list<S: Selector>(
    selectors: &[S],
    max_per_line: usize,
    indent_multiline: bool,
    newline_wrap: bool,
) -> String {
    if selectors.is_empty() {
        return String::new();
    }

    let max_per_line = max_per_line.max(1);
    let multiline = selectors.len().div_ceil(max_per_line) > 1;
    let indent = if multiline && indent_multiline { "  " } else { "" };
    let wrap = multiline && newline_wrap;
    let mut list = String::new();

    for (index, selector) in selectors.iter().enumerate() {
        if index == 0 {
            if wrap {
                list.push('\n');
            }
            list.push_str(indent);
        } else if index % max_per_line == 0 {
            list.push_str(",\n");
            list.push_str(indent);
        } else {
            list.push_str(", ");
        }
        list.push_str(selector.selector());
    }

    if wrap {
        list.push('\n');
    }
    list
}

/// Compose the full stylesheet for a parameter set and its factors.
///
/// `factors` is normally `FactorSet::of(params.columns)`; it is taken as an
/// argument so callers that already factorized don't pay for it twice.
pub fn compose_stylesheet(params: &GridParameters, factors: &[u32]) -> String {
    let ns = params.namespace.as_str();
    let columns_actual = COLUMNS_MULTIPLIER * params.columns;
    let ec = equal_column_selectors(columns_actual, factors, ns);
    let cs = column_span_selectors(params.columns, COLUMNS_MULTIPLIER, ns);

    [
        format!("{}{}", header(params.columns), base_block(params)),
        span_rule(ns, &ec, &cs),
        tablet_block(params),
        desktop_block(params, &ec, &cs),
    ]
    .join("\n")
}

fn header(columns: u32) -> String {
    format!(
        r#"/**
 * Grid System
 *
 * This file contains a grid system using {columns} columns.
 */
"#
    )
}

fn base_block(params: &GridParameters) -> String {
    format!(
        r#".{ns} {{
  --{ns}-grid-row-gap: {row_gap};
  --{ns}-grid-columns: {columns};
  --{ns}-grid-columns-actual: calc({multiplier} * var(--{ns}-grid-columns));
  /* Everything has {mobile} column at mobile sizes. */
  --{ns}-grid-column-span: calc(var(--{ns}-grid-columns-actual) / {mobile});

  display: grid;
  grid-auto-rows: auto;
  grid-column-gap: var(--{ns}-grid-column-gap);
  grid-row-gap: var(--{ns}-grid-row-gap);
  grid-template-columns: repeat(var(--{ns}-grid-columns-actual), 1fr);
}}
"#,
        ns = params.namespace,
        row_gap = params.row_gap_mobile,
        columns = params.columns,
        multiplier = COLUMNS_MULTIPLIER,
        mobile = MOBILE_COLUMNS,
    )
}

/// The one rule that turns the span variable into `grid-column`.
///
/// Equal-column children sit inside `:where()` so the desktop overrides on
/// `.ns--ecN > *` win regardless of source order. With no factors (a
/// one-column grid) the `:where()` line is left out entirely.
fn span_rule(ns: &str, ec: &[EqualColumnSelector], cs: &[ColumnSpanSelector]) -> String {
    let mut rule = String::new();
    if !ec.is_empty() {
        rule.push_str(&format!(
            ":where({}) > *,\n",
            selector_list(ec, SELECTORS_PER_LINE, true, true)
        ));
    }
    rule.push_str(&format!(
        "{} {{\n  grid-column: span var(--{ns}-grid-column-span);\n}}\n",
        selector_list(cs, SELECTORS_PER_LINE, false, false)
    ));
    rule
}

fn tablet_block(params: &GridParameters) -> String {
    format!(
        r#"@media screen and ({breakpoint}) {{
  .{ns} {{
    --{ns}-grid-column-gap: {column_gap};
    --{ns}-grid-row-gap: {row_gap};
    /* Everything has {tablet} columns at tablet sizes. */
    --{ns}-grid-column-span: calc(var(--{ns}-grid-columns-actual) / {tablet});
  }}

  /* Align-center cells */
  .{ns}__ac {{
    --{ns}-grid-column-start: calc(
      1 + (var(--{ns}-grid-columns-actual) - var(--{ns}-grid-column-span)) / 2
    );
  }}

  /* Align-end cells */
  .{ns}__ae {{
    --{ns}-grid-column-start: calc(
      1 + var(--{ns}-grid-columns-actual) - var(--{ns}-grid-column-span)
    );
  }}

  /* Align-center, align-end common */
  .{ns}__ac,
  .{ns}__ae {{
    grid-column: var(--{ns}-grid-column-start) / span var(--{ns}-grid-column-span);
  }}
}}
"#,
        ns = params.namespace,
        breakpoint = params.breakpoint_tablet,
        column_gap = params.column_gap_tablet,
        row_gap = params.row_gap_tablet,
        tablet = TABLET_COLUMNS,
    )
}

fn desktop_block(
    params: &GridParameters,
    ec: &[EqualColumnSelector],
    cs: &[ColumnSpanSelector],
) -> String {
    let ns = params.namespace.as_str();
    let mut block = format!(
        r#"@media screen and ({breakpoint}) {{
  .{ns} {{
    --{ns}-grid-column-gap: {column_gap};
    --{ns}-grid-row-gap: {row_gap};
  }}

  /* Equal-column cells */
"#,
        breakpoint = params.breakpoint_desktop,
        column_gap = params.column_gap_desktop,
        row_gap = params.row_gap_desktop,
    );

    for s in ec {
        block.push_str(&format!(
            "  {} > * {{ --{ns}-grid-column-span: {}; }}\n",
            s.selector, s.span
        ));
    }

    block.push_str("\n  /* Column-spanning cells */\n");
    for s in cs {
        block.push_str(&format!(
            "  {} {{ --{ns}-grid-column-span: {}; }}\n",
            s.selector, s.span
        ));
    }

    block.push_str("}\n");
    block
}

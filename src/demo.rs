//! HTML demo page.
//!
//! Renders a single static page that documents a generated grid and proves it
//! works: the generated stylesheet is embedded in the page, and the demo rows
//! below use exactly the class names the stylesheet defines.
//!
//! ## Sections
//!
//! - **Configuration**: the resolved parameters, plus a shareable query link
//! - **Generated CSS**: the stylesheet source and a download link
//! - **Equal-width cells**: one `.ns.ns--ecN` row per factor, N cells each
//! - **Column-spanning cells**: for every span `i`, a row pairing
//!   `.ns__cs{i}` with its complement `.ns__cs{columns - i}`
//! - **Centered cells**: `.ns__cs{i}.ns__ac` for every span short of full width
//!
//! Cells are labelled with fractions (`<sup>3</sup> / <sub>12</sub>`) of the
//! public column count.
//!
//! Uses [maud](https://maud.lambda.xyz/) like the rest of the HTML output:
//! everything interpolated is escaped, except the two `<style>` bodies.

use crate::config::GridParameters;
use crate::pipeline::{CSS_MIME_TYPE, FileSink, GeneratedGrid, StylesheetSink};
use crate::selectors::{cs_class, ec_class};
use crate::template::{MOBILE_COLUMNS, TABLET_COLUMNS};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

const DEMO_CSS: &str = include_str!("../static/demo.css");

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Files written by [`write_site`].
#[derive(Debug, Clone)]
pub struct SiteOutput {
    pub stylesheet: PathBuf,
    pub page: PathBuf,
}

/// Write the downloadable stylesheet and the demo page into `output_dir`.
///
/// ```text
/// dist/
/// ├── grid--gs-12.css
/// └── index.html
/// ```
pub fn write_site(grid: &GeneratedGrid, output_dir: &Path) -> Result<SiteOutput, BuildError> {
    fs::create_dir_all(output_dir)?;

    let stylesheet = output_dir.join(grid.download_filename());
    FileSink::new(&stylesheet).set_text(&grid.css)?;

    let page = output_dir.join("index.html");
    fs::write(&page, render_demo_page(grid).into_string())?;
    info!(path = %page.display(), "wrote demo page");

    Ok(SiteOutput { stylesheet, page })
}

/// Render the complete demo document for a generated grid.
pub fn render_demo_page(grid: &GeneratedGrid) -> Markup {
    let params = &grid.parameters;
    let title = format!("Grid system: {} columns", params.columns);

    let content = html! {
        main.demo {
            h1 { (title) }
            p.demo__intro {
                "Namespace "
                code { (params.namespace) }
                ", " (params.columns) " public columns on "
                (grid.columns_actual) " grid tracks."
            }
            (settings_summary(params))
            (css_listing(grid))
            (equal_column_cells(&params.namespace, &grid.factors))
            (column_span_cells(&params.namespace, params.columns))
            (centered_cells(&params.namespace, params.columns))
        }
    };

    base_document(&title, &grid.css, content)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, grid_css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (style_text(DEMO_CSS)) }
                style id="grid-system-styles" { (style_text(grid_css)) }
            }
            body {
                (content)
            }
        }
    }
}

/// Raw CSS for a `<style>` element.
///
/// Style contents aren't HTML-escaped, so the only thing that can break out
/// is a literal `</`. `<\/` means the same thing to CSS.
fn style_text(css: &str) -> PreEscaped<String> {
    PreEscaped(css.replace("</", "<\\/"))
}

fn fraction(numerator: u32, denominator: u32) -> Markup {
    html! {
        sup { (numerator) } " / " sub { (denominator) }
    }
}

fn fieldset(name: &str, legend: &str, rows: &[(&str, String)]) -> Markup {
    html! {
        fieldset class={ "demo__fieldset demo__fieldset--" (name) } {
            legend { (legend) }
            dl.demo__fieldset-inner {
                @for (label, value) in rows {
                    dt { (label) }
                    dd { (value) }
                }
            }
        }
    }
}

fn settings_summary(params: &GridParameters) -> Markup {
    html! {
        section.demo__section {
            h2 { "Grid configuration" }
            div.demo__settings {
                (fieldset("columns", "Columns", &[
                    ("Grid columns mobile", MOBILE_COLUMNS.to_string()),
                    ("Grid columns tablet", TABLET_COLUMNS.to_string()),
                    ("Grid columns desktop", params.columns.to_string()),
                ]))
                (fieldset("breakpoints", "Breakpoints", &[
                    ("Breakpoint tablet", params.breakpoint_tablet.clone()),
                    ("Breakpoint desktop", params.breakpoint_desktop.clone()),
                ]))
                (fieldset("gaps", "Gaps", &[
                    ("Column gap tablet", params.column_gap_tablet.clone()),
                    ("Column gap desktop", params.column_gap_desktop.clone()),
                    ("Row gap mobile", params.row_gap_mobile.clone()),
                    ("Row gap tablet", params.row_gap_tablet.clone()),
                    ("Row gap desktop", params.row_gap_desktop.clone()),
                ]))
            }
            p {
                a.demo__share href={ "?" (params.to_query_string()) } {
                    "Link to this configuration"
                }
            }
        }
    }
}

fn css_listing(grid: &GeneratedGrid) -> Markup {
    let filename = grid.download_filename();
    html! {
        section.demo__section {
            h2 { "Generated CSS" }
            p {
                a.demo__download href=(filename) download=(filename) type=(CSS_MIME_TYPE) {
                    "Download code"
                }
            }
            pre.demo__css.language-css {
                code.language-css { (grid.css) }
            }
        }
    }
}

/// One row per factor; each row holds `factor` equal cells.
pub fn equal_column_cells(namespace: &str, factors: &[u32]) -> Markup {
    html! {
        section.demo__section {
            h2 { "Equal-width cells" }
            @if factors.is_empty() {
                p { "A single-column grid has no equal-width layouts." }
            } @else {
                div.demo__cells tabindex="0" {
                    @for &factor in factors {
                        div class={ (namespace) " " (ec_class(namespace, factor)) } {
                            @for i in 1..=factor {
                                div { (fraction(i, factor)) }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One row per span, paired with the span that fills the rest of the row.
pub fn column_span_cells(namespace: &str, columns: u32) -> Markup {
    html! {
        section.demo__section {
            h2 { "Column-spanning cells" }
            div.demo__cells tabindex="0" {
                @for span in 1..=columns {
                    @let rest = columns - span;
                    div class=(namespace) {
                        div class=(cs_class(namespace, span)) { (fraction(span, columns)) }
                        @if rest > 0 {
                            div class=(cs_class(namespace, rest)) { (fraction(rest, columns)) }
                        }
                    }
                }
            }
        }
    }
}

/// One centered cell per span narrower than the full row.
pub fn centered_cells(namespace: &str, columns: u32) -> Markup {
    html! {
        section.demo__section {
            h2 { "Centered cells" }
            @if columns > 1 {
                div.demo__cells tabindex="0" {
                    @for span in 1..columns {
                        div class=(namespace) {
                            div class={ (cs_class(namespace, span)) " " (namespace) "__ac" } {
                                (fraction(span, columns))
                            }
                        }
                    }
                }
            } @else {
                p { "A single-column grid has nothing to center." }
            }
        }
    }
}

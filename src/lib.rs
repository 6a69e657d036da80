//! # grid-css
//!
//! Generates a responsive CSS grid system from a handful of parameters, plus a
//! static HTML page that documents and demonstrates it.
//!
//! # Architecture: One Pure Pipeline
//!
//! ```text
//! GridParameters ──► factorize ──► FactorSet
//!        │                             │
//!        └──────────► selectors ◄──────┘   ec (--ecN) and cs (__csN) families
//!                         │
//!                     template  ──► CSS text ──► StylesheetSink / demo page
//! ```
//!
//! Every stage is a pure function of its inputs. The stylesheet is always
//! regenerated in full; there is no incremental patching and no hidden state,
//! so the same parameters always produce byte-identical CSS.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`factorize`] | Divisors (> 1) of the column count |
//! | [`selectors`] | Equal-column and column-span selector families |
//! | [`template`] | Stylesheet composition and selector-list formatting |
//! | [`config`] | Parameters: defaults, `grid.toml` layering, query strings |
//! | [`pipeline`] | Parameters → generated grid; stylesheet sinks and the host |
//! | [`demo`] | HTML demo page rendered with Maud |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Doubled Tracks
//!
//! The container declares twice as many tracks as public columns
//! ([`selectors::COLUMNS_MULTIPLIER`]). A cell spanning 3 of 12 columns spans
//! 6 of 24 tracks. The extra resolution lets `__ac` center an odd span inside
//! an even row without fractional track indices.
//!
//! ## Cascading Custom Properties
//!
//! Only one rule sets `grid-column` for cells. Each responsive tier overrides
//! `--ns-grid-column-span` and the gap variables, and the cascade does the
//! rest. Equal-column children are grouped under `:where()` so their zero
//! specificity lets the per-selector desktop values apply cleanly.
//!
//! ## Strings Are Trusted
//!
//! Breakpoints and gaps are raw CSS copied into the output. The only checked
//! parameter is the column count; a bad media condition yields CSS the browser
//! ignores, which is visible in the demo page.

pub mod config;
pub mod demo;
pub mod factorize;
pub mod output;
pub mod pipeline;
pub mod selectors;
pub mod template;

#[cfg(test)]
pub(crate) mod test_helpers;

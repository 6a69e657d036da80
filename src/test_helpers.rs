//! Shared test utilities for the grid-css test suite.
//!
//! ```text
//! use crate::test_helpers::*;
//!
//! let css = stylesheet_for(12, "gs");
//! let tablet = rule_block(&css, "@media screen and (width >= 48rem) {");
//! assert!(tablet.contains(".gs__ac {"));
//! ```

use crate::config::GridParameters;
use crate::factorize::FactorSet;
use crate::template::compose_stylesheet;

/// Default parameters with a given column count and namespace.
pub fn params_with(columns: u32, namespace: &str) -> GridParameters {
    GridParameters {
        columns,
        namespace: namespace.to_string(),
        ..Default::default()
    }
}

/// Compose the stylesheet for default parameters with `columns` / `namespace`.
pub fn stylesheet_for(columns: u32, namespace: &str) -> String {
    let params = params_with(columns, namespace);
    compose_stylesheet(&params, &FactorSet::of(columns))
}

/// Extract a rule block starting at the first line equal to `opening`
/// (trailing `{` included) through its matching closing brace.
///
/// Panics if the block isn't found, which fails the calling test with the
/// missing header in the message.
pub fn rule_block<'a>(css: &'a str, opening: &str) -> &'a str {
    let start = css
        .lines()
        .scan(0, |offset, line| {
            let here = *offset;
            *offset += line.len() + 1;
            Some((here, line))
        })
        .find(|(_, line)| *line == opening)
        .map(|(offset, _)| offset)
        .unwrap_or_else(|| panic!("no rule block opening with {opening:?}"));

    let mut depth = 0usize;
    for (i, c) in css[start..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return &css[start..start + i + 1];
                }
            }
            _ => {}
        }
    }
    panic!("unterminated rule block {opening:?}");
}

/// Count non-overlapping occurrences of `needle`.
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

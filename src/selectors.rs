//! Selector families derived from the column count.
//!
//! Two kinds of class are generated, and their naming differs on purpose:
//!
//! - **Equal-column** (`.gs--ec3`): a BEM *modifier* on the grid container.
//!   Its direct children are laid out in equal-width tracks.
//! - **Column-span** (`.gs__cs5`): a BEM *element* applied to a single cell,
//!   spanning a fixed number of public columns.
//!
//! Consumers match these names against hand-written markup, so the `--ec` and
//! `__cs` spellings are part of the public contract.
//!
//! Spans are expressed in *actual* grid tracks. The container declares
//! [`COLUMNS_MULTIPLIER`] times as many tracks as public columns, which leaves
//! room for half-column offsets in the alignment utilities.

use serde::Serialize;

/// Ratio between actual grid tracks and public columns.
pub const COLUMNS_MULTIPLIER: u32 = 2;

/// Anything that renders as a single entry in a CSS selector list.
pub trait Selector {
    fn selector(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EqualColumnSelector {
    pub selector: String,
    /// Actual tracks each child of the container spans.
    pub span: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSpanSelector {
    pub selector: String,
    /// Actual tracks the cell spans.
    pub span: u32,
}

impl Selector for EqualColumnSelector {
    fn selector(&self) -> &str {
        &self.selector
    }
}

impl Selector for ColumnSpanSelector {
    fn selector(&self) -> &str {
        &self.selector
    }
}

/// Class name of an equal-column container, without the leading dot.
pub fn ec_class(namespace: &str, factor: u32) -> String {
    format!("{namespace}--ec{factor}")
}

/// Class name of a column-span cell, without the leading dot.
pub fn cs_class(namespace: &str, span: u32) -> String {
    format!("{namespace}__cs{span}")
}

/// One selector per factor, in factor order.
///
/// `columns_actual` is the track count (`COLUMNS_MULTIPLIER * columns`); every
/// factor divides the public column count, so it divides this too.
pub fn equal_column_selectors(
    columns_actual: u32,
    factors: &[u32],
    namespace: &str,
) -> Vec<EqualColumnSelector> {
    factors
        .iter()
        .map(|&factor| EqualColumnSelector {
            selector: format!(".{}", ec_class(namespace, factor)),
            span: columns_actual / factor,
        })
        .collect()
}

/// One selector per span `1..=columns`, ascending.
pub fn column_span_selectors(
    columns: u32,
    columns_multiplier: u32,
    namespace: &str,
) -> Vec<ColumnSpanSelector> {
    (1..=columns)
        .map(|span| ColumnSpanSelector {
            selector: format!(".{}", cs_class(namespace, span)),
            span: columns_multiplier * span,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factorize::FactorSet;

    #[test]
    fn class_names_use_bem_separators() {
        assert_eq!(ec_class("gs", 3), "gs--ec3");
        assert_eq!(cs_class("gs", 3), "gs__cs3");
        assert_eq!(ec_class("myco-gs", 12), "myco-gs--ec12");
    }

    #[test]
    fn equal_column_selectors_for_twelve_columns() {
        let factors = FactorSet::of(12);
        let selectors = equal_column_selectors(24, &factors, "gs");
        let pairs: Vec<(&str, u32)> = selectors
            .iter()
            .map(|s| (s.selector.as_str(), s.span))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (".gs--ec2", 12),
                (".gs--ec3", 8),
                (".gs--ec4", 6),
                (".gs--ec6", 4),
                (".gs--ec12", 2),
            ]
        );
    }

    #[test]
    fn equal_column_selectors_preserve_input_order() {
        let selectors = equal_column_selectors(24, &[6, 2], "x");
        assert_eq!(selectors[0].selector, ".x--ec6");
        assert_eq!(selectors[1].selector, ".x--ec2");
    }

    #[test]
    fn equal_column_selectors_empty_factors() {
        assert!(equal_column_selectors(2, &[], "gs").is_empty());
    }

    #[test]
    fn column_span_selectors_for_twelve_columns() {
        let selectors = column_span_selectors(12, COLUMNS_MULTIPLIER, "gs");
        assert_eq!(selectors.len(), 12);
        assert_eq!(selectors[0].selector, ".gs__cs1");
        assert_eq!(selectors[0].span, 2);
        assert_eq!(selectors[11].selector, ".gs__cs12");
        assert_eq!(selectors[11].span, 24);
    }

    #[test]
    fn column_span_selectors_single_column() {
        let selectors = column_span_selectors(1, COLUMNS_MULTIPLIER, "gs");
        assert_eq!(
            selectors,
            vec![ColumnSpanSelector {
                selector: ".gs__cs1".to_string(),
                span: 2,
            }]
        );
    }

    #[test]
    fn column_span_selectors_honor_multiplier() {
        let spans: Vec<u32> = column_span_selectors(4, 3, "gs")
            .into_iter()
            .map(|s| s.span)
            .collect();
        assert_eq!(spans, vec![3, 6, 9, 12]);
    }

    #[test]
    fn selector_trait_exposes_text() {
        let ec = &equal_column_selectors(4, &[2], "gs")[0];
        assert_eq!(Selector::selector(ec), ".gs--ec2");
    }
}

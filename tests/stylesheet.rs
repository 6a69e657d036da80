//! End-to-end checks of the public pipeline: parameters in, CSS and selectors out.

use grid_css::config::GridParameters;
use grid_css::factorize::{FactorSet, FactorizeError, factorize};
use grid_css::pipeline::{GridHost, generate};
use grid_css::selectors::{COLUMNS_MULTIPLIER, column_span_selectors, equal_column_selectors};
use grid_css::template::compose_stylesheet;

fn params(columns: u32, namespace: &str) -> GridParameters {
    GridParameters {
        columns,
        namespace: namespace.to_string(),
        ..Default::default()
    }
}

#[test]
fn four_column_stylesheet_matches_fixture() {
    let expected = include_str!("fixtures/grid--gs-4.css");
    let css = compose_stylesheet(&params(4, "gs"), &FactorSet::of(4));
    assert_eq!(css, expected);
}

#[test]
fn twelve_columns_end_to_end() {
    let factors = factorize("12").unwrap();
    assert_eq!(factors.as_slice(), &[2, 3, 4, 6, 12]);

    let ec = equal_column_selectors(COLUMNS_MULTIPLIER * 12, &factors, "gs");
    let ec: Vec<(&str, u32)> = ec.iter().map(|s| (s.selector.as_str(), s.span)).collect();
    assert_eq!(
        ec,
        vec![
            (".gs--ec2", 12),
            (".gs--ec3", 8),
            (".gs--ec4", 6),
            (".gs--ec6", 4),
            (".gs--ec12", 2),
        ]
    );

    let cs = column_span_selectors(12, COLUMNS_MULTIPLIER, "gs");
    let names: Vec<String> = (1..=12).map(|i| format!(".gs__cs{i}")).collect();
    let spans: Vec<u32> = (1..=12).map(|i| i * 2).collect();
    assert_eq!(cs.iter().map(|s| s.selector.clone()).collect::<Vec<_>>(), names);
    assert_eq!(cs.iter().map(|s| s.span).collect::<Vec<_>>(), spans);

    let grid = generate(&params(12, "gs")).unwrap();
    assert_eq!(grid.css, compose_stylesheet(&params(12, "gs"), &factors));
    assert_eq!(grid.download_filename(), "grid--gs-12.css");
}

#[test]
fn one_column_end_to_end() {
    let grid = generate(&params(1, "gs")).unwrap();
    assert!(grid.factors.is_empty());
    assert!(grid.equal_column.is_empty());
    assert_eq!(grid.column_span.len(), 1);
    assert_eq!(grid.column_span[0].selector, ".gs__cs1");
    assert_eq!(grid.column_span[0].span, 2);

    assert!(!grid.css.contains("--ec"));
    assert!(grid.css.contains(
        "  /* Equal-column cells */\n\n  /* Column-spanning cells */\n  .gs__cs1 { --gs-grid-column-span: 2; }\n}\n"
    ));
}

#[test]
fn non_numeric_columns_fail() {
    assert!(matches!(
        factorize("abc"),
        Err(FactorizeError::InvalidArgument(_))
    ));
    assert!(GridParameters::from_query_string("columns=abc").is_err());
}

#[test]
fn generation_is_deterministic() {
    let p = GridParameters::from_query_string("columns=18&namespace=ui&rowGapMobile=0").unwrap();
    let a = generate(&p).unwrap();
    let b = generate(&p).unwrap();
    assert_eq!(a.css, b.css);
    assert_eq!(a, b);
}

#[test]
fn query_string_drives_generation() {
    let p = GridParameters::from_query_string(
        "namespace=ui&columns=6&breakpointDesktop=min-width%3A+1200px",
    )
    .unwrap();
    let grid = generate(&p).unwrap();
    assert!(grid.css.contains("@media screen and (min-width: 1200px) {"));
    assert!(grid.css.contains(".ui--ec3 > * { --ui-grid-column-span: 4; }"));
}

#[test]
fn host_keeps_sink_current() {
    let mut host = GridHost::new(params(12, "gs"), String::new()).unwrap();
    host.set("columns", "5").unwrap();
    host.set("namespace", "x").unwrap();

    let expected = compose_stylesheet(&params(5, "x"), &FactorSet::of(5));
    assert_eq!(host.sink(), &expected);
}

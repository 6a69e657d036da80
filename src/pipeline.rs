//! Parameters in, stylesheet out.
//!
//! [`generate`] runs the whole derivation in one call:
//!
//! ```text
//! GridParameters → FactorSet → ec / cs selectors → CSS text
//! ```
//!
//! Nothing is cached or patched incrementally. Every change to the parameters
//! produces a fresh [`GeneratedGrid`], and [`GridHost`] pushes its CSS to a
//! [`StylesheetSink`] wholesale. When to regenerate is the host's call.

use crate::config::{ConfigError, GridParameters};
use crate::factorize::FactorSet;
use crate::selectors::{
    COLUMNS_MULTIPLIER, ColumnSpanSelector, EqualColumnSelector, column_span_selectors,
    equal_column_selectors,
};
use crate::template::compose_stylesheet;
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

/// MIME type of the downloadable stylesheet.
pub const CSS_MIME_TYPE: &str = "text/css";

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("stylesheet sink error: {0}")]
    Sink(#[from] io::Error),
}

/// Everything derived from one parameter set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedGrid {
    pub parameters: GridParameters,
    pub columns_actual: u32,
    pub factors: FactorSet,
    pub equal_column: Vec<EqualColumnSelector>,
    pub column_span: Vec<ColumnSpanSelector>,
    #[serde(skip)]
    pub css: String,
}

impl GeneratedGrid {
    /// File name the stylesheet is offered under, e.g. `grid--gs-12.css`.
    pub fn download_filename(&self) -> String {
        download_filename(&self.parameters)
    }
}

pub fn download_filename(params: &GridParameters) -> String {
    format!("grid--{}-{}.css", params.namespace, params.columns)
}

/// Validate parameters and derive factors, selectors, and the stylesheet.
pub fn generate(params: &GridParameters) -> Result<GeneratedGrid, ConfigError> {
    params.validate()?;

    let factors = FactorSet::of(params.columns);
    let columns_actual = params.columns_actual();
    let equal_column = equal_column_selectors(columns_actual, &factors, &params.namespace);
    let column_span = column_span_selectors(params.columns, COLUMNS_MULTIPLIER, &params.namespace);
    let css = compose_stylesheet(params, &factors);

    debug!(
        namespace = %params.namespace,
        columns = params.columns,
        factors = ?factors.as_slice(),
        bytes = css.len(),
        "generated stylesheet"
    );

    Ok(GeneratedGrid {
        parameters: params.clone(),
        columns_actual,
        factors,
        equal_column,
        column_span,
        css,
    })
}

// ============================================================================
// Stylesheet sinks
// ============================================================================

/// Destination for generated CSS. Each call replaces the previous text.
pub trait StylesheetSink {
    fn set_text(&mut self, css: &str) -> io::Result<()>;
}

/// In-memory sink; holds the last text written.
impl StylesheetSink for String {
    fn set_text(&mut self, css: &str) -> io::Result<()> {
        self.clear();
        self.push_str(css);
        Ok(())
    }
}

/// Rewrites a file on every update.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl StylesheetSink for FileSink {
    fn set_text(&mut self, css: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, css)?;
        info!(path = %self.path.display(), bytes = css.len(), "wrote stylesheet");
        Ok(())
    }
}

/// Writes each update to stdout.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl StylesheetSink for StdoutSink {
    fn set_text(&mut self, css: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(css.as_bytes())?;
        out.flush()
    }
}

// ============================================================================
// Host
// ============================================================================

/// Owns the current parameters and keeps a sink in step with them.
///
/// Every accepted change regenerates the full stylesheet and pushes it to the
/// sink. Rejected changes (bad column counts) leave parameters, output, and
/// sink untouched.
#[derive(Debug)]
pub struct GridHost<S: StylesheetSink> {
    current: GeneratedGrid,
    sink: S,
}

impl<S: StylesheetSink> GridHost<S> {
    /// Generate for `params` and push the first stylesheet.
    pub fn new(params: GridParameters, mut sink: S) -> Result<Self, PipelineError> {
        let current = generate(&params)?;
        sink.set_text(&current.css)?;
        Ok(Self { current, sink })
    }

    pub fn parameters(&self) -> &GridParameters {
        &self.current.parameters
    }

    pub fn generated(&self) -> &GeneratedGrid {
        &self.current
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Replace all parameters. Returns `false` if nothing changed.
    pub fn set_parameters(&mut self, params: GridParameters) -> Result<bool, PipelineError> {
        if params == self.current.parameters {
            debug!("parameters unchanged, skipping regeneration");
            return Ok(false);
        }
        let next = generate(&params)?;
        self.sink.set_text(&next.css)?;
        self.current = next;
        Ok(true)
    }

    /// Change one parameter by its query-string key.
    ///
    /// Unknown keys are ignored and return `false`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<bool, PipelineError> {
        let mut params = self.current.parameters.clone();
        if !params.set(key, value)? {
            return Ok(false);
        }
        self.set_parameters(params)
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_COLUMNS;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    /// Records every write, to check how often the host pushes.
    #[derive(Default)]
    struct RecordingSink(Vec<String>);

    impl StylesheetSink for RecordingSink {
        fn set_text(&mut self, css: &str) -> io::Result<()> {
            self.0.push(css.to_string());
            Ok(())
        }
    }

    struct BrokenSink;

    impl StylesheetSink for BrokenSink {
        fn set_text(&mut self, _css: &str) -> io::Result<()> {
            Err(io::Error::other("detached"))
        }
    }

    #[test]
    fn generate_twelve_columns() {
        let grid = generate(&params_with(12, "gs")).unwrap();
        assert_eq!(grid.columns_actual, 24);
        assert_eq!(grid.factors.as_slice(), &[2, 3, 4, 6, 12]);
        assert_eq!(grid.equal_column.len(), 5);
        assert_eq!(grid.column_span.len(), 12);
        assert_eq!(grid.css, stylesheet_for(12, "gs"));
    }

    #[test]
    fn generate_rejects_zero_columns() {
        let result = generate(&params_with(0, "gs"));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn generate_rejects_columns_above_cap() {
        let result = generate(&params_with(MAX_COLUMNS + 1, "gs"));
        assert!(matches!(result, Err(ConfigError::Validation(_))));

        let grid = generate(&params_with(MAX_COLUMNS, "gs")).unwrap();
        assert_eq!(grid.column_span.len(), MAX_COLUMNS as usize);
    }

    #[test]
    fn download_filename_uses_namespace_and_columns() {
        let grid = generate(&params_with(16, "myco")).unwrap();
        assert_eq!(grid.download_filename(), "grid--myco-16.css");
        assert_eq!(CSS_MIME_TYPE, "text/css");
    }

    #[test]
    fn generated_grid_serializes_without_css() {
        let grid = generate(&params_with(4, "gs")).unwrap();
        let json = serde_json::to_value(&grid).unwrap();
        assert_eq!(json["factors"], serde_json::json!([2, 4]));
        assert_eq!(json["equal_column"][0]["selector"], ".gs--ec2");
        assert_eq!(json["column_span"][3]["span"], 8);
        assert!(json.get("css").is_none());
    }

    #[test]
    fn string_sink_replaces_text() {
        let mut sink = String::from("old");
        sink.set_text("new").unwrap();
        assert_eq!(sink, "new");
    }

    #[test]
    fn file_sink_overwrites() {
        let tmp = TempDir::new().unwrap();
        let mut sink = FileSink::new(tmp.path().join("nested/grid.css"));
        sink.set_text("a { }").unwrap();
        sink.set_text("b { }").unwrap();
        assert_eq!(fs::read_to_string(sink.path()).unwrap(), "b { }");
    }

    #[test]
    fn host_pushes_initial_stylesheet() {
        let host = GridHost::new(params_with(6, "gs"), String::new()).unwrap();
        assert_eq!(host.sink(), &stylesheet_for(6, "gs"));
        assert_eq!(host.generated().factors.as_slice(), &[2, 3, 6]);
    }

    #[test]
    fn host_regenerates_on_change() {
        let mut host = GridHost::new(params_with(6, "gs"), RecordingSink::default()).unwrap();
        assert!(host.set("columns", "8").unwrap());
        assert_eq!(host.parameters().columns, 8);
        assert_eq!(host.generated().factors.as_slice(), &[2, 4, 8]);

        let writes = &host.sink().0;
        assert_eq!(writes.len(), 2);
        assert_eq!(writes[1], stylesheet_for(8, "gs"));
    }

    #[test]
    fn host_skips_unchanged_parameters() {
        let mut host = GridHost::new(params_with(6, "gs"), RecordingSink::default()).unwrap();
        assert!(!host.set("columns", "6").unwrap());
        assert!(!host.set("unrelated", "x").unwrap());
        assert_eq!(host.into_sink().0.len(), 1);
    }

    #[test]
    fn host_rejects_invalid_columns_without_side_effects() {
        let mut host = GridHost::new(params_with(6, "gs"), RecordingSink::default()).unwrap();
        assert!(host.set("columns", "abc").is_err());
        assert_eq!(host.parameters().columns, 6);
        assert_eq!(host.sink().0.len(), 1);
    }

    #[test]
    fn host_surfaces_sink_errors() {
        let result = GridHost::new(params_with(6, "gs"), BrokenSink);
        assert!(matches!(result, Err(PipelineError::Sink(_))));
    }

    #[test]
    fn host_last_write_wins() {
        let mut host = GridHost::new(params_with(6, "gs"), String::new()).unwrap();
        host.set("namespace", "a").unwrap();
        host.set("namespace", "b").unwrap();
        assert!(host.sink().contains(".b {"));
        assert!(!host.sink().contains(".a {"));
    }
}

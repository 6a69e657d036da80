use clap::{Parser, Subcommand};
use grid_css::config::{self, GridParameters};
use grid_css::factorize::FactorSet;
use grid_css::pipeline::{self, GeneratedGrid, StdoutSink, StylesheetSink};
use grid_css::{demo, output};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Per-field parameter overrides. Applied last, on top of config and query.
#[derive(clap::Args, Clone, Default)]
struct ParamArgs {
    /// Prefix for generated classes and custom properties
    #[arg(long, global = true)]
    namespace: Option<String>,

    /// Public column count at desktop sizes (1 to 1024)
    #[arg(long, global = true)]
    columns: Option<String>,

    /// Tablet media condition, e.g. "width >= 48rem"
    #[arg(long, global = true)]
    breakpoint_tablet: Option<String>,

    /// Desktop media condition, e.g. "width >= 60rem"
    #[arg(long, global = true)]
    breakpoint_desktop: Option<String>,

    #[arg(long, global = true)]
    column_gap_tablet: Option<String>,

    #[arg(long, global = true)]
    column_gap_desktop: Option<String>,

    #[arg(long, global = true)]
    row_gap_mobile: Option<String>,

    #[arg(long, global = true)]
    row_gap_tablet: Option<String>,

    #[arg(long, global = true)]
    row_gap_desktop: Option<String>,
}

impl ParamArgs {
    /// Flag values keyed the same way as the query string.
    fn overrides(&self) -> Vec<(&'static str, &str)> {
        [
            ("namespace", &self.namespace),
            ("columns", &self.columns),
            ("breakpointTablet", &self.breakpoint_tablet),
            ("breakpointDesktop", &self.breakpoint_desktop),
            ("columnGapTablet", &self.column_gap_tablet),
            ("columnGapDesktop", &self.column_gap_desktop),
            ("rowGapMobile", &self.row_gap_mobile),
            ("rowGapTablet", &self.row_gap_tablet),
            ("rowGapDesktop", &self.row_gap_desktop),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
        .collect()
    }
}

#[derive(Parser)]
#[command(name = "grid-css")]
#[command(about = "Generate a responsive CSS grid system and its demo page")]
#[command(long_about = "\
Generate a responsive CSS grid system and its demo page

The grid has three tiers. Mobile cells span the full width, tablet cells
half of it, and desktop cells whatever their classes say:

  .gs                 grid container
  .gs--ec3            container whose children sit in 3 equal columns
  .gs__cs4            cell spanning 4 of the desktop columns
  .gs__ac / .gs__ae   center / end-align a cell (tablet and up)

Equal-column classes exist for every divisor of the column count above 1.

Parameters resolve in layers, later ones winning:

  defaults → grid.toml (--config) → --query → individual flags

Run 'grid-css gen-config' to generate a documented grid.toml.")]
#[command(version)]
struct Cli {
    /// Config file
    #[arg(long, default_value = "grid.toml", global = true)]
    config: PathBuf,

    /// Parameters as a URL query string, e.g. "columns=16&namespace=ui"
    #[arg(long, global = true)]
    query: Option<String>,

    /// Log pipeline details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    params: ParamArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the generated stylesheet
    Css,
    /// Show the factors of the column count
    Factors,
    /// List the generated selectors and their spans
    Selectors {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Write the stylesheet and an HTML demo page
    Build {
        /// Output directory
        #[arg(long, default_value = "dist")]
        output: PathBuf,
    },
    /// Print the resolved parameters as a query string
    Query,
    /// Print a stock grid.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Command::Css => {
            let grid = generate_grid(&cli)?;
            StdoutSink.set_text(&grid.css)?;
        }
        Command::Factors => {
            let params = resolve_parameters(&cli)?;
            output::print_factors(params.columns, &FactorSet::of(params.columns));
        }
        Command::Selectors { json } => {
            let grid = generate_grid(&cli)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&grid)?);
            } else {
                output::print_selectors(&grid);
            }
        }
        Command::Build { output: output_dir } => {
            let grid = generate_grid(&cli)?;
            let site = demo::write_site(&grid, output_dir)?;
            output::print_build_output(&grid, &site.stylesheet, &site.page);
        }
        Command::Query => {
            let params = resolve_parameters(&cli)?;
            println!("?{}", params.to_query_string());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn generate_grid(cli: &Cli) -> Result<GeneratedGrid, config::ConfigError> {
    let params = resolve_parameters(cli)?;
    pipeline::generate(&params)
}

/// Layer config file, query string, and flags on top of the stock defaults.
fn resolve_parameters(cli: &Cli) -> Result<GridParameters, config::ConfigError> {
    let mut params = config::load_config(&cli.config)?;
    if let Some(query) = &cli.query {
        params.apply_query_string(query)?;
    }
    for (key, value) in cli.params.overrides() {
        params.set(key, value)?;
    }
    params.validate()?;
    tracing::debug!(query = %params.to_query_string(), "resolved parameters");
    Ok(params)
}

/// Install a stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "grid_css=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

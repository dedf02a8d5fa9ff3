use anyhow::Result;
use clap::Parser;
use sheetjson_core::{Converter, SheetJsonConfig, SheetSource};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod formatter;

#[derive(Parser)]
#[command(name = "sheetjson")]
#[command(about = "Dump every sheet of an Excel/ODS workbook to a JSON file", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the Excel/ODS file [default: "Equifax Codes 2025.xlsx"]
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Output JSON file [default: equifax_codes.json]
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Number of rows shown in each sheet preview
    #[arg(long, value_name = "N")]
    preview_rows: Option<usize>,

    /// Also write a TypeScript module with the same data
    #[arg(long, value_name = "PATH")]
    typescript: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    /// Command-line flags take precedence over the config file
    fn apply(&self, config: &mut SheetJsonConfig) {
        if let Some(file) = &self.file {
            config.input = file.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(rows) = self.preview_rows {
            config.preview_rows = rows;
        }
        if let Some(ts) = &self.typescript {
            config.typescript_output = Some(ts.clone());
        }
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "sheetjson=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(err) = run(&cli) {
        formatter::print_error(&err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = SheetJsonConfig::load(cli.config.as_deref())?;
    cli.apply(&mut config);
    tracing::debug!(?config, "resolved configuration");

    let converter = Converter::with_config(config);
    let config = converter.config();

    let mut workbook = converter.open()?;
    formatter::print_sheet_names(&workbook.sheet_names());

    let document = converter.convert(&mut workbook, |table| {
        formatter::print_sheet(table, config.preview_rows)
    })?;

    converter.write(&document, workbook.path())?;
    formatter::print_saved(&config.output, config.typescript_output.as_deref());

    Ok(())
}

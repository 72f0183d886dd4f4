//! Render command - align delimited text
//!
//! Settings come from three layers, highest first: command-line flags, the
//! loaded aligntab.toml, built-in defaults. The column count falls back to the
//! field count of the first input line.

use crate::cli::RenderArgs;
use crate::context::load_config;
use crate::output::{print_json, print_table};
use aligntab_core::input::{InputLine, fill_table, infer_columns, parse_lines};
use aligntab_core::{Table, TableConfig};
use anyhow::{Context as _, Result, bail};
use log::{debug, info};
use serde::Serialize;
use std::io::Read;
use std::path::Path;

/// Render command JSON output schema
#[derive(Debug, Serialize)]
struct RenderOutput {
    schema_version: String,
    columns: usize,
    spacing: usize,
    column_widths: Vec<usize>,
    rows: Vec<String>,
    rendered: String,
}

/// Effective settings after merging flags over config over defaults
#[derive(Debug)]
struct Settings {
    columns: Option<usize>,
    delimiter: char,
    label: bool,
    config: TableConfig,
}

/// Align delimited text and print it
///
/// # Errors
///
/// Returns an error if the config or input cannot be read, or if an input
/// line has the wrong number of fields.
pub fn run(args: RenderArgs) -> Result<()> {
    let loaded = load_config(args.config.as_deref())?;
    let settings = merge_settings(&args, loaded.map(|l| l.config))?;

    let text = read_input(args.file.as_deref())?;
    let lines = parse_lines(&text, settings.delimiter);
    info!("read {} input lines", lines.len());

    let table = build_table(settings, &lines)?;

    if args.json {
        print_json(&RenderOutput {
            schema_version: "1.0".to_string(),
            columns: table.columns(),
            spacing: table.spacing(),
            column_widths: table.column_widths().to_vec(),
            rows: table.rows().iter().map(|row| row.render()).collect(),
            rendered: table.render(),
        })?;
    } else {
        print_table(&table.render())?;
    }
    Ok(())
}

fn merge_settings(args: &RenderArgs, file: Option<TableConfig>) -> Result<Settings> {
    let from_file = file.is_some();
    let mut config = file.unwrap_or_else(|| TableConfig::with_columns(0));

    if let Some(spacing) = args.spacing {
        config.table.spacing = spacing;
    }
    if let Some(header) = &args.header {
        config.table.header = header.clone();
    }
    if let Some(footer) = &args.footer {
        config.table.footer = footer.clone();
    }

    let delimiter = match args.delimiter {
        Some(delimiter) => delimiter,
        None => config.delimiter()?,
    };
    let columns = args
        .columns
        .or(from_file.then_some(config.table.columns));

    let settings = Settings {
        columns,
        delimiter,
        label: args.label || config.input.label,
        config,
    };
    debug!("render settings: {:?}", settings);
    Ok(settings)
}

fn build_table(settings: Settings, lines: &[InputLine]) -> Result<Table> {
    let columns = match settings.columns.or_else(|| infer_columns(lines)) {
        Some(columns) => columns,
        None => bail!("Input is empty; pass --columns to render an empty table"),
    };

    let mut config = settings.config;
    config.table.columns = columns;
    let mut table = Table::from_config(&config)?;

    fill_table(&mut table, lines, settings.label)?;
    Ok(table)
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

//! Rendering a found subset for the command line.

use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;

use crate::{EntrySumError, Subset, SubsetSize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Set literal such as `{366, 675, 979}`.
    #[default]
    Text,
    /// One JSON object with target, size, values and product.
    Json,
    /// One CSV record of the values, no header.
    Csv,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    target: i64,
    size: usize,
    values: &'a Subset,
    product: Option<i128>,
}

/// Write `subset` to `out` in the requested format.
///
/// `with_product` only affects the text format; JSON always carries the
/// product and CSV never does.
pub fn render<W: Write>(
    out: &mut W,
    subset: &Subset,
    target: i64,
    size: SubsetSize,
    format: OutputFormat,
    with_product: bool,
) -> Result<(), EntrySumError> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{subset}")?;
            if with_product {
                match subset.product() {
                    Some(p) => writeln!(out, "product: {p}")?,
                    None => writeln!(out, "product: overflow")?,
                }
            }
        }
        OutputFormat::Json => {
            let report = JsonReport {
                target,
                size: size.get(),
                values: subset,
                product: subset.product(),
            };
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut wtr = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(&mut *out);
            wtr.write_record(subset.values().iter().map(|v| v.to_string()))?;
            wtr.flush()?;
        }
    }
    Ok(())
}

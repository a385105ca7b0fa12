//! CSV export of the frequency tables.

use crate::error::AppError;
use crate::tally::{FrequencyTable, Tallies};
use std::borrow::Cow;
use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// File name and column headers for one exported table.
#[derive(Debug, Clone, Copy)]
pub struct TableLayout {
    pub file_name: &'static str,
    pub value_column: &'static str,
    pub count_column: &'static str,
}

pub const MODEL_LAYOUT: TableLayout = TableLayout {
    file_name: "myModel.csv",
    value_column: "Camera Model",
    count_column: "Amount",
};

pub const LENS_LAYOUT: TableLayout = TableLayout {
    file_name: "myLensModel.csv",
    value_column: "Lens Model",
    count_column: "Amount",
};

pub const FOCAL_LAYOUT: TableLayout = TableLayout {
    file_name: "myFocal.csv",
    value_column: "Focal",
    count_column: "Value",
};

/// Writes header and rows, one `value,count` line per key in table order.
pub fn write_csv<K: Display, W: Write>(
    table: &FrequencyTable<K>,
    value_column: &str,
    count_column: &str,
    mut writer: W,
) -> std::io::Result<()> {
    writeln!(writer, "{},{}", escape(value_column), escape(count_column))?;
    for (key, count) in table.iter() {
        writeln!(writer, "{},{}", escape(&key.to_string()), count)?;
    }
    writer.flush()
}

/// Creates or truncates `destination` and writes `table` into it.
pub fn export<K: Display>(
    table: &FrequencyTable<K>,
    value_column: &str,
    count_column: &str,
    destination: &Path,
) -> Result<(), AppError> {
    let file = File::create(destination)?;
    write_csv(table, value_column, count_column, BufWriter::new(file))?;
    log::debug!("Wrote {} rows to {:?}", table.len(), destination);
    Ok(())
}

/// Exports all three tables into `output_dir`, returning the paths written.
pub fn write_reports(tallies: &Tallies, output_dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    if !output_dir.exists() {
        std::fs::create_dir_all(output_dir)?;
        log::debug!("Created output directory: {:?}", output_dir);
    }

    let model_path = output_dir.join(MODEL_LAYOUT.file_name);
    export(
        &tallies.models,
        MODEL_LAYOUT.value_column,
        MODEL_LAYOUT.count_column,
        &model_path,
    )?;

    let lens_path = output_dir.join(LENS_LAYOUT.file_name);
    export(
        &tallies.lenses,
        LENS_LAYOUT.value_column,
        LENS_LAYOUT.count_column,
        &lens_path,
    )?;

    let focal_path = output_dir.join(FOCAL_LAYOUT.file_name);
    export(
        &tallies.focal_lengths,
        FOCAL_LAYOUT.value_column,
        FOCAL_LAYOUT.count_column,
        &focal_path,
    )?;

    Ok(vec![model_path, lens_path, focal_path])
}

// Minimal quoting: only fields with a delimiter, quote or line break.
fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

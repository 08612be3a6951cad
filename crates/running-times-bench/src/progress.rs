//! Tab-delimited progress table printed while an experiment runs.

use std::io::{self, Write};

use running_times_core::{Algorithm, TimeUnit};

use crate::result::Row;

/// Writes the header and one line per measured size.
#[derive(Debug, Clone)]
pub struct ProgressTable {
    columns: Vec<String>,
    unit: TimeUnit,
}

impl ProgressTable {
    /// Multi-algorithm tables use short algorithm names as columns;
    /// a single algorithm gets a `Time (<unit>)` column.
    pub fn new(algorithms: &[Algorithm], unit: TimeUnit) -> Self {
        let columns = if algorithms.len() == 1 {
            vec![format!("Time ({})", unit.suffix())]
        } else {
            algorithms.iter().map(|a| a.column().to_string()).collect()
        };
        Self { columns, unit }
    }

    pub fn write_header<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        let mut header = String::from("Size");
        let mut rule = String::from("----");
        for column in &self.columns {
            header.push('\t');
            header.push_str(column);
            rule.push('\t');
            rule.push_str(&"-".repeat(column.chars().count()));
        }
        writeln!(out, "{}", header)?;
        writeln!(out, "{}", rule)
    }

    pub fn write_row<W: Write + ?Sized>(&self, out: &mut W, row: &Row) -> io::Result<()> {
        let mut line = row.size.to_string();
        for count in row.counts(self.unit) {
            line.push('\t');
            line.push_str(&count.to_string());
        }
        writeln!(out, "{}", line)?;
        out.flush()
    }
}

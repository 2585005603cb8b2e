// Tiptap Bench - LFSR benchmark generation and result pivoting
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Write a pivot table as delimited text.

use crate::error::{CsvError, Result};
use std::collections::BTreeSet;
use std::io::Write;
use tiptap_core::{PivotRow, PivotTable};
use tracing::warn;

/// What to do with rows whose columns differ from the header's.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AlignmentPolicy {
    /// Fail on the first row whose columns differ from the first populated
    /// row's.
    #[default]
    Reject,
    /// Use the sorted union of every row's columns as the header and leave
    /// missing cells empty.
    Pad,
}

/// Configuration for table output.
#[derive(Debug, Clone)]
pub struct ToCsvConfig {
    /// Field delimiter (default: ';')
    pub delimiter: u8,
    /// Include header row (default: true)
    pub include_headers: bool,
    /// Quote style for fields (default: necessary)
    pub quote_style: csv::QuoteStyle,
    /// Header of the row key column (default: "N")
    pub key_header: String,
    /// Handling of misaligned rows (default: reject)
    pub alignment: AlignmentPolicy,
}

impl Default for ToCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b';',
            include_headers: true,
            quote_style: csv::QuoteStyle::Necessary,
            key_header: "N".to_string(),
            alignment: AlignmentPolicy::Reject,
        }
    }
}

/// Convert a table to a string with the default configuration.
///
/// # Example
/// ```
/// use tiptap_core::{PivotRow, PivotTable};
/// use tiptap_csv::to_csv;
///
/// let mut row = PivotRow::new(3);
/// row.values.insert("SmallLFSR<N, true>".to_string(), 1.5);
/// let mut table = PivotTable::new();
/// table.push_row(row);
///
/// assert_eq!(to_csv(&table).unwrap(), "N;SmallLFSR<N, true>\n3;1.5\n");
/// ```
pub fn to_csv(table: &PivotTable) -> Result<String> {
    to_csv_with_config(table, ToCsvConfig::default())
}

/// Convert a table to a string with custom configuration.
pub fn to_csv_with_config(table: &PivotTable, config: ToCsvConfig) -> Result<String> {
    let mut buffer = Vec::with_capacity(estimate_size(table));
    to_csv_writer_with_config(table, &mut buffer, config)?;
    String::from_utf8(buffer).map_err(|_| CsvError::InvalidUtf8 {
        context: "CSV output".to_string(),
    })
}

/// Write a table with the default configuration.
///
/// # Example
/// ```no_run
/// use tiptap_core::PivotTable;
/// use tiptap_csv::to_csv_writer;
/// use std::fs::File;
///
/// let table = PivotTable::new();
/// let file = File::create("output.csv").unwrap();
/// to_csv_writer(&table, file).unwrap();
/// ```
pub fn to_csv_writer<W: Write>(table: &PivotTable, writer: W) -> Result<()> {
    to_csv_writer_with_config(table, writer, ToCsvConfig::default())
}

/// Write a table with custom configuration.
///
/// The header is `N` followed by the column keys in lexicographic order;
/// every following record is one row in table order.
///
/// # Errors
///
/// Returns [`CsvError::MisalignedRow`] under [`AlignmentPolicy::Reject`] when
/// a row's columns differ from the header's. Nothing is written in that case.
pub fn to_csv_writer_with_config<W: Write>(
    table: &PivotTable,
    writer: W,
    config: ToCsvConfig,
) -> Result<()> {
    let columns = match config.alignment {
        AlignmentPolicy::Reject => {
            let columns = table.columns();
            if let Some(row) = table.misaligned_rows().first() {
                return Err(misaligned(row, &columns));
            }
            columns
        }
        AlignmentPolicy::Pad => {
            let columns = table.all_columns();
            for row in table.misaligned_rows() {
                warn!(n = row.n, "row is missing columns, padding with empty fields");
            }
            columns
        }
    };

    let mut wtr = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .quote_style(config.quote_style)
        .from_writer(writer);

    if config.include_headers {
        let header = std::iter::once(config.key_header.as_str()).chain(columns.iter().copied());
        wtr.write_record(header)?;
    }

    for row in table.rows() {
        let mut record = Vec::with_capacity(columns.len() + 1);
        record.push(row.n.to_string());
        for column in &columns {
            record.push(
                row.values
                    .get(*column)
                    .map(|value| value.to_string())
                    .unwrap_or_default(),
            );
        }
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

fn misaligned(row: &PivotRow, columns: &[&str]) -> CsvError {
    let header: BTreeSet<&str> = columns.iter().copied().collect();
    let keys: BTreeSet<&str> = row.keys().collect();
    CsvError::MisalignedRow {
        n: row.n,
        missing: header.difference(&keys).map(|s| s.to_string()).collect(),
        unexpected: keys.difference(&header).map(|s| s.to_string()).collect(),
    }
}

fn estimate_size(table: &PivotTable) -> usize {
    let header: usize = table.columns().iter().map(|c| c.len() + 1).sum();
    (header + table.len() * table.columns().len() * 24).max(1024)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(n: u32, values: &[(&str, f64)]) -> PivotRow {
        let mut row = PivotRow::new(n);
        for (key, value) in values {
            row.values.insert(key.to_string(), *value);
        }
        row
    }

    fn table(rows: Vec<PivotRow>) -> PivotTable {
        let mut table = PivotTable::new();
        for r in rows {
            table.push_row(r);
        }
        table
    }

    #[test]
    fn test_header_and_row_order() {
        let t = table(vec![row(
            3,
            &[("Small<N, true>", 1e-12), ("Small<N, false>", 2e-12)],
        )]);
        let csv = to_csv(&t).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "N;Small<N, false>;Small<N, true>");
        assert_eq!(lines[1], format!("3;{};{}", 2e-12, 1e-12));
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_commas_in_keys_are_not_quoted() {
        let t = table(vec![row(5, &[("BigLFSR<N, std::uint8_t, true>", 0.25)])]);
        assert_eq!(
            to_csv(&t).unwrap(),
            "N;BigLFSR<N, std::uint8_t, true>\n5;0.25\n"
        );
    }

    #[test]
    fn test_rows_in_table_order() {
        let t = table(vec![
            row(9, &[("a", 1.0)]),
            row(3, &[("a", 2.0)]),
        ]);
        assert_eq!(to_csv(&t).unwrap(), "N;a\n9;1\n3;2\n");
    }

    #[test]
    fn test_reject_misaligned() {
        let t = table(vec![
            row(3, &[("a", 1.0), ("b", 2.0)]),
            row(4, &[("a", 1.0), ("c", 2.0)]),
        ]);
        match to_csv(&t).unwrap_err() {
            CsvError::MisalignedRow {
                n,
                missing,
                unexpected,
            } => {
                assert_eq!(n, 4);
                assert_eq!(missing, vec!["b".to_string()]);
                assert_eq!(unexpected, vec!["c".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_pad_misaligned() {
        let t = table(vec![
            row(3, &[("a", 1.0), ("b", 2.0)]),
            row(4, &[("a", 3.0), ("c", 4.0)]),
        ]);
        let config = ToCsvConfig {
            alignment: AlignmentPolicy::Pad,
            ..Default::default()
        };
        assert_eq!(
            to_csv_with_config(&t, config).unwrap(),
            "N;a;b;c\n3;1;2;\n4;3;;4\n"
        );
    }

    #[test]
    fn test_every_line_has_header_width_when_padded() {
        let t = table(vec![
            row(3, &[]),
            row(4, &[("x", 1.0)]),
            row(5, &[("y", 1.0)]),
        ]);
        let config = ToCsvConfig {
            alignment: AlignmentPolicy::Pad,
            ..Default::default()
        };
        let csv = to_csv_with_config(&t, config).unwrap();
        let widths: Vec<usize> = csv.lines().map(|l| l.split(';').count()).collect();
        assert_eq!(widths, vec![3, 3, 3, 3]);
    }

    #[test]
    fn test_empty_table_writes_key_header_only() {
        assert_eq!(to_csv(&PivotTable::new()).unwrap(), "N\n");
    }

    #[test]
    fn test_without_headers_and_custom_delimiter() {
        let t = table(vec![row(3, &[("a", 1.0)])]);
        let config = ToCsvConfig {
            delimiter: b'\t',
            include_headers: false,
            ..Default::default()
        };
        assert_eq!(to_csv_with_config(&t, config).unwrap(), "3\t1\n");
    }
}

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

//! Pivot command - Catch2 XML report to table

use super::{read_file, with_output};
use crate::error::CliError;
use std::io::Write;
use tiptap_core::PivotConfig;
use tiptap_csv::{to_csv_writer_with_config, ToCsvConfig};
use tiptap_xml::pivot_xml;
use tracing::info;

/// Results document read when no input is given.
pub const DEFAULT_INPUT: &str = "extensiveresults.xml";

/// Table written when no output is given.
pub const DEFAULT_OUTPUT: &str = "output.csv";

/// Pivot the results document at `input` into a table at `output`.
///
/// The whole document is parsed and pivoted before the output is opened, so
/// a malformed report never truncates an existing table.
///
/// # Errors
///
/// Returns `Err` if the input cannot be read or pivoted, or the table cannot
/// be written (including rows rejected by the alignment policy).
pub fn pivot(
    input: &str,
    output: &str,
    pivot_config: &PivotConfig,
    csv_config: ToCsvConfig,
) -> Result<(), CliError> {
    let xml = read_file(input)?;
    let table = pivot_xml(&xml, pivot_config).map_err(|e| CliError::results(input, e))?;
    info!(
        rows = table.len(),
        columns = table.columns().len(),
        aligned = table.is_aligned(),
        "pivoted {}",
        input
    );

    // Render first so an alignment failure leaves the output untouched.
    let mut rendered = Vec::new();
    to_csv_writer_with_config(&table, &mut rendered, csv_config)
        .map_err(|e| CliError::table(output, e))?;

    with_output(Some(output), |sink| {
        sink.write_all(&rendered)
            .map_err(|e| CliError::io_error(output, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tiptap_csv::AlignmentPolicy;

    const REPORT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Catch2TestRun>
  <TestCase name="N=3">
    <BenchmarkResults name="SmallLFSR&lt;3, true>"><mean value="1500000"/></BenchmarkResults>
    <BenchmarkResults name="SmallLFSR&lt;3, false>"><mean value="2500000"/></BenchmarkResults>
  </TestCase>
  <TestCase name="N=4">
    <BenchmarkResults name="SmallLFSR&lt;4, true>"><mean value="3500000"/></BenchmarkResults>
  </TestCase>
</Catch2TestRun>
"#;

    #[test]
    fn test_pivot_pad_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("results.xml");
        let output = dir.path().join("table.csv");
        fs::write(&input, REPORT).unwrap();

        let csv_config = ToCsvConfig {
            alignment: AlignmentPolicy::Pad,
            ..Default::default()
        };
        pivot(
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            &PivotConfig::default(),
            csv_config,
        )
        .unwrap();

        let table = fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "N;SmallLFSR<N, false>;SmallLFSR<N, true>");
        assert_eq!(lines[1], "3;2.5;1.5");
        assert_eq!(lines[2], "4;;3.5");
    }

    #[test]
    fn test_rejected_table_leaves_output_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("results.xml");
        let output = dir.path().join("table.csv");
        fs::write(&input, REPORT).unwrap();
        fs::write(&output, "previous").unwrap();

        let err = pivot(
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            &PivotConfig::default(),
            ToCsvConfig::default(),
        )
        .unwrap_err();

        assert!(matches!(err, CliError::Table { .. }));
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
    }

    #[test]
    fn test_missing_input() {
        let err = pivot(
            "/nonexistent/results.xml",
            "unused.csv",
            &PivotConfig::default(),
            ToCsvConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }
}

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

//! Pivot a results document into an `N` × implementation table.
//!
//! Groups (`TestCase` nodes named `N=<N>`) become rows. Every measurement in a
//! group is labelled with its identifier; the identifier is canonicalized
//! against the group's `N` so that the same implementation lands in the same
//! column in every row.

use crate::error::{PivotError, Result};
use crate::naming::canonicalize;
use crate::node::ResultNode;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info};

/// Configuration for reading a results document.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotConfig {
    /// Tag of top-level group nodes. Other top-level nodes are ignored.
    pub group_tag: String,
    /// Literal prefix in front of `N` in a group name.
    pub group_prefix: String,
    /// Tag of the statistic node inside a measurement.
    pub statistic_tag: String,
    /// Attribute of the statistic node holding the value.
    pub value_attribute: String,
    /// Factor applied to every raw value (nanoseconds to milliseconds by default).
    pub scale: f64,
}

impl Default for PivotConfig {
    fn default() -> Self {
        Self {
            group_tag: "TestCase".to_string(),
            group_prefix: "N=".to_string(),
            statistic_tag: "mean".to_string(),
            value_attribute: "value".to_string(),
            scale: 1e-6,
        }
    }
}

/// One row of the table.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotRow {
    /// Register length of the group.
    pub n: u32,
    /// Scaled value by column key.
    pub values: BTreeMap<String, f64>,
}

impl PivotRow {
    /// Create an empty row.
    pub fn new(n: u32) -> Self {
        Self {
            n,
            values: BTreeMap::new(),
        }
    }

    /// Column keys in lexicographic order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

/// Rows in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PivotTable {
    rows: Vec<PivotRow>,
}

impl PivotTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row.
    pub fn push_row(&mut self, row: PivotRow) {
        self.rows.push(row);
    }

    /// Rows in the order they were encountered.
    pub fn rows(&self) -> &[PivotRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First row that recorded at least one value.
    pub fn first_populated(&self) -> Option<&PivotRow> {
        self.rows.iter().find(|row| !row.values.is_empty())
    }

    /// Header columns: the sorted keys of the first populated row.
    pub fn columns(&self) -> Vec<&str> {
        self.first_populated()
            .map(|row| row.keys().collect())
            .unwrap_or_default()
    }

    /// Sorted union of the keys of every row.
    pub fn all_columns(&self) -> Vec<&str> {
        let keys: BTreeSet<&str> = self.rows.iter().flat_map(|row| row.keys()).collect();
        keys.into_iter().collect()
    }

    /// Rows whose key set differs from [`columns`](Self::columns).
    pub fn misaligned_rows(&self) -> Vec<&PivotRow> {
        let columns = self.columns();
        self.rows
            .iter()
            .filter(|row| !row.keys().eq(columns.iter().copied()))
            .collect()
    }

    /// Whether every row has exactly the header's columns.
    pub fn is_aligned(&self) -> bool {
        self.misaligned_rows().is_empty()
    }
}

/// Extract `N` from a group name such as `N=42`.
pub fn parse_group_name(name: &str, prefix: &str) -> Result<u32> {
    name.strip_prefix(prefix)
        .and_then(|digits| digits.trim().parse::<u32>().ok())
        .ok_or_else(|| PivotError::InvalidGroupName {
            name: name.to_string(),
            prefix: prefix.to_string(),
        })
}

/// Build the table from the root of a results document.
///
/// Measurements without a statistic node are skipped. Group names that are
/// missing or do not parse, and statistics without a measurement name, are
/// errors.
///
/// # Examples
///
/// ```
/// use tiptap_core::{pivot, MemoryNode, PivotConfig};
///
/// let doc = MemoryNode::new("Catch2TestRun").with_child(
///     MemoryNode::new("TestCase")
///         .with_attribute("name", "N=3")
///         .with_child(
///             MemoryNode::new("BenchmarkResults")
///                 .with_attribute("name", "SmallLFSR<3, true>")
///                 .with_child(MemoryNode::new("mean").with_attribute("value", "2000000")),
///         ),
/// );
///
/// let table = pivot(&&doc, &PivotConfig::default()).unwrap();
/// assert_eq!(table.columns(), vec!["SmallLFSR<N, true>"]);
/// assert_eq!(table.rows()[0].n, 3);
/// assert_eq!(table.rows()[0].values["SmallLFSR<N, true>"], 2.0);
/// ```
pub fn pivot<R: ResultNode>(root: &R, config: &PivotConfig) -> Result<PivotTable> {
    let mut table = PivotTable::new();

    for (index, group) in root.children().iter().enumerate() {
        if group.tag() != config.group_tag {
            debug!(tag = group.tag(), "skipping non-group node");
            continue;
        }
        let group_name = group.name().ok_or_else(|| PivotError::MissingGroupName {
            index,
            tag: group.tag().to_string(),
        })?;
        let n = parse_group_name(group_name, &config.group_prefix)?;
        info!(group = group_name, n, "pivoting group");

        table.push_row(pivot_group(group, group_name, n, config)?);
    }

    Ok(table)
}

fn pivot_group<R: ResultNode>(
    group: &R,
    group_name: &str,
    n: u32,
    config: &PivotConfig,
) -> Result<PivotRow> {
    let mut row = PivotRow::new(n);

    for (index, measurement) in group.children().iter().enumerate() {
        let Some(statistic) = measurement.find_descendant(&config.statistic_tag) else {
            debug!(
                group = group_name,
                tag = measurement.tag(),
                "no {} statistic, skipping",
                config.statistic_tag
            );
            continue;
        };
        let name = measurement
            .name()
            .ok_or_else(|| PivotError::MissingMeasurementName {
                group: group_name.to_string(),
                index,
            })?;
        let invalid = |source| PivotError::InvalidStatistic {
            group: group_name.to_string(),
            measurement: name.to_string(),
            source,
        };
        let Some(raw) = statistic
            .numeric_attribute(&config.value_attribute)
            .map_err(invalid)?
        else {
            debug!(
                group = group_name,
                measurement = name,
                "statistic has no {} attribute, skipping",
                config.value_attribute
            );
            continue;
        };

        let key = canonicalize(name, n);
        let value = raw * config.scale;
        debug!(group = group_name, measurement = name, key = %key, value, "recorded");
        row.values.insert(key, value);
    }

    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::MemoryNode;

    fn measurement(name: &str, mean: &str) -> MemoryNode {
        MemoryNode::new("BenchmarkResults")
            .with_attribute("name", name)
            .with_child(MemoryNode::new("mean").with_attribute("value", mean))
    }

    fn group(name: &str, children: Vec<MemoryNode>) -> MemoryNode {
        children.into_iter().fold(
            MemoryNode::new("TestCase").with_attribute("name", name),
            MemoryNode::with_child,
        )
    }

    fn run(groups: Vec<MemoryNode>) -> Result<PivotTable> {
        let root = groups
            .into_iter()
            .fold(MemoryNode::new("Catch2TestRun"), MemoryNode::with_child);
        pivot(&&root, &PivotConfig::default())
    }

    #[test]
    fn test_two_measurements_one_group() {
        let table = run(vec![group(
            "N=3",
            vec![
                measurement("Small<3, true>", "0.000001"),
                measurement("Small<3, false>", "0.000002"),
            ],
        )])
        .unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.columns(), vec!["Small<N, false>", "Small<N, true>"]);
        let row = &table.rows()[0];
        assert_eq!(row.n, 3);
        assert_eq!(row.values["Small<N, true>"], 0.000001 * 1e-6);
        assert_eq!(row.values["Small<N, false>"], 0.000002 * 1e-6);
    }

    #[test]
    fn test_group_name_is_integer() {
        assert_eq!(parse_group_name("N=42", "N="), Ok(42));
        assert_eq!(
            parse_group_name("N42", "N="),
            Err(PivotError::InvalidGroupName {
                name: "N42".to_string(),
                prefix: "N=".to_string(),
            })
        );
        assert!(parse_group_name("N=", "N=").is_err());
        assert!(parse_group_name("N=-1", "N=").is_err());
    }

    #[test]
    fn test_rows_keep_document_order() {
        let table = run(vec![
            group("N=10", vec![measurement("SmallLFSR<10, true>", "1")]),
            group("N=4", vec![measurement("SmallLFSR<4, true>", "1")]),
            group("N=7", vec![measurement("SmallLFSR<7, true>", "1")]),
        ])
        .unwrap();
        let order: Vec<u32> = table.rows().iter().map(|r| r.n).collect();
        assert_eq!(order, vec![10, 4, 7]);
        assert!(table.is_aligned());
    }

    #[test]
    fn test_measurement_without_statistic_is_skipped() {
        let table = run(vec![group(
            "N=5",
            vec![
                measurement("SmallLFSR<5, true>", "3"),
                MemoryNode::new("BenchmarkResults").with_attribute("name", "SmallLFSR<5, false>"),
                MemoryNode::new("OverallResult").with_attribute("success", "true"),
            ],
        )])
        .unwrap();
        assert_eq!(table.columns(), vec!["SmallLFSR<N, true>"]);
    }

    #[test]
    fn test_non_group_top_level_nodes_ignored() {
        let root = MemoryNode::new("Catch2TestRun")
            .with_child(group("N=3", vec![measurement("SmallLFSR<3, true>", "1")]))
            .with_child(MemoryNode::new("OverallResults").with_attribute("successes", "1"));
        let table = pivot(&&root, &PivotConfig::default()).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_missing_group_name_is_error() {
        let root =
            MemoryNode::new("Catch2TestRun").with_child(MemoryNode::new("TestCase"));
        let err = pivot(&&root, &PivotConfig::default()).unwrap_err();
        assert_eq!(
            err,
            PivotError::MissingGroupName {
                index: 0,
                tag: "TestCase".to_string(),
            }
        );
    }

    #[test]
    fn test_statistic_without_name_is_error() {
        let nameless = MemoryNode::new("BenchmarkResults")
            .with_child(MemoryNode::new("mean").with_attribute("value", "1"));
        let err = run(vec![group("N=3", vec![nameless])]).unwrap_err();
        assert!(matches!(err, PivotError::MissingMeasurementName { index: 0, .. }));
    }

    #[test]
    fn test_invalid_statistic_is_error() {
        let err = run(vec![group(
            "N=3",
            vec![measurement("SmallLFSR<3, true>", "slow")],
        )])
        .unwrap_err();
        assert!(matches!(err, PivotError::InvalidStatistic { .. }));
        assert!(err.to_string().contains("SmallLFSR<3, true>"));
    }

    #[test]
    fn test_misaligned_rows_detected() {
        let table = run(vec![
            group(
                "N=3",
                vec![
                    measurement("SmallLFSR<3, true>", "1"),
                    measurement("SmallLFSR<3, false>", "1"),
                ],
            ),
            group("N=4", vec![measurement("SmallLFSR<4, true>", "1")]),
        ])
        .unwrap();
        assert!(!table.is_aligned());
        let misaligned: Vec<u32> = table.misaligned_rows().iter().map(|r| r.n).collect();
        assert_eq!(misaligned, vec![4]);
        assert_eq!(
            table.all_columns(),
            vec!["SmallLFSR<N, false>", "SmallLFSR<N, true>"]
        );
    }

    #[test]
    fn test_columns_from_first_populated_row() {
        let table = run(vec![
            group("N=3", vec![]),
            group("N=4", vec![measurement("SmallLFSR<4, true>", "1")]),
        ])
        .unwrap();
        assert_eq!(table.columns(), vec!["SmallLFSR<N, true>"]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_custom_scale() {
        let root = MemoryNode::new("run")
            .with_child(group("N=3", vec![measurement("SmallLFSR<3, true>", "4")]));
        let config = PivotConfig {
            scale: 0.5,
            ..Default::default()
        };
        let table = pivot(&&root, &config).unwrap();
        assert_eq!(table.rows()[0].values["SmallLFSR<N, true>"], 2.0);
    }
}

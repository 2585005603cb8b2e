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

//! End-to-end tests: identifiers emitted by the generator, measured into a
//! Catch2 report, pivoted back into a table.

use proptest::prelude::*;
use tiptap_core::{cases, format_identifier, ParameterSpace, PivotConfig, PivotError};
use tiptap_xml::{pivot_xml, ResultsDocument, XmlError};

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Build a report shaped like Catch2's XML reporter output.
fn report(space: &ParameterSpace, mean: impl Fn(u32, usize) -> f64) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<Catch2TestRun name=\"extensive_benchmark\" rng-seed=\"42\">\n");
    for n in space.n_values() {
        xml.push_str(&format!(
            "  <TestCase name=\"N={n}\" filename=\"extensive_benchmark.cpp\" line=\"{}\">\n",
            40 + n
        ));
        for (i, case) in cases(n, &space.bitwidths).enumerate() {
            xml.push_str(&format!(
                "    <BenchmarkResults name=\"{}\" samples=\"100\" iterations=\"1\">\n",
                escape(&format_identifier(&case))
            ));
            xml.push_str("      <!-- All values in nano seconds -->\n");
            xml.push_str(&format!(
                "      <mean value=\"{}\" lowerBound=\"0\" upperBound=\"0\" ci=\"0.95\"/>\n",
                mean(n, i)
            ));
            xml.push_str("      <standardDeviation value=\"1\" lowerBound=\"0\" upperBound=\"2\" ci=\"0.95\"/>\n");
            xml.push_str("    </BenchmarkResults>\n");
        }
        xml.push_str("    <OverallResult success=\"true\" skips=\"0\"/>\n");
        xml.push_str("  </TestCase>\n");
    }
    xml.push_str("  <OverallResults successes=\"0\" failures=\"0\" expectedFailures=\"0\"/>\n");
    xml.push_str("  <OverallResultsCases successes=\"1\" failures=\"0\" expectedFailures=\"0\"/>\n");
    xml.push_str("</Catch2TestRun>\n");
    xml
}

#[test]
fn test_full_default_space_aligns() {
    let space = ParameterSpace::default();
    let xml = report(&space, |n, i| (n as f64) * 1000.0 + i as f64);

    let table = pivot_xml(&xml, &PivotConfig::default()).unwrap();
    assert_eq!(table.len(), 62);
    assert_eq!(table.columns().len(), 10);
    assert!(table.is_aligned());
    assert_eq!(table.rows()[0].n, 3);
    assert_eq!(table.rows()[61].n, 64);
}

#[test]
fn test_columns_sorted() {
    let space = ParameterSpace::new(3, 4, vec![8, 64]);
    let xml = report(&space, |_, _| 1.0);
    let table = pivot_xml(&xml, &PivotConfig::default()).unwrap();
    assert_eq!(
        table.columns(),
        vec![
            "BigLFSR<N, std::uint64_t, false>",
            "BigLFSR<N, std::uint64_t, true>",
            "BigLFSR<N, std::uint8_t, false>",
            "BigLFSR<N, std::uint8_t, true>",
            "SmallLFSR<N, false>",
            "SmallLFSR<N, true>",
        ]
    );
}

#[test]
fn test_values_scaled_to_milliseconds() {
    let space = ParameterSpace::new(10, 10, vec![]);
    let xml = report(&space, |_, i| if i == 0 { 2_000_000.0 } else { 500_000.0 });
    let table = pivot_xml(&xml, &PivotConfig::default()).unwrap();
    let row = &table.rows()[0];
    assert_eq!(row.values["SmallLFSR<N, true>"], 2_000_000.0 * 1e-6);
    assert_eq!(row.values["SmallLFSR<N, false>"], 500_000.0 * 1e-6);
}

#[test]
fn test_malformed_group_name_fails() {
    let xml = r#"<Catch2TestRun><TestCase name="N=three"/></Catch2TestRun>"#;
    let err = pivot_xml(xml, &PivotConfig::default()).unwrap_err();
    assert_eq!(
        err,
        XmlError::Pivot(PivotError::InvalidGroupName {
            name: "N=three".to_string(),
            prefix: "N=".to_string(),
        })
    );
}

#[test]
fn test_truncated_report_fails_to_parse() {
    let space = ParameterSpace::new(3, 3, vec![8]);
    let xml = report(&space, |_, _| 1.0);
    let truncated = &xml[..xml.len() / 2];
    assert!(matches!(
        ResultsDocument::parse(truncated),
        Err(XmlError::Parse { .. })
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: every group of a generated report produces one aligned row
    #[test]
    fn prop_generated_reports_align(
        n_min in 1u32..100,
        span in 0u32..6,
        widths in prop::collection::vec(prop::sample::select(vec![8u32, 16, 32, 64]), 0..4),
        base in 1.0f64..1e9,
    ) {
        let mut widths = widths;
        widths.dedup();
        let space = ParameterSpace::new(n_min, n_min + span, widths);
        let xml = report(&space, |n, i| base + (n as f64) + i as f64);

        let table = pivot_xml(&xml, &PivotConfig::default()).unwrap();
        prop_assert_eq!(table.len(), span as usize + 1);
        prop_assert!(table.is_aligned());
    }
}

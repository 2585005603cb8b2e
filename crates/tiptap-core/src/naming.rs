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

//! Identifier formatting and canonicalization.
//!
//! The same identifier string names a benchmark in the generated source and
//! labels its measurement in the results document. [`format_identifier`]
//! renders a [`Case`] into that string; [`canonicalize`] reduces an identifier
//! measured at a concrete `N` to a column key shared by every `N`.
//!
//! For every case, `canonicalize(&format_identifier(&case), case.n)` does not
//! depend on `case.n`.

use crate::case::{Case, Family};

/// Token substituted for the register length in a column key.
pub const PLACEHOLDER: &str = "N";

/// Template name of the width-agnostic family.
pub const SMALL_TEMPLATE: &str = "SmallLFSR";

/// Template name of the width-parameterized family.
pub const BIG_TEMPLATE: &str = "BigLFSR";

/// Render a case into its identifier.
///
/// # Examples
///
/// ```
/// use tiptap_core::{format_identifier, Case};
///
/// assert_eq!(format_identifier(&Case::small(3, true)), "SmallLFSR<3, true>");
/// assert_eq!(
///     format_identifier(&Case::big(12, 16, false)),
///     "BigLFSR<12, std::uint16_t, false>"
/// );
/// ```
pub fn format_identifier(case: &Case) -> String {
    match case.family {
        Family::Small => format_small(case.n, case.alternative),
        Family::Big { bitwidth } => format_big(case.n, bitwidth, case.alternative),
    }
}

/// `SmallLFSR<N, alternative>`
pub fn format_small(n: u32, alternative: bool) -> String {
    format!("{SMALL_TEMPLATE}<{n}, {alternative}>")
}

/// `BigLFSR<N, std::uintW_t, alternative>`
pub fn format_big(n: u32, bitwidth: u32, alternative: bool) -> String {
    format!("{BIG_TEMPLATE}<{n}, std::uint{bitwidth}_t, {alternative}>")
}

/// Replace the register length `n` in an identifier with [`PLACEHOLDER`].
///
/// Only the first template parameter is considered: the digits right after
/// the first `<`, terminated by `,` or `>`. An identifier that does not carry
/// `n` there is returned unchanged, which yields a key that will not line up
/// with the other rows of the table.
///
/// # Examples
///
/// ```
/// use tiptap_core::canonicalize;
///
/// assert_eq!(canonicalize("Small<3, true>", 3), "Small<N, true>");
/// assert_eq!(
///     canonicalize("BigLFSR<32, std::uint32_t, false>", 32),
///     "BigLFSR<N, std::uint32_t, false>"
/// );
/// // Mismatched length: left alone.
/// assert_eq!(canonicalize("Small<4, true>", 3), "Small<4, true>");
/// ```
pub fn canonicalize(identifier: &str, n: u32) -> String {
    let Some(open) = identifier.find('<') else {
        return identifier.to_string();
    };
    let start = open + 1;
    let digits = n.to_string();
    let rest = &identifier[start..];

    let matches = rest.starts_with(&digits)
        && matches!(rest[digits.len()..].chars().next(), Some(',') | Some('>'));
    if !matches {
        return identifier.to_string();
    }

    let mut key = String::with_capacity(identifier.len());
    key.push_str(&identifier[..start]);
    key.push_str(PLACEHOLDER);
    key.push_str(&rest[digits.len()..]);
    key
}

/// Column key of a case.
pub fn column_key(case: &Case) -> String {
    canonicalize(&format_identifier(case), case.n)
}

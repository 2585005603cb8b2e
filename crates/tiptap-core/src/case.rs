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

//! Benchmark case descriptors and the case enumerator.
//!
//! A [`Case`] identifies one benchmark variant: the register length `N`, the
//! implementation [`Family`] and the `alternative` flag. [`cases`] walks the
//! fixed parameter space for a single `N`.

use std::iter::FusedIterator;
use std::ops::RangeInclusive;

/// Smallest register length benchmarked by default.
pub const DEFAULT_N_MIN: u32 = 3;

/// Largest register length benchmarked by default.
pub const DEFAULT_N_MAX: u32 = 64;

/// Storage widths benchmarked for the big family by default.
pub const DEFAULT_BITWIDTHS: [u32; 4] = [8, 16, 32, 64];

/// Order in which the `alternative` flag is enumerated.
const ALTERNATIVES: [bool; 2] = [true, false];

/// Implementation family of a benchmarked generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Family {
    /// Width-agnostic implementation.
    Small,
    /// Implementation parameterized by the storage width in bits.
    Big {
        /// Width of one storage word, in bits.
        bitwidth: u32,
    },
}

impl Family {
    /// Storage width, present only for the big family.
    pub fn bitwidth(&self) -> Option<u32> {
        match self {
            Family::Small => None,
            Family::Big { bitwidth } => Some(*bitwidth),
        }
    }
}

/// One benchmark variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Case {
    /// Register length.
    pub n: u32,
    /// Implementation family.
    pub family: Family,
    /// Whether the alternative feedback formulation is used.
    pub alternative: bool,
}

impl Case {
    /// Create a small-family case.
    pub fn small(n: u32, alternative: bool) -> Self {
        Self {
            n,
            family: Family::Small,
            alternative,
        }
    }

    /// Create a big-family case.
    pub fn big(n: u32, bitwidth: u32, alternative: bool) -> Self {
        Self {
            n,
            family: Family::Big { bitwidth },
            alternative,
        }
    }

    /// The same case at a different register length.
    pub fn with_n(self, n: u32) -> Self {
        Self { n, ..self }
    }
}

/// The parameter space walked by the emitter.
///
/// The range is not validated: `n_min > n_max` simply yields no sections and
/// an empty `bitwidths` list drops the big family.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterSpace {
    /// First register length (inclusive).
    pub n_min: u32,
    /// Last register length (inclusive).
    pub n_max: u32,
    /// Storage widths for the big family, in enumeration order.
    pub bitwidths: Vec<u32>,
}

impl Default for ParameterSpace {
    fn default() -> Self {
        Self {
            n_min: DEFAULT_N_MIN,
            n_max: DEFAULT_N_MAX,
            bitwidths: DEFAULT_BITWIDTHS.to_vec(),
        }
    }
}

impl ParameterSpace {
    /// Create a parameter space.
    pub fn new(n_min: u32, n_max: u32, bitwidths: Vec<u32>) -> Self {
        Self {
            n_min,
            n_max,
            bitwidths,
        }
    }

    /// Register lengths in ascending order.
    pub fn n_values(&self) -> RangeInclusive<u32> {
        self.n_min..=self.n_max
    }

    /// Number of sections the emitter produces.
    pub fn section_count(&self) -> usize {
        self.n_values().count()
    }

    /// Number of cases in every section.
    pub fn cases_per_section(&self) -> usize {
        ALTERNATIVES.len() * (1 + self.bitwidths.len())
    }

    /// Whether this space produces no benchmark declarations.
    pub fn is_empty(&self) -> bool {
        self.n_min > self.n_max
    }

    /// Cases for one register length.
    pub fn cases(&self, n: u32) -> Cases<'_> {
        cases(n, &self.bitwidths)
    }
}

/// Enumerate the cases benchmarked at register length `n`.
///
/// Small family first, then every `(bitwidth, alternative)` pair of the big
/// family with bitwidths in the given order. `alternative = true` always
/// comes before `false`.
///
/// # Examples
///
/// ```
/// use tiptap_core::{cases, Case};
///
/// let all: Vec<Case> = cases(3, &[8]).collect();
/// assert_eq!(
///     all,
///     vec![
///         Case::small(3, true),
///         Case::small(3, false),
///         Case::big(3, 8, true),
///         Case::big(3, 8, false),
///     ]
/// );
/// ```
pub fn cases(n: u32, bitwidths: &[u32]) -> Cases<'_> {
    Cases {
        n,
        bitwidths,
        position: 0,
    }
}

/// Lazy iterator over the cases of one register length.
///
/// Cloning restarts nothing; it forks the iterator at its current position.
#[derive(Debug, Clone)]
pub struct Cases<'a> {
    n: u32,
    bitwidths: &'a [u32],
    position: usize,
}

impl Cases<'_> {
    fn total(&self) -> usize {
        ALTERNATIVES.len() * (1 + self.bitwidths.len())
    }
}

impl Iterator for Cases<'_> {
    type Item = Case;

    fn next(&mut self) -> Option<Case> {
        if self.position >= self.total() {
            return None;
        }
        let slot = self.position / ALTERNATIVES.len();
        let alternative = ALTERNATIVES[self.position % ALTERNATIVES.len()];
        self.position += 1;

        let case = match slot {
            0 => Case::small(self.n, alternative),
            _ => Case::big(self.n, self.bitwidths[slot - 1], alternative),
        };
        Some(case)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cases<'_> {}

impl FusedIterator for Cases<'_> {}

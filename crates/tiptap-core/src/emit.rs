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

//! Generated benchmark source.
//!
//! Every register length `N` of a [`ParameterSpace`] becomes one Catch2
//! `TEST_CASE("N=<N>")` holding a `BENCHMARK` declaration per case. The body
//! can be wrapped in the prelude that makes it a complete translation unit.

use crate::case::ParameterSpace;
use crate::error::EmitError;
use crate::naming::format_identifier;
use std::io::Write;
use tracing::debug;

/// Includes and the driver template every generated benchmark calls.
pub const PRELUDE: &str = r#"#include <cstdint>
#include <span>

#include <catch2/benchmark/catch_benchmark.hpp>
#include <catch2/catch_test_macros.hpp>

#include "tiptap/lfsr.h"

namespace {
std::uint32_t
Fnva1aHash(std::span<const char> data)
{
  std::uint32_t state = 0x811c9dc5;
  for (const auto d : data) {
    state ^= d;
    state *= 0x01000193;
  }
  return state;
}

template<typename LFSR>
unsigned
run_impl()
{
  LFSR x;
  const std::uint32_t maxreps = 1'000'000;
  for (std::uint32_t i = 0; i < maxreps; ++i) {
    x.next();
  }
  // hash the state so the loop cannot be optimized away
  const auto tmp = x.state();
  const auto* ptr = reinterpret_cast<const char*>(&tmp);
  return Fnva1aHash(std::span<const char>(ptr, ptr + sizeof(tmp)));
}

}
"#;

/// Last line of a complete translation unit.
pub const TRAILER: &str = "// end of auto generated benchmark\n";

/// Options for [`emit`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmitOptions {
    /// Wrap the sections in [`PRELUDE`] and [`TRAILER`].
    pub prelude: bool,
}

/// Name of the section for register length `n`.
pub fn section_name(n: u32) -> String {
    format!("N={n}")
}

/// One `BENCHMARK` declaration line, without the newline.
///
/// # Examples
///
/// ```
/// assert_eq!(
///     tiptap_core::benchmark_line("SmallLFSR<3, true>"),
///     r#"BENCHMARK("SmallLFSR<3, true>") { return run_impl<SmallLFSR<3, true>>(); };"#
/// );
/// ```
pub fn benchmark_line(identifier: &str) -> String {
    format!("BENCHMARK(\"{identifier}\") {{ return run_impl<{identifier}>(); }};")
}

fn section_start<W: Write + ?Sized>(sink: &mut W, name: &str) -> std::io::Result<()> {
    writeln!(sink)?;
    writeln!(sink, "TEST_CASE(\"{name}\") {{")
}

fn section_end<W: Write + ?Sized>(sink: &mut W, name: &str) -> std::io::Result<()> {
    writeln!(sink, "}}//end of {name}")?;
    writeln!(sink)?;
    writeln!(sink)
}

/// Write one section per register length of `space`.
///
/// Nothing is validated: an inverted range writes nothing and an empty
/// bitwidth list leaves only the small family in each section.
pub fn emit_benchmarks<W: Write + ?Sized>(
    space: &ParameterSpace,
    sink: &mut W,
) -> Result<(), EmitError> {
    for n in space.n_values() {
        let name = section_name(n);
        section_start(sink, &name)?;
        for case in space.cases(n) {
            writeln!(sink, "{}", benchmark_line(&format_identifier(&case)))?;
        }
        section_end(sink, &name)?;
        debug!(section = %name, cases = space.cases_per_section(), "emitted section");
    }
    Ok(())
}

/// Write the sections wrapped in [`PRELUDE`] and [`TRAILER`].
pub fn emit_translation_unit<W: Write + ?Sized>(
    space: &ParameterSpace,
    sink: &mut W,
) -> Result<(), EmitError> {
    sink.write_all(PRELUDE.as_bytes())?;
    emit_benchmarks(space, sink)?;
    sink.write_all(TRAILER.as_bytes())?;
    Ok(())
}

/// Write generated source as selected by `options`.
pub fn emit<W: Write + ?Sized>(
    space: &ParameterSpace,
    options: &EmitOptions,
    sink: &mut W,
) -> Result<(), EmitError> {
    if options.prelude {
        emit_translation_unit(space, sink)
    } else {
        emit_benchmarks(space, sink)
    }
}

/// Generated source as a string.
pub fn emit_to_string(space: &ParameterSpace, options: &EmitOptions) -> Result<String, EmitError> {
    let mut buffer = Vec::new();
    emit(space, options, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| {
        EmitError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

//! The fixed C++ program that generated code is spliced into
//!
//! The template supplies `print_vector` and the three elementwise helpers
//! (`add`, `subtract`, `multiply`). Each helper walks the longer operand and
//! reads missing positions of the shorter one as zero. Arithmetic wraps at
//! eight bits.

use super::{GeneratedProgram, BYTES_TYPE};
use crate::parser::ast::BinOp;

const HEADER: &str = "#include <algorithm>
#include <cstddef>
#include <cstdint>
#include <iostream>
#include <vector>

// Print bytes as space separated hex
void print_vector(std::ostream& os, const std::vector<uint8_t>& vec) {
  for (const auto& byte : vec) {
    os << std::hex << static_cast<int>(byte) << \" \";
  }
  os << std::dec << std::endl;
}
";

/// C++ definition of the elementwise helper for `op`.
pub fn helper_definition(op: BinOp) -> String {
    format!(
        "{ty} {name}(const {ty}& a, const {ty}& b) {{
  {ty} result;
  const size_t size = std::max(a.size(), b.size());
  result.reserve(size);
  for (size_t i = 0; i < size; ++i) {{
    const uint8_t x = i < a.size() ? a[i] : 0;
    const uint8_t y = i < b.size() ? b[i] : 0;
    result.push_back(static_cast<uint8_t>(x {symbol} y));
  }}
  return result;
}}
",
        ty = BYTES_TYPE,
        name = op.helper(),
        symbol = op.symbol(),
    )
}

/// Everything that precedes the global region.
pub fn prelude() -> String {
    let mut prelude = String::from(HEADER);
    for op in [BinOp::Add, BinOp::Sub, BinOp::Mul] {
        prelude.push('\n');
        prelude.push_str(&helper_definition(op));
    }
    prelude
}

/// Assemble the complete C++ translation unit.
pub fn render_program(program: &GeneratedProgram) -> String {
    let mut source = prelude();

    source.push('\n');
    source.push_str(&program.global);
    if !program.global.is_empty() {
        source.push('\n');
    }

    source.push_str("int main() {\n");
    for line in program.entry.lines() {
        if line.is_empty() {
            source.push('\n');
        } else {
            source.push_str("  ");
            source.push_str(line);
            source.push('\n');
        }
    }
    source.push_str("  return 0;\n}\n");
    source
}

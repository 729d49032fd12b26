// Common utilities shared between the user-facing macros
//
// This module contains:
// - duck_expr: Boolean trait expression parsing and probe generation
// - parse_utils: Common parsing helpers

mod duck_expr;
mod parse_utils;

pub use duck_expr::*;
pub use parse_utils::*;

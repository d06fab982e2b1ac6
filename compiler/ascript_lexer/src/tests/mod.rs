//! Lexer tests.
//!
//! - `lexer`: token-level behavior of `tokenize` and `tokenize_file`
//! - `properties`: generated inputs

mod properties;

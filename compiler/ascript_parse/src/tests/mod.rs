//! Parser tests.
//!
//! - `parser`: function headers, statements, error reporting
//! - `lowering`: block graphs produced for `if`, `loop` and calls
//! - `properties`: parse/print determinism over generated programs

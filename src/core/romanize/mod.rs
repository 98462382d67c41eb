//! Sinhala script romanization.
//!
//! Converts Sinhala-script text into a Romanized phonetic representation
//! consumed by the downstream speech model. The mapping tables are expanded
//! once from static rule families and applied by a deterministic two-pass
//! engine; input validation gates text before it reaches the engine.

pub mod engine;
pub mod rules;
pub mod table;
pub mod validate;

pub use table::RomanizationTable;
pub use validate::{SinhalaBlock, TextValidator, ValidationError};

//! Symptom extraction from free text.
//!
//! Pipeline: tokenize, match every dictionary table, drop negated symptom
//! spans, resolve severity, attach attributes, assemble records.

pub mod assembler;
pub mod attributes;
pub mod engine;
pub mod matcher;
pub mod negation;
pub mod severity;
pub mod tokenize;
pub mod types;
pub mod window;

pub use assembler::{display_label, quick_checkin};
pub use engine::SymptomExtractor;
pub use types::{Cue, Span, TokenSpan};

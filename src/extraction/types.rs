use std::ops::Range;

use serde::Serialize;

use crate::dictionary::TableKind;
use crate::models::MatchMethod;

/// Anything covering a contiguous run of tokens.
pub trait TokenSpan {
    /// Token index range `[start, end)`.
    fn token_range(&self) -> Range<usize>;
}

/// A dictionary match produced by the span matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub kind: TableKind,
    /// Canonical category id, e.g. `brain_fog` or `shoulder`.
    pub category: String,
    /// Dictionary surface form that matched.
    pub canonical_form: String,
    /// Verbatim source text.
    pub matched: String,
    /// Byte offsets into the source text.
    pub start: usize,
    pub end: usize,
    pub token_start: usize,
    pub token_end: usize,
    pub method: MatchMethod,
}

impl TokenSpan for Span {
    fn token_range(&self) -> Range<usize> {
        self.token_start..self.token_end
    }
}

/// A recognised cue carrying a resolved value.
#[derive(Debug, Clone, PartialEq)]
pub struct Cue<T> {
    pub token_start: usize,
    pub token_end: usize,
    pub value: T,
}

impl<T> Cue<T> {
    pub fn new(range: Range<usize>, value: T) -> Self {
        Self {
            token_start: range.start,
            token_end: range.end,
            value,
        }
    }

    pub fn from_span(span: &Span, value: T) -> Self {
        Self::new(span.token_range(), value)
    }
}

impl<T> TokenSpan for Cue<T> {
    fn token_range(&self) -> Range<usize> {
        self.token_start..self.token_end
    }
}

//! Span Matcher: dictionary lookup over the token stream.
//!
//! Each table is scanned independently. Within one table overlapping
//! candidates resolve by maximal munch; spans from different tables may
//! overlap freely.

use std::collections::HashMap;

use crate::dictionary::{DictionarySnapshot, Table, TableKind};
use crate::models::MatchMethod;

use super::tokenize::{word_matches, Token};
use super::types::Span;

/// Spans for every table, each list ordered by position.
#[derive(Debug, Clone, Default)]
pub struct MatchSet {
    spans: HashMap<TableKind, Vec<Span>>,
}

impl MatchSet {
    pub fn get(&self, kind: TableKind) -> &[Span] {
        self.spans.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Spans of several tables merged in position order.
    pub fn merged(&self, kinds: &[TableKind]) -> Vec<Span> {
        let mut out: Vec<Span> = kinds.iter().flat_map(|k| self.get(*k).iter().cloned()).collect();
        out.sort_by_key(|s| (s.token_start, s.token_end));
        out
    }

    pub fn total(&self) -> usize {
        self.spans.values().map(Vec::len).sum()
    }
}

/// Match every table of the snapshot.
pub fn match_all(text: &str, tokens: &[Token], snapshot: &DictionarySnapshot) -> MatchSet {
    let spans = TableKind::ALL
        .iter()
        .map(|kind| (*kind, match_table(text, tokens, snapshot.table(*kind))))
        .collect();
    MatchSet { spans }
}

/// Whether only whitespace or a single hyphen separates two tokens of a phrase.
fn phrase_gap(text: &str, left: &Token, right: &Token) -> bool {
    if left.end > right.start || left.sentence != right.sentence {
        return false;
    }
    let gap = text[left.end..right.start].trim();
    gap.is_empty() || gap == "-"
}

/// Match one table, resolving overlaps by maximal munch.
pub fn match_table(text: &str, tokens: &[Token], table: &Table) -> Vec<Span> {
    // (token start, token count, entry)
    let mut candidates = Vec::new();
    for (i, token) in tokens.iter().enumerate() {
        for entry in table.candidates_for(&token.norm) {
            let n = entry.words.len();
            if i + n > tokens.len() {
                continue;
            }
            let fits = (1..n).all(|k| {
                phrase_gap(text, &tokens[i + k - 1], &tokens[i + k])
                    && word_matches(&tokens[i + k].norm, &entry.words[k])
            });
            if fits {
                candidates.push((i, n, entry));
            }
        }
    }

    // Longest first, then leftmost; the stable sort keeps table order on ties.
    candidates.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let mut claimed = vec![false; tokens.len()];
    let mut spans = Vec::new();
    for (i, n, entry) in candidates {
        if claimed[i..i + n].iter().any(|c| *c) {
            continue;
        }
        claimed[i..i + n].iter_mut().for_each(|c| *c = true);

        let start = tokens[i].start;
        let end = tokens[i + n - 1].end;
        spans.push(Span {
            kind: table.kind(),
            category: entry.canonical.clone(),
            canonical_form: entry.surface.clone(),
            matched: text[start..end].to_string(),
            start,
            end,
            token_start: i,
            token_end: i + n,
            method: if n > 1 {
                MatchMethod::Phrase
            } else {
                MatchMethod::Lemma
            },
        });
    }

    spans.sort_by_key(|s| s.token_start);
    spans
}

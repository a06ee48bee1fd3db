//! Negation Resolver.
//!
//! A symptom preceded by a negation cue in the same clause is dropped from
//! the result. A contrastive conjunction ("not tired but achy") or another
//! symptom between the cue and the symptom ends the cue's scope.

use crate::dictionary::TableKind;

use super::matcher::MatchSet;
use super::tokenize::{joined_by_space, Token};
use super::types::{Span, TokenSpan};
use super::window::{self, Direction};

/// Tables whose phrases may contain a negation word without negating a
/// symptom ("not too bad", "not as bad", "won't go away").
const SHADOWING_TABLES: [TableKind; 5] = [
    TableKind::Symptom,
    TableKind::SeverityKeyword,
    TableKind::Comparative,
    TableKind::OngoingCue,
    TableKind::QualifiedDuration,
];

/// Negation cues not swallowed by a longer phrase of another table.
pub fn effective_cues(matches: &MatchSet) -> Vec<Span> {
    let shadows = matches.merged(&SHADOWING_TABLES);
    matches
        .get(TableKind::NegationCue)
        .iter()
        .filter(|cue| {
            !shadows.iter().any(|s| {
                s.token_start <= cue.token_start
                    && cue.token_end <= s.token_end
                    && s.token_end - s.token_start > cue.token_end - cue.token_start
            })
        })
        .cloned()
        .collect()
}

/// Whether the symptom is negated.
///
/// A cue's scope ends at a contrastive conjunction or at another symptom
/// lying between the cue and this one ("no fever, no chills"). Only the run
/// of adjacent cues nearest the symptom counts; an even run cancels out, so
/// "not not tired" keeps the symptom.
pub fn is_negated(
    text: &str,
    tokens: &[Token],
    symptom: &Span,
    cues: &[Span],
    blockers: &[Span],
    window: usize,
) -> bool {
    let scope_start = window::within(tokens, symptom, blockers, window, Direction::Before)
        .iter()
        .map(|b| b.token_range().end)
        .max()
        .unwrap_or(0);

    let in_scope: Vec<&Span> = window::within(tokens, symptom, cues, window, Direction::Before)
        .into_iter()
        .filter(|cue| cue.token_start >= scope_start)
        .collect();

    let Some(mut head) = in_scope.iter().max_by_key(|c| c.token_end).copied() else {
        return false;
    };
    let mut run = 1usize;
    while let Some(prev) = in_scope
        .iter()
        .find(|c| c.token_end == head.token_start && adjacent(text, tokens, c, head))
    {
        run += 1;
        head = *prev;
    }

    run % 2 == 1
}

/// Cues separated only by whitespace ("not not"), not by punctuation ("No, not").
fn adjacent(text: &str, tokens: &[Token], left: &Span, right: &Span) -> bool {
    joined_by_space(text, &tokens[left.token_end - 1], &tokens[right.token_start])
}

/// Symptom spans that survive negation, in position order.
pub fn resolve(text: &str, tokens: &[Token], matches: &MatchSet, window: usize) -> Vec<Span> {
    let cues = effective_cues(matches);
    let blockers = matches.merged(&[TableKind::ContrastiveCue, TableKind::Symptom]);
    matches
        .get(TableKind::Symptom)
        .iter()
        .filter(|s| !is_negated(text, tokens, s, &cues, &blockers, window))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DictionarySnapshot;
    use crate::extraction::matcher::match_all;
    use crate::extraction::tokenize::tokenize;

    fn kept(text: &str) -> Vec<String> {
        let snapshot = DictionarySnapshot::builtin();
        let tokens = tokenize(text);
        let matches = match_all(text, &tokens, &snapshot);
        resolve(text, &tokens, &matches, 4)
            .into_iter()
            .map(|s| s.category)
            .collect()
    }

    #[test]
    fn negation_suppresses() {
        assert!(kept("not tired").is_empty());
        assert_eq!(kept("tired"), vec!["fatigue"]);
        assert!(kept("I wasn't dizzy at all").is_empty());
        assert!(kept("woke up without a headache").is_empty());
    }

    #[test]
    fn contrastive_restores() {
        assert_eq!(kept("not tired but dizzy"), vec!["dizziness"]);
        assert_eq!(kept("no fever, but nauseous"), vec!["nausea"]);
    }

    #[test]
    fn window_is_bounded() {
        assert_eq!(kept("not what I expected honestly, tired"), vec!["fatigue"]);
    }

    #[test]
    fn sentence_end_stops_scope() {
        assert_eq!(kept("Not great. Tired."), vec!["fatigue"]);
    }

    #[test]
    fn double_negation_cancels() {
        assert_eq!(kept("not not tired"), vec!["fatigue"]);
    }

    #[test]
    fn double_negation_needs_adjacent_cues() {
        assert!(kept("No, not tired").is_empty());
        assert!(kept("I wasn't sure, not tired").is_empty());
    }

    #[test]
    fn negated_lists_stay_negated() {
        assert!(kept("no fever, no chills").is_empty());
        assert!(kept("not tired and not dizzy").is_empty());
        assert!(kept("No nausea, no dizziness").is_empty());
    }

    #[test]
    fn earlier_symptom_ends_scope() {
        assert_eq!(kept("I'm not tired, I'm exhausted"), vec!["fatigue"]);
        assert_eq!(kept("no fever, nauseous"), vec!["nausea"]);
    }

    #[test]
    fn negation_inside_phrases_is_not_a_cue() {
        // "not too bad" is a severity phrase, "no energy" a symptom phrase.
        assert_eq!(kept("not too bad, tired"), vec!["fatigue"]);
        assert_eq!(kept("no energy"), vec!["fatigue"]);
    }

    #[test]
    fn each_symptom_scoped_independently() {
        assert_eq!(kept("no nausea today. headache though"), vec!["headache"]);
    }
}

//! Nearest-cue search shared by every attribute pass.

use super::tokenize::Token;
use super::types::TokenSpan;

/// Which side of the anchor a cue may sit on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Before,
    After,
    Both,
}

/// Number of tokens strictly between two spans; 0 when they touch or overlap.
pub fn token_distance(anchor: &impl TokenSpan, other: &impl TokenSpan) -> usize {
    let a = anchor.token_range();
    let o = other.token_range();
    if o.end <= a.start {
        a.start - o.end
    } else if o.start >= a.end {
        o.start - a.end
    } else {
        0
    }
}

fn same_sentence(tokens: &[Token], anchor: &impl TokenSpan, other: &impl TokenSpan) -> bool {
    let a = anchor.token_range();
    let o = other.token_range();
    if a.is_empty() || o.is_empty() || a.end > tokens.len() || o.end > tokens.len() {
        return false;
    }
    let sentence = tokens[a.start].sentence;
    tokens[o.start].sentence == sentence && tokens[o.end - 1].sentence == sentence
}

fn on_side(anchor: &impl TokenSpan, other: &impl TokenSpan, direction: Direction) -> bool {
    let a = anchor.token_range();
    let o = other.token_range();
    match direction {
        Direction::Before => o.end <= a.start,
        Direction::After => o.start >= a.end,
        Direction::Both => true,
    }
}

/// Whether `other` lies within `window` tokens of `anchor`, on the allowed
/// side and in the same sentence.
pub fn in_window(
    tokens: &[Token],
    anchor: &impl TokenSpan,
    other: &impl TokenSpan,
    window: usize,
    direction: Direction,
) -> bool {
    on_side(anchor, other, direction)
        && token_distance(anchor, other) < window
        && same_sentence(tokens, anchor, other)
}

/// All candidates within the window, in their original order.
pub fn within<'a, C: TokenSpan>(
    tokens: &[Token],
    anchor: &impl TokenSpan,
    candidates: &'a [C],
    window: usize,
    direction: Direction,
) -> Vec<&'a C> {
    candidates
        .iter()
        .filter(|c| in_window(tokens, anchor, *c, window, direction))
        .collect()
}

/// The nearest qualifying candidate: closer wins, then earlier.
pub fn nearest<'a, C: TokenSpan>(
    tokens: &[Token],
    anchor: &impl TokenSpan,
    candidates: &'a [C],
    window: usize,
    direction: Direction,
) -> Option<&'a C> {
    within(tokens, anchor, candidates, window, direction)
        .into_iter()
        .min_by_key(|c| (token_distance(anchor, *c), c.token_range().start))
}

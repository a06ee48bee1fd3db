//! Word tokenization over the original text.
//!
//! Tokens keep byte offsets into the source so every downstream match can
//! be sliced back out verbatim. Case folding happens on the token copy,
//! never on the source.

/// A word in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Lowercased form with typographic apostrophes folded to `'`.
    pub norm: String,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    /// Index of the sentence containing this token.
    pub sentence: usize,
}

fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}' | '\u{2018}')
}

fn is_sentence_end(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | ';' | '\n')
}

/// Split text into word tokens.
///
/// Words are runs of alphanumerics; an apostrophe between two alphanumerics
/// stays inside the word ("isn't", "energy's"). Hyphens and slashes split
/// words. Sentence-ending punctuation bumps the sentence counter, except a
/// period between two digits ("7.5").
pub fn tokenize(text: &str) -> Vec<Token> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut tokens = Vec::new();
    let mut sentence = 0usize;
    let mut i = 0usize;

    while i < chars.len() {
        let (offset, c) = chars[i];

        if c.is_alphanumeric() {
            let start = offset;
            let mut norm = String::new();
            let mut j = i;
            while j < chars.len() {
                let (_, cj) = chars[j];
                if cj.is_alphanumeric() {
                    norm.extend(cj.to_lowercase());
                    j += 1;
                } else if is_apostrophe(cj)
                    && j + 1 < chars.len()
                    && chars[j + 1].1.is_alphanumeric()
                    && j > i
                {
                    norm.push('\'');
                    j += 1;
                } else {
                    break;
                }
            }
            let end = chars.get(j).map_or(text.len(), |(o, _)| *o);
            tokens.push(Token {
                norm,
                start,
                end,
                sentence,
            });
            i = j;
            continue;
        }

        if is_sentence_end(c) {
            let decimal_point = c == '.'
                && i > 0
                && chars[i - 1].1.is_ascii_digit()
                && chars.get(i + 1).is_some_and(|(_, n)| n.is_ascii_digit());
            if !decimal_point {
                sentence += 1;
            }
        }
        i += 1;
    }

    tokens
}

/// Normalized words of a dictionary surface form, using the same rules as
/// [`tokenize`].
pub fn surface_words(surface: &str) -> Vec<String> {
    tokenize(surface).into_iter().map(|t| t.norm).collect()
}

/// Base-form candidates for a single normalized word, the word itself first.
///
/// Covers possessive `'s`, plural `s`/`es`/`ies`, past `ed` and
/// progressive `ing`, restoring a silent `e` and undoing a doubled final
/// consonant ("throbbing" → "throb").
pub fn lemma_candidates(word: &str) -> Vec<String> {
    let mut out = vec![word.to_string()];

    if let Some(stem) = word.strip_suffix("'s") {
        push_unique(&mut out, stem.to_string());
        return out;
    }
    if word.chars().count() <= 3 {
        return out;
    }

    if let Some(stem) = word.strip_suffix("ies") {
        push_unique(&mut out, format!("{stem}y"));
    }
    if let Some(stem) = word.strip_suffix("es") {
        push_unique(&mut out, stem.to_string());
    }
    if let Some(stem) = word.strip_suffix('s') {
        if !stem.ends_with('s') {
            push_unique(&mut out, stem.to_string());
        }
    }
    for suffix in ["ed", "ing"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            push_unique(&mut out, stem.to_string());
            push_unique(&mut out, format!("{stem}e"));
            if let Some(undoubled) = undouble(stem) {
                push_unique(&mut out, undoubled);
            }
        }
    }

    out
}

fn push_unique(out: &mut Vec<String>, candidate: String) {
    if candidate.len() >= 2 && !out.contains(&candidate) {
        out.push(candidate);
    }
}

fn undouble(stem: &str) -> Option<String> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let prev = chars.next()?;
    if last == prev && !matches!(last, 'a' | 'e' | 'i' | 'o' | 'u' | 'l' | 's') {
        let mut s = stem.to_string();
        s.pop();
        Some(s)
    } else {
        None
    }
}

/// Whether a text token is an inflection of (or equal to) a dictionary word.
pub fn word_matches(token_norm: &str, word: &str) -> bool {
    token_norm == word || lemma_candidates(token_norm).iter().any(|c| c == word)
}

/// Token index range `[first, last)` of the tokens lying entirely inside
/// the byte range `[start, end)`.
pub fn token_range(tokens: &[Token], start: usize, end: usize) -> Option<(usize, usize)> {
    let first = tokens.iter().position(|t| t.start >= start)?;
    let last = tokens[first..]
        .iter()
        .take_while(|t| t.end <= end)
        .count();
    if last == 0 {
        None
    } else {
        Some((first, first + last))
    }
}

/// Whether the source text between two adjacent tokens is only whitespace.
pub fn joined_by_space(text: &str, left: &Token, right: &Token) -> bool {
    left.end <= right.start && text[left.end..right.start].trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norms(text: &str) -> Vec<String> {
        tokenize(text).into_iter().map(|t| t.norm).collect()
    }

    #[test]
    fn keeps_offsets_into_source() {
        let text = "Burning PAIN, today";
        let tokens = tokenize(text);
        assert_eq!(tokens.len(), 3);
        assert_eq!(&text[tokens[1].start..tokens[1].end], "PAIN");
        assert_eq!(tokens[1].norm, "pain");
    }

    #[test]
    fn apostrophes_stay_inside_words() {
        assert_eq!(norms("I isn't energy's"), vec!["i", "isn't", "energy's"]);
        assert_eq!(norms("didn\u{2019}t"), vec!["didn't"]);
        assert_eq!(norms("'quoted'"), vec!["quoted"]);
    }

    #[test]
    fn hyphens_and_slashes_split() {
        assert_eq!(norms("post-exertional 7/10"), vec!["post", "exertional", "7", "10"]);
    }

    #[test]
    fn sentence_boundaries() {
        let tokens = tokenize("Tired. Pain at 7.5 today! Ok");
        let sentences: Vec<usize> = tokens.iter().map(|t| t.sentence).collect();
        assert_eq!(sentences, vec![0, 1, 1, 1, 1, 1, 2]);
    }

    #[test]
    fn lemma_candidates_cover_inflections() {
        assert!(lemma_candidates("crashed").contains(&"crash".to_string()));
        assert!(lemma_candidates("aching").contains(&"ache".to_string()));
        assert!(lemma_candidates("throbbing").contains(&"throb".to_string()));
        assert!(lemma_candidates("hurts").contains(&"hurt".to_string()));
        assert!(lemma_candidates("energy's").contains(&"energy".to_string()));
        assert!(lemma_candidates("ribs").contains(&"rib".to_string()));
    }

    #[test]
    fn short_words_are_not_stemmed() {
        assert_eq!(lemma_candidates("bed"), vec!["bed".to_string()]);
        assert_eq!(lemma_candidates("its"), vec!["its".to_string()]);
    }

    #[test]
    fn word_matches_exact_and_inflected() {
        assert!(word_matches("pain", "pain"));
        assert!(word_matches("pains", "pain"));
        assert!(!word_matches("paint", "pain"));
    }

    #[test]
    fn token_range_maps_bytes_to_tokens() {
        let text = "pain is at 8/10 today";
        let tokens = tokenize(text);
        let start = text.find("8/10").unwrap();
        assert_eq!(token_range(&tokens, start, start + 4), Some((3, 5)));
        assert_eq!(token_range(&tokens, text.len(), text.len()), None);
    }

    #[test]
    fn empty_and_punctuation_only_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("?!...,,;").is_empty());
    }
}

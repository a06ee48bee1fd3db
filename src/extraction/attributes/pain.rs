//! Pain qualifiers and body location.

use crate::dictionary::{tables, TableKind};
use crate::models::PainDetails;

use crate::extraction::matcher::MatchSet;
use crate::extraction::tokenize::Token;
use crate::extraction::types::{Span, TokenSpan};
use crate::extraction::window::{self, token_distance, Direction};

const QUALIFIER_TABLES: [TableKind; 3] = [
    TableKind::PainQualifier,
    TableKind::PainConsistency,
    TableKind::PainOnset,
];

const WHOLE_BODY: &str = "whole_body";

/// Words before a bare "back" that make it the body part ("my back").
const BACK_OWNERS: &[&str] = &[
    "my", "the", "his", "her", "their", "your", "our", "a", "whole", "entire", "mid",
    "middle",
];

/// Words after a bare "back" that make it the body part ("back hurts").
const BACK_COMPLAINTS: &[&str] = &[
    "pain", "pains", "ache", "aches", "aching", "hurts", "hurt", "hurting", "spasm",
    "spasms", "is", "was", "feels", "felt",
];

pub fn is_pain_symptom(symptom: &str) -> bool {
    tables::PAIN_SYMPTOMS.contains(&symptom)
}

/// Qualifiers for each pain symptom, parallel to `symptoms`.
///
/// Each qualifier attaches to the single nearest pain symptom around it,
/// so "burning pain in my arm and a dull headache" keeps `burning` and
/// `dull` apart. A qualifier overlapping a symptom's own words ("sore
/// throat") does not describe it.
pub fn assign_qualifiers(
    tokens: &[Token],
    symptoms: &[Span],
    matches: &MatchSet,
    window: usize,
) -> Vec<Vec<String>> {
    let mut assigned = vec![Vec::new(); symptoms.len()];
    let pain: Vec<(usize, &Span)> = symptoms
        .iter()
        .enumerate()
        .filter(|(_, s)| is_pain_symptom(&s.category))
        .collect();

    for qualifier in matches.merged(&QUALIFIER_TABLES) {
        let nearest = pain
            .iter()
            .filter(|(_, s)| !overlaps(*s, &qualifier))
            .filter(|(_, s)| window::in_window(tokens, *s, &qualifier, window, Direction::Both))
            .min_by_key(|(_, s)| (token_distance(*s, &qualifier), s.token_start));

        if let Some((idx, _)) = nearest {
            let list = &mut assigned[*idx];
            if !list.contains(&qualifier.category) {
                list.push(qualifier.category.clone());
            }
        }
    }

    assigned
}

/// Location spans, minus an adverbial "back" ("came back", "back to work").
pub fn body_locations(tokens: &[Token], matches: &MatchSet) -> Vec<Span> {
    matches
        .merged(&TableKind::LOCATIONS)
        .into_iter()
        .filter(|loc| !is_adverbial_back(tokens, loc))
        .collect()
}

fn is_adverbial_back(tokens: &[Token], loc: &Span) -> bool {
    if loc.token_end - loc.token_start != 1 || tokens[loc.token_start].norm != "back" {
        return false;
    }
    let same_sentence = |i: usize| tokens[i].sentence == tokens[loc.token_start].sentence;
    let owned = loc.token_start > 0
        && same_sentence(loc.token_start - 1)
        && BACK_OWNERS.contains(&tokens[loc.token_start - 1].norm.as_str());
    let complained = tokens.get(loc.token_end).is_some_and(|next| {
        same_sentence(loc.token_end) && BACK_COMPLAINTS.contains(&next.norm.as_str())
    });
    !owned && !complained
}

fn overlaps(a: &impl TokenSpan, b: &impl TokenSpan) -> bool {
    let a = a.token_range();
    let b = b.token_range();
    a.start < b.end && b.start < a.end
}

/// The single location span describing a pain symptom.
///
/// Nearest wins, except that any specific body part beats a `whole_body`
/// match; equal distances go to the longer span, then the earlier one.
pub fn nearest_location(
    tokens: &[Token],
    symptom: &Span,
    locations: &[Span],
    window: usize,
) -> Option<Span> {
    window::within(tokens, symptom, locations, window, Direction::Both)
        .into_iter()
        .min_by_key(|loc| {
            (
                loc.category == WHOLE_BODY,
                token_distance(symptom, *loc),
                usize::MAX - (loc.token_end - loc.token_start),
                loc.token_start,
            )
        })
        .cloned()
}

/// A more specific symptom id implied by where a generic pain is.
pub fn refine_symptom(symptom: &str, location: &Span) -> Option<&'static str> {
    if symptom != "pain" {
        return None;
    }
    match location.kind {
        TableKind::JointLocation => return Some("joint_pain"),
        TableKind::MuscleLocation => return Some("muscle_pain"),
        _ => {}
    }
    match location.category.as_str() {
        "head" | "forehead" | "temples" => Some("headache"),
        "back" | "lower_back" | "upper_back" => Some("back_pain"),
        "neck" => Some("neck_pain"),
        "chest" => Some("chest_pain"),
        "stomach" => Some("stomach_pain"),
        _ => None,
    }
}

/// Pain details plus the refined symptom id, if the symptom carries any.
pub fn pain_details(
    tokens: &[Token],
    symptom: &Span,
    qualifiers: Vec<String>,
    locations: &[Span],
    window: usize,
) -> (Option<PainDetails>, Option<&'static str>) {
    let location = nearest_location(tokens, symptom, locations, window);
    let refined = location
        .as_ref()
        .and_then(|loc| refine_symptom(&symptom.category, loc));

    if qualifiers.is_empty() && location.is_none() {
        return (None, refined);
    }
    (
        Some(PainDetails {
            qualifiers,
            location: location.map(|l| l.category),
        }),
        refined,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DictionarySnapshot;
    use crate::extraction::matcher::match_all;
    use crate::extraction::tokenize::tokenize;

    struct Parsed {
        symptoms: Vec<Span>,
        qualifiers: Vec<Vec<String>>,
        details: Vec<(Option<PainDetails>, Option<&'static str>)>,
    }

    fn parse(text: &str) -> Parsed {
        let snapshot = DictionarySnapshot::builtin();
        let tokens = tokenize(text);
        let matches = match_all(text, &tokens, &snapshot);
        let symptoms = matches.get(TableKind::Symptom).to_vec();
        let qualifiers = assign_qualifiers(&tokens, &symptoms, &matches, 6);
        let locations = body_locations(&tokens, &matches);
        let details = symptoms
            .iter()
            .zip(qualifiers.iter())
            .map(|(s, q)| pain_details(&tokens, s, q.clone(), &locations, 6))
            .collect();
        Parsed {
            symptoms,
            qualifiers,
            details,
        }
    }

    #[test]
    fn burning_pain_in_shoulders() {
        let parsed = parse("burning pain in my shoulders");
        assert_eq!(parsed.symptoms.len(), 1);
        let (details, refined) = &parsed.details[0];
        let details = details.as_ref().unwrap();
        assert!(details.qualifiers.contains(&"burning".to_string()));
        assert_eq!(details.location.as_deref(), Some("shoulder"));
        assert_eq!(*refined, None);
    }

    #[test]
    fn qualifiers_accumulate() {
        let parsed = parse("sharp, stabbing pain that comes and goes");
        assert_eq!(parsed.qualifiers[0], vec!["sharp", "stabbing", "intermittent"]);
    }

    #[test]
    fn qualifiers_go_to_nearest_pain() {
        let parsed = parse("burning pain and a dull headache");
        assert_eq!(parsed.qualifiers[0], vec!["burning"]);
        assert_eq!(parsed.qualifiers[1], vec!["dull"]);
    }

    #[test]
    fn overlapping_qualifier_ignored() {
        let parsed = parse("sore throat");
        assert_eq!(parsed.symptoms[0].category, "sore_throat");
        assert!(parsed.qualifiers[0].is_empty());
    }

    #[test]
    fn specific_location_beats_whole_body() {
        let parsed = parse("aching all over, pain mostly in my knee");
        let (details, refined) = &parsed.details[1];
        assert_eq!(details.as_ref().unwrap().location.as_deref(), Some("knee"));
        assert_eq!(*refined, Some("joint_pain"));
    }

    #[test]
    fn whole_body_when_nothing_specific() {
        let parsed = parse("pain all over");
        let (details, _) = &parsed.details[0];
        assert_eq!(details.as_ref().unwrap().location.as_deref(), Some("whole_body"));
    }

    #[test]
    fn muscle_location_refines() {
        let parsed = parse("pain in my calves");
        assert_eq!(parsed.details[0].1, Some("muscle_pain"));
    }

    #[test]
    fn bilateral_phrase_wins_over_single_part() {
        let parsed = parse("pain in both knees");
        let (details, _) = &parsed.details[0];
        assert_eq!(details.as_ref().unwrap().location.as_deref(), Some("knees_bilateral"));
    }

    #[test]
    fn no_details_without_cues() {
        let parsed = parse("pain today");
        assert_eq!(parsed.details[0], (None, None));
    }

    #[test]
    fn adverbial_back_is_not_a_location() {
        let parsed = parse("the pain came back after lunch");
        assert_eq!(parsed.details[0], (None, None));
        let parsed = parse("pain since I went back to work");
        assert_eq!(parsed.details[0], (None, None));
    }

    #[test]
    fn body_part_back_still_refines() {
        let parsed = parse("pain in my back");
        assert_eq!(parsed.details[0].1, Some("back_pain"));
        let parsed = parse("pain, back is stiff");
        assert_eq!(parsed.details[0].1, Some("back_pain"));
    }
}

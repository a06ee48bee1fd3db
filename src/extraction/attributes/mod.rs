//! Attribute Extractors.
//!
//! Every slot (duration, time of day, trigger, pain location) is filled at
//! most once per symptom occurrence, by the nearest qualifying cue.

pub mod duration;
pub mod pain;
pub mod trigger;

use std::str::FromStr;

use crate::config::ExtractionConfig;
use crate::dictionary::TableKind;
use crate::models::{PainDetails, SymptomDuration, SymptomTrigger, TimeOfDay};

use super::matcher::MatchSet;
use super::tokenize::Token;
use super::types::{Cue, Span};
use super::window::{self, Direction};

use trigger::TriggerContext;

/// Attributes resolved for one symptom occurrence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymptomAttributes {
    /// Replacement symptom id implied by the pain location.
    pub refined_symptom: Option<&'static str>,
    pub pain_details: Option<PainDetails>,
    pub duration: Option<SymptomDuration>,
    pub time_of_day: Option<TimeOfDay>,
    pub trigger: Option<SymptomTrigger>,
}

fn time_of_day_cues(matches: &MatchSet) -> Vec<Cue<TimeOfDay>> {
    matches
        .get(TableKind::TimeOfDay)
        .iter()
        .filter_map(|s| TimeOfDay::from_str(&s.category).ok().map(|t| Cue::from_span(s, t)))
        .collect()
}

/// Resolve attributes for every symptom, parallel to `symptoms`.
pub fn extract_attributes(
    text: &str,
    tokens: &[Token],
    symptoms: &[Span],
    matches: &MatchSet,
    config: &ExtractionConfig,
) -> Vec<SymptomAttributes> {
    let qualifiers = pain::assign_qualifiers(tokens, symptoms, matches, config.pain_window);
    let locations = pain::body_locations(tokens, matches);
    let durations = duration::duration_cues(text, tokens, matches);
    let times = time_of_day_cues(matches);
    let triggers = TriggerContext {
        text,
        tokens,
        matches,
        max_activity_tokens: config.trigger_activity_tokens,
    }
    .cues();

    let window = config.attribute_window;
    symptoms
        .iter()
        .zip(qualifiers)
        .map(|(symptom, qualifiers)| {
            let (pain_details, refined_symptom) = if pain::is_pain_symptom(&symptom.category) {
                pain::pain_details(tokens, symptom, qualifiers, &locations, config.pain_window)
            } else {
                (None, None)
            };

            SymptomAttributes {
                refined_symptom,
                pain_details,
                duration: window::nearest(tokens, symptom, &durations, window, Direction::Both)
                    .map(|c| c.value.clone()),
                time_of_day: window::nearest(tokens, symptom, &times, window, Direction::Both)
                    .map(|c| c.value),
                trigger: window::nearest(tokens, symptom, &triggers, window, Direction::Both)
                    .map(|c| c.value.clone()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DictionarySnapshot;
    use crate::extraction::matcher::match_all;
    use crate::extraction::tokenize::tokenize;
    use crate::models::{DurationQualifier, DurationUnit, TriggerTimeframe};

    fn attributes(text: &str) -> Vec<(String, SymptomAttributes)> {
        let snapshot = DictionarySnapshot::builtin();
        let tokens = tokenize(text);
        let matches = match_all(text, &tokens, &snapshot);
        let symptoms = matches.get(TableKind::Symptom).to_vec();
        let attrs = extract_attributes(text, &tokens, &symptoms, &matches, &ExtractionConfig::default());
        symptoms.into_iter().map(|s| s.category).zip(attrs).collect()
    }

    #[test]
    fn time_of_day_attaches() {
        let found = attributes("dizzy this morning");
        assert_eq!(found[0].1.time_of_day, Some(TimeOfDay::Morning));
    }

    #[test]
    fn qualified_duration_attaches() {
        let found = attributes("nauseous most of the day");
        assert_eq!(
            found[0].1.duration,
            Some(SymptomDuration::Qualified {
                qualifier: DurationQualifier::MostOf,
                unit: DurationUnit::Days,
            })
        );
    }

    #[test]
    fn nearest_duration_fills_the_slot() {
        let found = attributes("headache for 3 hours, then for 2 days");
        assert_eq!(
            found[0].1.duration,
            Some(SymptomDuration::Quantity { value: 3, unit: DurationUnit::Hours })
        );
    }

    #[test]
    fn ongoing_duration() {
        let found = attributes("the brain fog is nonstop");
        assert_eq!(found[0].1.duration, Some(SymptomDuration::Ongoing));
    }

    #[test]
    fn trigger_before_symptom() {
        let found = attributes("After the walk I crashed");
        assert_eq!(
            found[0].1.trigger,
            Some(SymptomTrigger {
                activity: "walk".into(),
                timeframe: TriggerTimeframe::After,
            })
        );
    }

    #[test]
    fn attributes_stay_in_their_sentence() {
        let found = attributes("Tired. Slept all night after work.");
        assert_eq!(found[0].1, SymptomAttributes::default());
    }

    #[test]
    fn non_pain_symptoms_get_no_pain_details() {
        let found = attributes("sharp dizziness");
        assert_eq!(found[0].1.pain_details, None);
    }

    #[test]
    fn pain_location_refines_symptom() {
        let found = attributes("throbbing pain in my left knee");
        assert_eq!(found[0].1.refined_symptom, Some("joint_pain"));
        let details = found[0].1.pain_details.as_ref().unwrap();
        assert_eq!(details.qualifiers, vec!["throbbing"]);
        assert_eq!(details.location.as_deref(), Some("knee"));
    }
}

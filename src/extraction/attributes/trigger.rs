//! Activity triggers: a timeframe cue followed by an activity.

use std::str::FromStr;

use crate::dictionary::TableKind;
use crate::models::{SymptomTrigger, TriggerTimeframe};

use crate::extraction::matcher::MatchSet;
use crate::extraction::tokenize::{joined_by_space, Token};
use crate::extraction::types::{Cue, Span};

/// Skipped between the cue and the activity.
const DETERMINERS: &[&str] = &[
    "a", "an", "the", "my", "our", "some", "his", "her", "their", "your", "all",
];

/// Words ending a freeform activity.
const ACTIVITY_STOPS: &[&str] = &[
    "and", "but", "or", "so", "then", "i", "i'm", "i've", "because", "when", "which", "with",
    "was", "is", "were", "it", "that", "yesterday", "today", "tonight",
];

/// Words that cannot open an activity ("after a while", "during the night").
const NOT_ACTIVITIES: &[&str] = &[
    "day", "days", "night", "nights", "morning", "afternoon", "evening", "week", "weeks",
    "today", "yesterday", "tonight", "while", "that", "this", "it", "then", "now", "there",
    "here", "what", "which", "nowhere", "bed", "time",
];

/// Inputs shared by every trigger lookup in one text.
pub struct TriggerContext<'a> {
    pub text: &'a str,
    pub tokens: &'a [Token],
    pub matches: &'a MatchSet,
    pub max_activity_tokens: usize,
}

fn starts_at(spans: &[Span], token: usize) -> Option<&Span> {
    spans.iter().find(|s| s.token_start == token)
}

fn covers(spans: &[Span], token: usize) -> bool {
    spans.iter().any(|s| s.token_start <= token && token < s.token_end)
}

impl TriggerContext<'_> {
    /// The activity following a cue ending at token `after`.
    fn activity_after(&self, after: usize) -> Option<(usize, String)> {
        let tokens = self.tokens;
        let sentence = tokens.get(after.checked_sub(1)?)?.sentence;

        let mut first = after;
        while first < tokens.len()
            && tokens[first].sentence == sentence
            && DETERMINERS.contains(&tokens[first].norm.as_str())
        {
            first += 1;
        }
        let head = tokens.get(first).filter(|t| t.sentence == sentence)?;

        if let Some(activity) = starts_at(self.matches.get(TableKind::Activity), first) {
            return Some((activity.token_end, activity.matched.clone()));
        }

        let symptoms = self.matches.get(TableKind::Symptom);
        let times = self.matches.get(TableKind::TimeOfDay);
        let locations = self.matches.merged(&TableKind::LOCATIONS);
        if head.norm.starts_with(|c: char| c.is_ascii_digit())
            || NOT_ACTIVITIES.contains(&head.norm.as_str())
            || covers(symptoms, first)
            || covers(times, first)
            || covers(&locations, first)
        {
            return None;
        }

        let mut last = first;
        for j in first + 1..tokens.len().min(first + self.max_activity_tokens) {
            let next = &tokens[j];
            if next.sentence != sentence
                || !joined_by_space(self.text, &tokens[j - 1], next)
                || ACTIVITY_STOPS.contains(&next.norm.as_str())
                || covers(symptoms, j)
                || covers(times, j)
            {
                break;
            }
            last = j;
        }
        Some((last + 1, self.text[head.start..tokens[last].end].to_string()))
    }

    /// Every trigger cue that is followed by a usable activity.
    ///
    /// The cue range covers the cue words and the activity, so distances
    /// are measured from whichever end is nearer the symptom.
    pub fn cues(&self) -> Vec<Cue<SymptomTrigger>> {
        self.matches
            .get(TableKind::TriggerCue)
            .iter()
            .filter_map(|cue| {
                let timeframe = TriggerTimeframe::from_str(&cue.category).ok()?;
                let (end, activity) = self.activity_after(cue.token_end)?;
                Some(Cue::new(
                    cue.token_start..end,
                    SymptomTrigger {
                        activity,
                        timeframe,
                    },
                ))
            })
            .collect()
    }
}

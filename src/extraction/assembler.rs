//! Symptom Assembler: spans plus resolved attributes become records.

use uuid::Uuid;

use crate::models::{ExtractedSymptom, ExtractionResult, MatchMethod, Severity};

use super::attributes::SymptomAttributes;
use super::types::Span;

/// Build one record per surviving symptom mention.
///
/// Repeated mentions of the same symptom each get their own record and id.
pub fn assemble(
    spans: &[Span],
    severities: &[Severity],
    attributes: Vec<SymptomAttributes>,
) -> Vec<ExtractedSymptom> {
    spans
        .iter()
        .zip(severities)
        .zip(attributes)
        .map(|((span, severity), attrs)| ExtractedSymptom {
            id: Uuid::new_v4(),
            symptom: attrs
                .refined_symptom
                .map_or_else(|| span.category.clone(), str::to_string),
            matched: span.matched.clone(),
            method: span.method,
            start: span.start,
            end: span.end,
            severity: Some(*severity),
            pain_details: attrs.pain_details,
            duration: attrs.duration,
            time_of_day: attrs.time_of_day,
            trigger: attrs.trigger,
        })
        .collect()
}

/// Human-readable label for a symptom id ("brain_fog" → "Brain fog").
pub fn display_label(symptom: &str) -> String {
    if symptom == "pem" {
        return "PEM".to_string();
    }
    let spaced = symptom.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Records for a tap-to-log check-in, without any text parsing.
///
/// The result text is the comma-joined display labels, and each record's
/// `matched` points at its own label inside it.
pub fn quick_checkin(entries: &[(String, Severity)]) -> ExtractionResult {
    let mut text = String::new();
    let mut symptoms = Vec::with_capacity(entries.len());

    for (symptom, severity) in entries {
        if !text.is_empty() {
            text.push_str(", ");
        }
        let label = display_label(symptom);
        let start = text.len();
        text.push_str(&label);

        symptoms.push(ExtractedSymptom {
            id: Uuid::new_v4(),
            symptom: symptom.clone(),
            matched: label,
            method: MatchMethod::QuickCheckin,
            start,
            end: text.len(),
            severity: Some(*severity),
            pain_details: None,
            duration: None,
            time_of_day: None,
            trigger: None,
        });
    }

    ExtractionResult { text, symptoms }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(display_label("brain_fog"), "Brain fog");
        assert_eq!(display_label("pem"), "PEM");
        assert_eq!(display_label("fatigue"), "Fatigue");
        assert_eq!(display_label(""), "");
    }

    #[test]
    fn quick_checkin_offsets_point_at_labels() {
        let result = quick_checkin(&[
            ("fatigue".to_string(), Severity::Severe),
            ("brain_fog".to_string(), Severity::Mild),
        ]);
        assert_eq!(result.text, "Fatigue, Brain fog");
        assert_eq!(result.symptoms.len(), 2);
        for s in &result.symptoms {
            assert_eq!(&result.text[s.start..s.end], s.matched);
            assert_eq!(s.method, MatchMethod::QuickCheckin);
        }
        assert_eq!(result.symptoms[1].severity, Some(Severity::Mild));
    }

    #[test]
    fn quick_checkin_empty() {
        let result = quick_checkin(&[]);
        assert!(result.text.is_empty());
        assert!(result.symptoms.is_empty());
    }

    #[test]
    fn refined_symptom_replaces_category() {
        let span = Span {
            kind: crate::dictionary::TableKind::Symptom,
            category: "pain".into(),
            canonical_form: "pain".into(),
            matched: "Pain".into(),
            start: 0,
            end: 4,
            token_start: 0,
            token_end: 1,
            method: MatchMethod::Lemma,
        };
        let attrs = SymptomAttributes {
            refined_symptom: Some("joint_pain"),
            ..Default::default()
        };
        let records = assemble(&[span.clone(), span], &[Severity::Mild, Severity::Mild], vec![attrs, SymptomAttributes::default()]);
        assert_eq!(records[0].symptom, "joint_pain");
        assert_eq!(records[1].symptom, "pain");
        assert_ne!(records[0].id, records[1].id);
    }
}

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::extraction::tokenize::{lemma_candidates, surface_words};

use super::custom::CustomSymptom;
use super::tables::{self, Group};
use super::DictionaryError;

// ═══════════════════════════════════════════
// Table kinds
// ═══════════════════════════════════════════

/// Every surface-form table the matcher can scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    Symptom,
    PainQualifier,
    PainConsistency,
    PainOnset,
    BodyLocation,
    JointLocation,
    MuscleLocation,
    BilateralLocation,
    Radiation,
    MultiLocation,
    Activity,
    NegationCue,
    ContrastiveCue,
    SeverityKeyword,
    IntensityModifier,
    Comparative,
    TimeOfDay,
    TriggerCue,
    OngoingCue,
    QualifiedDuration,
}

impl TableKind {
    pub const ALL: [TableKind; 20] = [
        Self::Symptom,
        Self::PainQualifier,
        Self::PainConsistency,
        Self::PainOnset,
        Self::BodyLocation,
        Self::JointLocation,
        Self::MuscleLocation,
        Self::BilateralLocation,
        Self::Radiation,
        Self::MultiLocation,
        Self::Activity,
        Self::NegationCue,
        Self::ContrastiveCue,
        Self::SeverityKeyword,
        Self::IntensityModifier,
        Self::Comparative,
        Self::TimeOfDay,
        Self::TriggerCue,
        Self::OngoingCue,
        Self::QualifiedDuration,
    ];

    /// Tables whose matches name a body location.
    pub const LOCATIONS: [TableKind; 6] = [
        Self::BodyLocation,
        Self::JointLocation,
        Self::MuscleLocation,
        Self::BilateralLocation,
        Self::Radiation,
        Self::MultiLocation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Symptom => "symptom",
            Self::PainQualifier => "pain_qualifier",
            Self::PainConsistency => "pain_consistency",
            Self::PainOnset => "pain_onset",
            Self::BodyLocation => "body_location",
            Self::JointLocation => "joint_location",
            Self::MuscleLocation => "muscle_location",
            Self::BilateralLocation => "bilateral_location",
            Self::Radiation => "radiation",
            Self::MultiLocation => "multi_location",
            Self::Activity => "activity",
            Self::NegationCue => "negation_cue",
            Self::ContrastiveCue => "contrastive_cue",
            Self::SeverityKeyword => "severity_keyword",
            Self::IntensityModifier => "intensity_modifier",
            Self::Comparative => "comparative",
            Self::TimeOfDay => "time_of_day",
            Self::TriggerCue => "trigger_cue",
            Self::OngoingCue => "ongoing_cue",
            Self::QualifiedDuration => "qualified_duration",
        }
    }

    fn builtin_groups(&self) -> &'static [Group] {
        match self {
            Self::Symptom => tables::SYMPTOMS,
            Self::PainQualifier => tables::PAIN_QUALIFIERS,
            Self::PainConsistency => tables::PAIN_CONSISTENCY,
            Self::PainOnset => tables::PAIN_ONSET,
            Self::BodyLocation => tables::BODY_LOCATIONS,
            Self::JointLocation => tables::JOINT_LOCATIONS,
            Self::MuscleLocation => tables::MUSCLE_LOCATIONS,
            Self::BilateralLocation => tables::BILATERAL_LOCATIONS,
            Self::Radiation => tables::RADIATION_PATTERNS,
            Self::MultiLocation => tables::MULTI_LOCATIONS,
            Self::Activity => tables::ACTIVITIES,
            Self::NegationCue => tables::NEGATION_CUES,
            Self::ContrastiveCue => tables::CONTRASTIVE_CUES,
            Self::SeverityKeyword => tables::SEVERITY_KEYWORDS,
            Self::IntensityModifier => tables::INTENSITY_MODIFIERS,
            Self::Comparative => tables::COMPARATIVES,
            Self::TimeOfDay => tables::TIMES_OF_DAY,
            Self::TriggerCue => tables::TRIGGER_CUES,
            Self::OngoingCue => tables::ONGOING_CUES,
            Self::QualifiedDuration => tables::QUALIFIED_DURATIONS,
        }
    }
}

// ═══════════════════════════════════════════
// Tables
// ═══════════════════════════════════════════

/// One surface form and the category it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Surface form as written in the table.
    pub surface: String,
    /// Normalized words of `surface`.
    pub words: Vec<String>,
    /// Canonical category id.
    pub canonical: String,
    /// Added by the user rather than shipped.
    pub custom: bool,
}

impl Entry {
    fn new(surface: &str, canonical: &str, custom: bool) -> Option<Self> {
        let words = surface_words(surface);
        if words.is_empty() {
            return None;
        }
        Some(Self {
            surface: surface.trim().to_lowercase(),
            words,
            canonical: canonical.to_string(),
            custom,
        })
    }
}

/// A surface-form table indexed by first word.
#[derive(Debug, Clone)]
pub struct Table {
    kind: TableKind,
    entries: Vec<Entry>,
    by_first_word: HashMap<String, Vec<usize>>,
}

impl Table {
    fn new(kind: TableKind, mut entries: Vec<Entry>) -> Self {
        // Longest surface forms first so phrase candidates are tried before lemmas.
        entries.sort_by(|a, b| b.words.len().cmp(&a.words.len()));

        let mut by_first_word: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, entry) in entries.iter().enumerate() {
            by_first_word.entry(entry.words[0].clone()).or_default().push(idx);
        }

        Self {
            kind,
            entries,
            by_first_word,
        }
    }

    fn from_groups(kind: TableKind, groups: &[Group]) -> Self {
        let entries = groups
            .iter()
            .flat_map(|(canonical, surfaces)| {
                surfaces.iter().filter_map(move |s| Entry::new(s, canonical, false))
            })
            .collect();
        Self::new(kind, entries)
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose first word the given token could be an inflection of,
    /// longest first.
    pub fn candidates_for(&self, token_norm: &str) -> Vec<&Entry> {
        let mut indices: Vec<usize> = lemma_candidates(token_norm)
            .iter()
            .filter_map(|form| self.by_first_word.get(form))
            .flatten()
            .copied()
            .collect();
        indices.sort_unstable();
        indices.dedup();
        indices.into_iter().map(|i| &self.entries[i]).collect()
    }

    /// Canonical id for an exact surface form, if present.
    pub fn lookup(&self, surface: &str) -> Option<&str> {
        let words = surface_words(surface);
        self.entries
            .iter()
            .find(|e| e.words == words)
            .map(|e| e.canonical.as_str())
    }
}

// ═══════════════════════════════════════════
// Snapshot
// ═══════════════════════════════════════════

/// Immutable view of every dictionary table.
///
/// Snapshots are never mutated once built. Adding a custom symptom builds
/// a new snapshot with a bumped `version`.
#[derive(Debug, Clone)]
pub struct DictionarySnapshot {
    version: u64,
    tables: HashMap<TableKind, Table>,
    custom: Vec<CustomSymptom>,
}

impl DictionarySnapshot {
    /// Snapshot of the shipped tables only.
    pub fn builtin() -> Self {
        let tables = TableKind::ALL
            .iter()
            .map(|kind| (*kind, Table::from_groups(*kind, kind.builtin_groups())))
            .collect();
        Self {
            version: 1,
            tables,
            custom: Vec::new(),
        }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn table(&self, kind: TableKind) -> &Table {
        // Every kind is inserted by `builtin` and tables are never removed.
        &self.tables[&kind]
    }

    pub fn custom_symptoms(&self) -> &[CustomSymptom] {
        &self.custom
    }

    /// Build the successor snapshot where `word` maps to `symptom`.
    ///
    /// An existing symptom entry with the same surface words, shipped or
    /// custom, is replaced. Fails with `DuplicateName` when `symptom` is
    /// already the name of a custom symptom.
    pub fn with_custom_symptom(&self, word: &str, symptom: &str) -> Result<Self, DictionaryError> {
        let symptom_id = canonical_symptom_id(symptom);
        if symptom_id.is_empty() {
            return Err(DictionaryError::InvalidEntry(format!(
                "symptom name '{symptom}' has no letters or digits"
            )));
        }
        let entry = Entry::new(word, &symptom_id, true).ok_or_else(|| {
            DictionaryError::InvalidEntry(format!("word '{word}' has no letters or digits"))
        })?;

        if self.custom.iter().any(|c| c.symptom == symptom_id) {
            return Err(DictionaryError::DuplicateName { symptom: symptom_id });
        }

        let mut tables = self.tables.clone();
        let symptoms = self.table(TableKind::Symptom);
        let mut entries: Vec<Entry> = symptoms
            .entries
            .iter()
            .filter(|e| e.words != entry.words)
            .cloned()
            .collect();
        entries.push(entry.clone());
        tables.insert(TableKind::Symptom, Table::new(TableKind::Symptom, entries));

        let mut custom: Vec<CustomSymptom> = self
            .custom
            .iter()
            .filter(|c| surface_words(&c.word) != entry.words)
            .cloned()
            .collect();
        custom.push(CustomSymptom {
            word: entry.surface,
            symptom: symptom_id,
        });

        Ok(Self {
            version: self.version + 1,
            tables,
            custom,
        })
    }
}

/// Normalize a user-supplied symptom name to a snake_case id.
pub fn canonical_symptom_id(name: &str) -> String {
    surface_words(name)
        .iter()
        .map(|w| w.replace('\'', ""))
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

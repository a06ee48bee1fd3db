use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Severity {
    Mild => "mild",
    Moderate => "moderate",
    Severe => "severe",
});

str_enum!(MatchMethod {
    Phrase => "phrase",
    Lemma => "lemma",
    QuickCheckin => "quick_checkin",
});

str_enum!(TimeOfDay {
    Morning => "morning",
    Afternoon => "afternoon",
    Evening => "evening",
    Night => "night",
    AllDay => "all_day",
});

str_enum!(TriggerTimeframe {
    After => "after",
    During => "during",
    From => "from",
});

str_enum!(DurationQualifier {
    All => "all",
    MostOf => "most_of",
});

str_enum!(DurationUnit {
    Minutes => "minutes",
    Hours => "hours",
    Days => "days",
    Weeks => "weeks",
});

impl Severity {
    /// Bucket a 0–10 score: 0–3 mild, 4–7 moderate, 8–10 severe.
    /// Scores above 10 ("11/10") count as severe.
    pub fn from_score(score: f32) -> Self {
        let rounded = score.round();
        if rounded <= 3.0 {
            Self::Mild
        } else if rounded <= 7.0 {
            Self::Moderate
        } else {
            Self::Severe
        }
    }

    /// One bucket up, capped at severe.
    pub fn escalate(self) -> Self {
        match self {
            Self::Mild => Self::Moderate,
            Self::Moderate | Self::Severe => Self::Severe,
        }
    }

    /// One bucket down, floored at mild.
    pub fn deescalate(self) -> Self {
        match self {
            Self::Severe => Self::Moderate,
            Self::Moderate | Self::Mild => Self::Mild,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn severity_round_trip() {
        for (variant, s) in [
            (Severity::Mild, "mild"),
            (Severity::Moderate, "moderate"),
            (Severity::Severe, "severe"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(Severity::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn time_of_day_round_trip() {
        for (variant, s) in [
            (TimeOfDay::Morning, "morning"),
            (TimeOfDay::Afternoon, "afternoon"),
            (TimeOfDay::Evening, "evening"),
            (TimeOfDay::Night, "night"),
            (TimeOfDay::AllDay, "all_day"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(TimeOfDay::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn serde_uses_snake_case_names() {
        let json = serde_json::to_string(&MatchMethod::QuickCheckin).unwrap();
        assert_eq!(json, "\"quick_checkin\"");
        let json = serde_json::to_string(&DurationQualifier::MostOf).unwrap();
        assert_eq!(json, "\"most_of\"");
    }

    #[test]
    fn score_buckets() {
        assert_eq!(Severity::from_score(0.0), Severity::Mild);
        assert_eq!(Severity::from_score(3.0), Severity::Mild);
        assert_eq!(Severity::from_score(3.4), Severity::Mild);
        assert_eq!(Severity::from_score(3.5), Severity::Moderate);
        assert_eq!(Severity::from_score(7.0), Severity::Moderate);
        assert_eq!(Severity::from_score(8.0), Severity::Severe);
        assert_eq!(Severity::from_score(11.0), Severity::Severe);
    }

    #[test]
    fn escalation_is_capped_and_floored() {
        assert_eq!(Severity::Severe.escalate(), Severity::Severe);
        assert_eq!(Severity::Moderate.escalate(), Severity::Severe);
        assert_eq!(Severity::Mild.deescalate(), Severity::Mild);
        assert_eq!(Severity::Moderate.deescalate(), Severity::Mild);
    }

    #[test]
    fn invalid_enum_returns_error() {
        assert!(Severity::from_str("invalid").is_err());
        assert!(TriggerTimeframe::from_str("before").is_err());
        assert!(DurationUnit::from_str("").is_err());
    }
}

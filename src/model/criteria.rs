use serde::{Serialize, Serializer};

use crate::model::round_to;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CriterionKind {
    Salutation,
    MustHaveKeywords,
    GoodToHaveKeywords,
    Flow,
    SpeechRate,
    Vocabulary,
    Clarity,
    Engagement,
}

impl CriterionKind {
    pub fn name(self) -> &'static str {
        match self {
            CriterionKind::Salutation => "Salutation quality",
            CriterionKind::MustHaveKeywords => "Core details (must-have keywords)",
            CriterionKind::GoodToHaveKeywords => "Additional flavour (good-to-have details)",
            CriterionKind::Flow => "Flow / structure",
            CriterionKind::SpeechRate => "Speech rate (WPM)",
            CriterionKind::Vocabulary => "Vocabulary richness (Type–Token Ratio)",
            CriterionKind::Clarity => "Clarity (filler words)",
            CriterionKind::Engagement => "Engagement / positivity",
        }
    }
}

/// Order in which criteria are evaluated and reported.
pub fn criterion_order() -> &'static [CriterionKind] {
    &[
        CriterionKind::Salutation,
        CriterionKind::MustHaveKeywords,
        CriterionKind::GoodToHaveKeywords,
        CriterionKind::Flow,
        CriterionKind::SpeechRate,
        CriterionKind::Vocabulary,
        CriterionKind::Clarity,
        CriterionKind::Engagement,
    ]
}

/// Ordered `id -> value` pairs that serialize as a JSON object in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V>(pub Vec<(&'static str, V)>);

impl<V> OrderedMap<V> {
    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(k, v)| (*k, v)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalutationDetails {
    pub tier: &'static str,
    pub matched_phrase: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotDetails {
    pub slots: OrderedMap<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowDetails {
    pub stage_positions: OrderedMap<Option<usize>>,
    pub is_ordered: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeechRateDetails {
    pub wpm: Option<f64>,
    pub bucket: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub not_applicable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VocabularyDetails {
    pub ttr: f64,
    pub bucket: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClarityDetails {
    pub filler_count: usize,
    pub rate_per_100_words: f64,
    pub bucket: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementDetails {
    pub positivity_index_0_1: f64,
    pub bucket: Option<&'static str>,
    pub positive_hits: usize,
    pub negative_hits: usize,
}

/// Per-scorer diagnostics. Serialized as the bare inner object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CriterionDetails {
    Salutation(SalutationDetails),
    Slots(SlotDetails),
    Flow(FlowDetails),
    SpeechRate(SpeechRateDetails),
    Vocabulary(VocabularyDetails),
    Clarity(ClarityDetails),
    Engagement(EngagementDetails),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionScore {
    #[serde(skip)]
    pub kind: CriterionKind,
    pub name: &'static str,
    pub max_score: f64,
    pub score: f64,
    pub details: CriterionDetails,
    pub score_normalized_0_1: Option<f64>,
    /// Inapplicable criteria still report a score but drop out of the denominator.
    #[serde(skip)]
    pub applicable: bool,
}

impl CriterionScore {
    pub fn new(kind: CriterionKind, max_score: f64, score: f64, details: CriterionDetails) -> Self {
        debug_assert!(
            (0.0..=max_score).contains(&score),
            "{} scored {score} outside 0..={max_score}",
            kind.name()
        );
        let score_normalized_0_1 = if max_score != 0.0 {
            Some(round_to(score / max_score, 3))
        } else {
            None
        };
        Self {
            kind,
            name: kind.name(),
            max_score,
            score,
            details,
            score_normalized_0_1,
            applicable: true,
        }
    }

    pub fn not_applicable(mut self) -> Self {
        self.applicable = false;
        self
    }
}

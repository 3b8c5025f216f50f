//! Static scoring tables for the self-introduction rubric.
//!
//! Every table is a `'static` slice, so a [`Rubric`] is `Copy`-cheap to pass
//! around and safe to share between threads without synchronization.

pub mod buckets;
pub mod defs;

pub use buckets::{Bucket, BucketTable, first_match};

#[derive(Debug, Clone, Copy)]
pub struct SalutationTier {
    pub name: &'static str,
    pub score: f64,
    pub phrases: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct SalutationRule {
    /// Checked in order; the first tier with a matching phrase wins.
    pub tiers: &'static [SalutationTier],
    pub max_score: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct Slot {
    pub id: &'static str,
    pub triggers: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct SlotGroup {
    pub slots: &'static [Slot],
    pub points_per_slot: f64,
}

impl SlotGroup {
    pub fn max_score(&self) -> f64 {
        self.points_per_slot * self.slots.len() as f64
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FlowStage {
    pub id: &'static str,
    pub triggers: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct FlowRule {
    pub stages: &'static [FlowStage],
    pub max_score: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct FillerRule {
    /// Entries containing a space are phrases; the rest are single words.
    pub fillers: &'static [&'static str],
    pub buckets: BucketTable,
}

impl FillerRule {
    pub fn phrases(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fillers.iter().copied().filter(|f| f.contains(' '))
    }

    pub fn words(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fillers.iter().copied().filter(|f| !f.contains(' '))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EngagementRule {
    pub positive: &'static [&'static str],
    pub negative: &'static [&'static str],
    /// Index used when the transcript has no sentiment-bearing words at all.
    pub neutral_index: f64,
    pub buckets: BucketTable,
}

#[derive(Debug, Clone, Copy)]
pub struct Rubric {
    pub salutation: SalutationRule,
    pub must_have: SlotGroup,
    pub good_to_have: SlotGroup,
    pub flow: FlowRule,
    pub speech_rate: BucketTable,
    pub vocabulary: BucketTable,
    pub clarity: FillerRule,
    pub engagement: EngagementRule,
}

impl Rubric {
    pub fn intro_v1() -> &'static Rubric {
        &defs::INTRO_RUBRIC_V1
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/rubric/tests.rs"]
mod tests;

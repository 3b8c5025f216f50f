/// Returns the first item accepted by `pred`, scanning in declaration order.
///
/// Every tiered rule in the rubric (salutation tiers, numeric bucket tables)
/// resolves through here so ties always go to the earlier entry.
pub fn first_match<I, F>(items: I, mut pred: F) -> Option<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> bool,
{
    for item in items {
        if pred(&item) {
            return Some(item);
        }
    }
    None
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bucket {
    pub low: f64,
    pub high: f64,
    pub score: f64,
    pub label: &'static str,
}

impl Bucket {
    /// Inclusive on both ends.
    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value <= self.high
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BucketTable {
    pub buckets: &'static [Bucket],
    pub max_score: f64,
}

impl BucketTable {
    /// Buckets may leave gaps (e.g. 0.89..0.9); a value in a gap matches nothing.
    pub fn classify(&self, value: f64) -> Option<&'static Bucket> {
        first_match(self.buckets.iter(), |b| b.contains(value))
    }

    pub fn score(&self, value: f64) -> (f64, Option<&'static str>) {
        match self.classify(value) {
            Some(bucket) => (bucket.score, Some(bucket.label)),
            None => (0.0, None),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/rubric/buckets.rs"]
mod tests;

use std::collections::BTreeMap;

use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use strum::{EnumCount, IntoEnumIterator};
use tracing::warn;

use super::Segment;
use super::key::resolve_keys;

/// Per-segment sums of ranks across all levels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    values: [u32; Segment::COUNT],
}

impl Totals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, segment: Segment) -> u32 {
        self.values[segment.index()]
    }

    pub(crate) fn add(&mut self, segment: Segment, value: u32) {
        self.values[segment.index()] += value;
    }

    /// Totals in fixed segment order
    pub fn iter(&self) -> impl Iterator<Item = (Segment, u32)> + '_ {
        Segment::iter().map(move |segment| (segment, self.get(segment)))
    }

    pub fn sum(&self) -> u32 {
        self.values.iter().sum()
    }

    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|&v| v == 0)
    }

    /// Segments by total, highest first. Ties keep fixed segment order.
    pub fn ranked(&self) -> Vec<(Segment, u32)> {
        let mut ranked: Vec<(Segment, u32)> = self.iter().collect();
        // sort_by is stable, so equal totals stay in segment order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// The `n` highest-scoring segments, ignoring segments with no score
    pub fn top(&self, n: usize) -> Vec<(Segment, u32)> {
        self.ranked()
            .into_iter()
            .filter(|&(_, total)| total > 0)
            .take(n)
            .collect()
    }
}

impl Serialize for Totals {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Segment::COUNT))?;
        for (segment, total) in self.iter() {
            map.serialize_entry(segment.name(), &total)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Totals {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = BTreeMap::<String, u32>::deserialize(deserializer)?;
        let mut totals = Totals::new();
        let mut assigned = [false; Segment::COUNT];
        for (segment, key, value) in resolve_keys(raw, Segment::from_key, Segment::name, "segment") {
            if std::mem::replace(&mut assigned[segment.index()], true) {
                warn!("Ignoring total {:?}: {} was already read", key, segment);
                continue;
            }
            totals.values[segment.index()] = value;
        }
        Ok(totals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals_from(values: [u32; 8]) -> Totals {
        Totals { values }
    }

    #[test]
    fn test_ranked_breaks_ties_by_segment_order() {
        let totals = totals_from([10, 30, 30, 5, 0, 10, 0, 1]);
        let order: Vec<Segment> = totals.ranked().into_iter().map(|(s, _)| s).collect();
        assert_eq!(
            order,
            vec![
                Segment::PrivateResale,
                Segment::Landed,
                Segment::Hdb,
                Segment::Referral,
                Segment::NewLaunch,
                Segment::SocialMedia,
                Segment::TopProjects,
                Segment::IndusComm,
            ]
        );
    }

    #[test]
    fn test_top_skips_zero_totals() {
        let totals = totals_from([0, 0, 4, 0, 0, 0, 0, 0]);
        assert_eq!(totals.top(3), vec![(Segment::Landed, 4)]);
        assert!(Totals::new().top(3).is_empty());
        assert!(Totals::new().is_zero());
    }

    #[test]
    fn test_totals_serialize_in_segment_order() {
        let totals = totals_from([1, 2, 3, 4, 5, 6, 7, 8]);
        let json = serde_json::to_string(&totals).unwrap();
        assert_eq!(
            json,
            r#"{"HDB":1,"Private Resale":2,"Landed":3,"New Launch":4,"Top Projects":5,"Referral":6,"Indus/Comm":7,"Social Media":8}"#
        );
        let back: Totals = serde_json::from_str(&json).unwrap();
        assert_eq!(back, totals);
        assert_eq!(back.sum(), 36);
    }

    #[test]
    fn test_deserialize_prefers_exact_segment_name() {
        let back: Totals = serde_json::from_str(r#"{"hdb": 1, "HDB": 9, "landed": 4}"#).unwrap();
        assert_eq!(back.get(Segment::Hdb), 9);
        assert_eq!(back.get(Segment::Landed), 4);
        assert_eq!(back.sum(), 13);
    }
}

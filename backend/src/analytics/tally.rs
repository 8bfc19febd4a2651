//! Accumulator and ranking helpers shared by the aggregators.
//!
//! Reports list groups in the order they were first seen and break ranking
//! ties the same way, so every helper here is order-preserving.

use std::cmp::Ordering;
use std::collections::HashMap;

/// Insertion-ordered map from a name to an accumulator.
#[derive(Debug, Clone)]
pub struct Tally<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> Default for Tally<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V> Tally<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the accumulator for `key`, creating it with `init` on first sight.
    pub fn upsert_with(&mut self, key: &str, init: impl FnOnce() -> V) -> &mut V {
        let position = match self.index.get(key) {
            Some(&position) => position,
            None => {
                self.entries.push((key.to_string(), init()));
                let position = self.entries.len() - 1;
                self.index.insert(key.to_string(), position);
                position
            }
        };
        &mut self.entries[position].1
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&position| &self.entries[position].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn into_entries(self) -> Vec<(String, V)> {
        self.entries
    }
}

impl<V: Default> Tally<V> {
    pub fn upsert(&mut self, key: &str) -> &mut V {
        self.upsert_with(key, V::default)
    }
}

/// Rounds to two decimals, sending exact halves to the even neighbour
/// (`0.125` becomes `0.12`, `0.375` becomes `0.38`).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// `value / count` rounded to two decimals, or 0 when `count` is 0.
pub fn average(value: f64, count: u32) -> f64 {
    if count > 0 {
        round2(value / f64::from(count))
    } else {
        0.0
    }
}

/// `part / whole * 100` rounded to two decimals, or 0 when `whole` is 0.
pub fn percentage(part: u32, whole: u32) -> f64 {
    if whole > 0 {
        round2(f64::from(part) / f64::from(whole) * 100.0)
    } else {
        0.0
    }
}

/// Position of the first element holding the maximum key.
pub fn first_max_position<T, K: Ord>(items: &[T], key: impl Fn(&T) -> K) -> Option<usize> {
    let mut best: Option<(usize, K)> = None;
    for (position, item) in items.iter().enumerate() {
        let k = key(item);
        match &best {
            Some((_, current)) if k <= *current => {}
            _ => best = Some((position, k)),
        }
    }
    best.map(|(position, _)| position)
}

/// First element holding the maximum key.
pub fn first_max_by_key<T, K: Ord>(items: &[T], key: impl Fn(&T) -> K) -> Option<&T> {
    first_max_position(items, key).map(|position| &items[position])
}

/// First element holding the minimum key.
pub fn first_min_by_key<T, K: Ord>(items: &[T], key: impl Fn(&T) -> K) -> Option<&T> {
    let mut best: Option<(&T, K)> = None;
    for item in items {
        let k = key(item);
        match &best {
            Some((_, current)) if k >= *current => {}
            _ => best = Some((item, k)),
        }
    }
    best.map(|(item, _)| item)
}

/// Stable descending sort; equal keys keep their encounter order.
pub fn rank_desc<T, K: Ord>(items: &mut [T], key: impl Fn(&T) -> K) {
    items.sort_by(|a, b| key(b).cmp(&key(a)));
}

/// Stable descending sort on a float key.
pub fn rank_desc_f64<T>(items: &mut [T], key: impl Fn(&T) -> f64) {
    items.sort_by(|a, b| key(b).partial_cmp(&key(a)).unwrap_or(Ordering::Equal));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tally_keeps_first_seen_order() {
        let mut tally: Tally<u32> = Tally::new();
        for team in ["Perú", "Chile", "Perú", "Bolivia", "Chile", "Perú"] {
            *tally.upsert(team) += 1;
        }

        let entries = tally.into_entries();
        assert_eq!(
            entries,
            vec![
                ("Perú".to_string(), 3),
                ("Chile".to_string(), 2),
                ("Bolivia".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_first_max_and_min_prefer_earliest() {
        let values = [(1, "a"), (5, "b"), (5, "c"), (1, "d")];
        assert_eq!(first_max_by_key(&values, |v| v.0).unwrap().1, "b");
        assert_eq!(first_min_by_key(&values, |v| v.0).unwrap().1, "a");
        assert!(first_max_by_key(&[] as &[(i32, &str)], |v| v.0).is_none());
    }

    #[test]
    fn test_rank_desc_is_stable() {
        let mut values = vec![(1, "a"), (3, "b"), (1, "c"), (3, "d")];
        rank_desc(&mut values, |v| v.0);
        assert_eq!(values, vec![(3, "b"), (3, "d"), (1, "a"), (1, "c")]);
    }

    #[test]
    fn test_zero_denominators_yield_zero() {
        assert_eq!(average(10.0, 0), 0.0);
        assert_eq!(percentage(3, 0), 0.0);
        assert_eq!(percentage(1, 3), 33.33);
        assert_eq!(average(7.0, 3), 2.33);
    }

    #[test]
    fn test_halves_round_to_even() {
        assert_eq!(average(1.0, 8), 0.12);
        assert_eq!(average(3.0, 8), 0.38);
        assert_eq!(average(5.0, 8), 0.62);
        assert_eq!(round2(2.675), 2.67);
        assert_eq!(round2(-0.125), -0.12);
        assert_eq!(percentage(1, 3), 33.33);
    }
}

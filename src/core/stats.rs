//! Column aggregates shared by the reports.
//!
//! Tie-breaks are fixed: `value_counts` keeps first-seen order among equal
//! counts, so `mode` returns the earliest value in table order.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Count distinct values, most frequent first.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut index: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();

    for v in values {
        match index.get(&v) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(v.clone(), counts.len());
                counts.push((v, 1));
            }
        }
    }

    // stable: equal counts stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    value_counts(values).into_iter().next().map(|(v, _)| v)
}

/// Most frequent (start, end) pair. Ties go to the smallest pair in key order.
pub fn most_common_pair<'a, I>(pairs: I) -> Option<((&'a str, &'a str), usize)>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut groups: BTreeMap<(&'a str, &'a str), usize> = BTreeMap::new();
    for p in pairs {
        *groups.entry(p).or_insert(0) += 1;
    }

    groups
        .into_iter()
        .fold(None, |best: Option<((&'a str, &'a str), usize)>, (pair, n)| match best {
            Some((_, top)) if top >= n => best,
            _ => Some((pair, n)),
        })
}

pub fn min_max(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values.into_iter().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

//! Frequency counting with a fixed tie rule: among equally frequent values
//! the one seen first in row order wins.

use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;

/// A value and the number of rows holding it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Top<T> {
    pub value: T,
    pub count: usize,
}

/// Count each distinct value, sorted by descending count. Ties keep
/// first-seen order.
pub fn value_counts<T, I>(values: I) -> Vec<Top<T>>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + Clone,
{
    let mut index: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<Top<T>> = Vec::new();

    for v in values {
        match index.get(&v) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(v.clone(), counts.len());
                counts.push(Top { value: v, count: 1 });
            }
        }
    }

    // sort_by is stable
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Most frequent value, `None` for an empty input.
pub fn mode<T, I>(values: I) -> Option<Top<T>>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + Clone,
{
    value_counts(values).into_iter().next()
}

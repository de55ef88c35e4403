use std::collections::BTreeMap;

use super::digits::locate_digit_offsets;

/// How often each offset came up as a shared digit position across every
/// ordered pair of names.
///
/// Each pair is visited in both directions, so symmetric evidence is counted
/// twice. Counts are plain occurrence counts.
pub(crate) fn offset_frequencies<S: AsRef<str>>(names: &[S]) -> BTreeMap<usize, usize> {
    let mut counts = BTreeMap::new();
    for (i, a) in names.iter().enumerate() {
        for (j, b) in names.iter().enumerate() {
            if i == j {
                continue;
            }
            let (a, b): (&str, &str) = (a.as_ref(), b.as_ref());
            for offset in locate_digit_offsets(a, b) {
                *counts.entry(offset).or_insert(0) += 1;
            }
        }
    }
    counts
}

/// Byte offset of the digit run that most likely holds the episode number.
///
/// Fewer than two names, or names without any shared digit position, give 0.
/// When several offsets share the top count the rightmost one wins.
pub(crate) fn select_episode_index<S: AsRef<str>>(names: &[S]) -> usize {
    if names.len() < 2 {
        return 0;
    }
    pick_most_frequent(&offset_frequencies(names))
}

pub(crate) fn pick_most_frequent(counts: &BTreeMap<usize, usize>) -> usize {
    counts
        .iter()
        .max_by(|(left_offset, left), (right_offset, right)| {
            left.cmp(right).then(left_offset.cmp(right_offset))
        })
        .map(|(offset, _)| *offset)
        .unwrap_or(0)
}

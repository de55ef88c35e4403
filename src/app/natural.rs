use std::cmp::Ordering;
use std::path::Path;

use super::digits::digit_run_end;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Direction {
    #[default]
    Ascending,
    Descending,
}

/// Orders names the way people number episodes: digit runs compare by value,
/// everything else byte by byte.
///
/// `Show - 2.mkv` sorts before `Show - 11.mkv` because the comparison reaches
/// `2` and `11` as whole numbers instead of comparing `'2'` with `'1'`.
/// Only identical inputs compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct NaturalOrder {
    direction: Direction,
}

impl NaturalOrder {
    pub(crate) fn ascending() -> Self {
        Self {
            direction: Direction::Ascending,
        }
    }

    pub(crate) fn descending() -> Self {
        Self {
            direction: Direction::Descending,
        }
    }

    pub(crate) fn new(reverse: bool) -> Self {
        if reverse {
            Self::descending()
        } else {
            Self::ascending()
        }
    }

    pub(crate) fn compare(&self, a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> Ordering {
        let ordering = natural_cmp(a.as_ref(), b.as_ref());
        match self.direction {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }

    pub(crate) fn less(&self, a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    pub(crate) fn compare_paths(&self, a: &Path, b: &Path) -> Ordering {
        self.compare(
            a.to_string_lossy().as_bytes(),
            b.to_string_lossy().as_bytes(),
        )
    }
}

fn natural_cmp(a: &[u8], b: &[u8]) -> Ordering {
    let mut idx = 0;
    while idx < a.len() && idx < b.len() {
        if a[idx].is_ascii_digit() && b[idx].is_ascii_digit() {
            let left = &a[idx..digit_run_end(a, idx)];
            let right = &b[idx..digit_run_end(b, idx)];
            let ordering = compare_digit_runs(left, right);
            if ordering != Ordering::Equal {
                return ordering;
            }
        }

        // Equal values can still differ in leading zeros.
        if a[idx] != b[idx] {
            return a[idx].cmp(&b[idx]);
        }

        idx += 1;
    }

    a.len().cmp(&b.len())
}

/// Numeric comparison of two digit runs of any length.
pub(crate) fn compare_digit_runs(left: &[u8], right: &[u8]) -> Ordering {
    let left = trim_leading_zeros(left);
    let right = trim_leading_zeros(right);
    left.len().cmp(&right.len()).then_with(|| left.cmp(right))
}

fn trim_leading_zeros(digits: &[u8]) -> &[u8] {
    let first = digits
        .iter()
        .position(|digit| *digit != b'0')
        .unwrap_or(digits.len());
    &digits[first..]
}

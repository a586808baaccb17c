// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Lazy k-subsets enumeration.
use std::iter::FusedIterator;

/// Returns the binomial coefficient for n choose k.
pub fn nck(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }

    // nck(n, k) = nck(n, n - k), multiply and divide on the shorter side.
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

/// An iterator over all the k-subsets of a slice.
///
/// Subsets are yielded in lexicographic order of their positions, each subset
/// keeps the relative order of the items in the input slice:
///
/// ```
/// # use shortstack_eval::combinations;
/// let pairs = combinations(&['a', 'b', 'c'], 2).collect::<Vec<_>>();
/// assert_eq!(pairs, vec![vec!['a', 'b'], vec!['a', 'c'], vec!['b', 'c']]);
/// ```
///
/// The iterator borrows the items and can be cloned to restart the
/// enumeration from its current position.
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    remaining: usize,
}

/// Creates an iterator over all k-subsets of `items`.
///
/// With `k == 0` there is one empty subset, with `k > items.len()` none.
pub fn combinations<T: Copy>(items: &[T], k: usize) -> Combinations<'_, T> {
    Combinations {
        items,
        indices: (0..k).collect(),
        remaining: nck(items.len(), k),
    }
}

impl<T: Copy> Combinations<'_, T> {
    /// Moves the indices to the next subset.
    fn advance(&mut self) {
        let (n, k) = (self.items.len(), self.indices.len());

        // Find the rightmost index that can still move right.
        if let Some(pos) = (0..k).rev().find(|&i| self.indices[i] < n - k + i) {
            self.indices[pos] += 1;
            for i in pos + 1..k {
                self.indices[i] = self.indices[i - 1] + 1;
            }
        }
    }
}

impl<T: Copy> Iterator for Combinations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let subset = self.indices.iter().map(|&i| self.items[i]).collect();

        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }

        Some(subset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Copy> ExactSizeIterator for Combinations<'_, T> {}

impl<T: Copy> FusedIterator for Combinations<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn binomials() {
        assert_eq!(nck(5, 0), 1);
        assert_eq!(nck(5, 5), 1);
        assert_eq!(nck(4, 2), 6);
        assert_eq!(nck(5, 3), 10);
        assert_eq!(nck(9, 5), 126);
        assert_eq!(nck(52, 5), 2_598_960);
        assert_eq!(nck(3, 4), 0);
        assert_eq!(nck(0, 0), 1);
    }

    #[test]
    fn all_subsets() {
        let items = (0..9).collect::<Vec<u32>>();

        for k in 0..=9 {
            let subsets = combinations(&items, k).collect::<Vec<_>>();
            assert_eq!(subsets.len(), nck(9, k));

            let unique = subsets.iter().cloned().collect::<HashSet<_>>();
            assert_eq!(unique.len(), subsets.len());

            for subset in &subsets {
                assert_eq!(subset.len(), k);
                assert!(subset.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }

    #[test]
    fn keeps_input_order() {
        let subsets = combinations(&[3, 1, 2], 2).collect::<Vec<_>>();
        assert_eq!(subsets, vec![vec![3, 1], vec![3, 2], vec![1, 2]]);
    }

    #[test]
    fn edge_sizes() {
        let items = [1, 2, 3];
        assert_eq!(combinations(&items, 0).collect::<Vec<_>>(), vec![vec![]]);
        assert_eq!(combinations(&items, 3).collect::<Vec<_>>(), vec![vec![1, 2, 3]]);
        assert_eq!(combinations(&items, 4).count(), 0);
        assert_eq!(combinations::<u8>(&[], 0).count(), 1);
        assert_eq!(combinations::<u8>(&[], 1).count(), 0);
    }

    #[test]
    fn restartable() {
        let items = ['a', 'b', 'c', 'd'];
        let iter = combinations(&items, 2);
        assert_eq!(iter.len(), 6);

        let first = iter.clone().collect::<Vec<_>>();
        let second = iter.collect::<Vec<_>>();
        assert_eq!(first, second);

        let mut iter = combinations(&items, 2);
        iter.next();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.clone().count(), 5);
        assert_eq!(iter.count(), 5);
    }
}

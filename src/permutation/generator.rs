//! Lazy permutation generator.
//!
//! # Algorithm
//!
//! Recursive decomposition: take each element in turn as the head, then
//! permute the remaining elements behind it. The recursion is unrolled into
//! an explicit stack of chosen positions, one entry per depth:
//!
//! ```text
//! advance: pop the deepest choice, move it to the next unused position;
//!          if none is left, pop again. Then refill the deeper levels with
//!          the lowest unused positions.
//! ```
//!
//! Output is lexicographic over input positions. Only the current
//! permutation is held in memory, and a consumer may stop pulling at any
//! point without further work being done.
//!
//! # Complexity
//!
//! O(n) amortized per permutation plus the O(n) clone of the yielded `Vec`.

use std::iter::FusedIterator;

use super::count::checked_factorial;

/// Iterator over every ordering of a sequence.
///
/// Yields exactly `n!` permutations (a single empty permutation for `n = 0`).
/// Elements are identified by position, so equal values in the input are
/// permuted as distinct elements.
///
/// # Examples
///
/// ```
/// use u_tsp::permutation::Permutations;
///
/// let all: Vec<Vec<char>> = Permutations::new(vec!['a', 'b', 'c']).collect();
/// assert_eq!(all.len(), 6);
/// assert_eq!(all[0], vec!['a', 'b', 'c']);
/// assert_eq!(all[1], vec!['a', 'c', 'b']);
/// assert_eq!(all[5], vec!['c', 'b', 'a']);
/// ```
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    items: Vec<T>,
    chosen: Vec<usize>,
    used: Vec<bool>,
    phase: Phase,
    remaining: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Fresh,
    Active,
    Exhausted,
}

impl<T: Clone> Permutations<T> {
    /// Creates a generator over the orderings of `items`.
    pub fn new(items: Vec<T>) -> Self {
        let n = items.len();
        Self {
            items,
            chosen: Vec::with_capacity(n),
            used: vec![false; n],
            phase: Phase::Fresh,
            remaining: checked_factorial(n),
        }
    }

    /// Number of elements being permuted.
    pub fn arity(&self) -> usize {
        self.items.len()
    }

    fn next_unused(&self, from: usize) -> Option<usize> {
        (from..self.items.len()).find(|&i| !self.used[i])
    }

    /// Fills the deeper levels with the lowest unused positions.
    fn descend(&mut self) {
        while self.chosen.len() < self.items.len() {
            // One unused position always exists below full depth.
            let Some(next) = self.next_unused(0) else {
                break;
            };
            self.used[next] = true;
            self.chosen.push(next);
        }
    }

    /// Moves to the next permutation. Returns `false` once exhausted.
    fn advance(&mut self) -> bool {
        while let Some(pos) = self.chosen.pop() {
            self.used[pos] = false;
            if let Some(next) = self.next_unused(pos + 1) {
                self.used[next] = true;
                self.chosen.push(next);
                self.descend();
                return true;
            }
        }
        false
    }

    fn current(&self) -> Vec<T> {
        self.chosen.iter().map(|&i| self.items[i].clone()).collect()
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.phase {
            Phase::Exhausted => return None,
            Phase::Fresh => {
                self.phase = Phase::Active;
                self.descend();
            }
            Phase::Active => {
                if !self.advance() {
                    self.phase = Phase::Exhausted;
                    return None;
                }
            }
        }
        if let Some(r) = self.remaining.as_mut() {
            *r = r.saturating_sub(1);
        }
        Some(self.current())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.phase == Phase::Exhausted {
            return (0, Some(0));
        }
        match self.remaining.and_then(|r| usize::try_from(r).ok()) {
            Some(r) => (r, Some(r)),
            None => (usize::MAX, None),
        }
    }
}

impl<T: Clone> FusedIterator for Permutations<T> {}

/// Convenience constructor for [`Permutations`].
///
/// # Examples
///
/// ```
/// use u_tsp::permutation::permutations;
///
/// assert_eq!(permutations(1..4).count(), 6);
/// assert_eq!(permutations(Vec::<u8>::new()).collect::<Vec<_>>(), vec![vec![]]);
/// ```
pub fn permutations<I>(items: I) -> Permutations<I::Item>
where
    I: IntoIterator,
    I::Item: Clone,
{
    Permutations::new(items.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_empty_input_yields_one_empty_permutation() {
        let all: Vec<Vec<u32>> = Permutations::new(vec![]).collect();
        assert_eq!(all, vec![Vec::<u32>::new()]);
    }

    #[test]
    fn test_single_element() {
        let all: Vec<Vec<u32>> = Permutations::new(vec![7]).collect();
        assert_eq!(all, vec![vec![7]]);
    }

    #[test]
    fn test_counts_match_factorial() {
        let expected = [1usize, 1, 2, 6, 24, 120, 720, 5040];
        for (n, &want) in expected.iter().enumerate() {
            assert_eq!(permutations(0..n).count(), want, "n = {n}");
        }
    }

    #[test]
    fn test_all_unique_and_complete() {
        let all: Vec<Vec<usize>> = permutations(0..5).collect();
        let unique: HashSet<Vec<usize>> = all.iter().cloned().collect();
        assert_eq!(unique.len(), 120);
        for p in &all {
            let mut sorted = p.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
        }
    }

    #[test]
    fn test_lexicographic_order() {
        let all: Vec<Vec<usize>> = permutations(1..4).collect();
        assert_eq!(
            all,
            vec![
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![2, 1, 3],
                vec![2, 3, 1],
                vec![3, 1, 2],
                vec![3, 2, 1],
            ]
        );
    }

    #[test]
    fn test_duplicate_values_are_distinct_positions() {
        assert_eq!(permutations(vec!['x', 'x']).count(), 2);
    }

    #[test]
    fn test_early_termination() {
        let mut perms = permutations(0..10);
        let first: Vec<Vec<usize>> = perms.by_ref().take(3).collect();
        assert_eq!(first.len(), 3);
        assert_eq!(first[0], (0..10).collect::<Vec<_>>());
        // Resumes where it stopped.
        let fourth = perms.next().expect("more permutations");
        assert_ne!(fourth, first[2]);
    }

    #[test]
    fn test_restartable() {
        let a: Vec<Vec<usize>> = permutations(0..4).collect();
        let b: Vec<Vec<usize>> = permutations(0..4).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fused() {
        let mut perms = permutations(0..2);
        assert!(perms.next().is_some());
        assert!(perms.next().is_some());
        assert!(perms.next().is_none());
        assert!(perms.next().is_none());
    }

    #[test]
    fn test_size_hint_exact() {
        let mut perms = permutations(0..4);
        assert_eq!(perms.size_hint(), (24, Some(24)));
        perms.next();
        assert_eq!(perms.size_hint(), (23, Some(23)));
        let rest = perms.by_ref().count();
        assert_eq!(rest, 23);
        assert_eq!(perms.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_size_hint_overflow() {
        let perms = permutations(0..25);
        assert_eq!(perms.size_hint(), (usize::MAX, None));
        assert_eq!(perms.arity(), 25);
    }
}

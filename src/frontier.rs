//! Candidate cells waiting to be carved into the maze

use std::collections::HashSet;

use crate::random::RandomRange;

/// Deduplicated set of cell indices with uniform random draw
///
/// Members live in a `Vec` so that a uniformly chosen position can be
/// removed with `swap_remove`; the `HashSet` answers membership.
#[derive(Debug, Default, Clone)]
pub struct Frontier {
    members: Vec<usize>,
    present: HashSet<usize>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.present.contains(&index)
    }

    /// Add `index` unless it is already a member
    ///
    /// Returns whether the index was inserted.
    pub fn offer(&mut self, index: usize) -> bool {
        let inserted = self.present.insert(index);
        if inserted {
            self.members.push(index);
        }
        inserted
    }

    /// Remove and return a uniformly chosen member, `None` when empty
    pub fn draw_random<R: RandomRange + ?Sized>(&mut self, random: &mut R) -> Option<usize> {
        if self.members.is_empty() {
            return None;
        }
        let position = random.random_range(0, self.members.len() - 1);
        let index = self.members.swap_remove(position);
        self.present.remove(&index);
        Some(index)
    }
}

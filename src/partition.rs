// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Outbreak Simulation Suite - Group Partitioning

//! Random assignment of the day's eligible pool to venues.
//!
//! Both the capacity list and the pool are sampled uniformly without
//! replacement. Removal uses `swap_remove` on a randomly drawn position, which
//! keeps each draw O(1) while preserving uniformity: the order of the
//! remaining elements is irrelevant to the next uniform draw.

use rand::Rng;

/// One venue's attendees for the day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Capacity drawn for this venue. `members.len() <= capacity`.
    pub capacity: usize,
    pub members: Vec<usize>,
}

/// Full partition of a pool: disjoint groups plus whoever found no venue.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Partition {
    pub groups: Vec<Group>,
    pub remainder: Vec<usize>,
}

/// Draws groups one at a time until either venues or people run out.
#[derive(Debug, Clone)]
pub struct GroupPartitioner {
    pool: Vec<usize>,
    capacities: Vec<usize>,
}

impl GroupPartitioner {
    pub fn new(pool: Vec<usize>, capacities: Vec<usize>) -> Self {
        Self { pool, capacities }
    }

    pub fn is_exhausted(&self) -> bool {
        self.pool.is_empty() || self.capacities.is_empty()
    }

    /// Pick a random venue, then fill it with random pool members. The group is
    /// short of its capacity only when the pool empties mid-fill.
    pub fn next_group<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Group> {
        if self.is_exhausted() {
            return None;
        }
        let capacity = self.capacities.swap_remove(rng.gen_range(0..self.capacities.len()));
        let size = capacity.min(self.pool.len());
        let mut members = Vec::with_capacity(size);
        for _ in 0..size {
            members.push(self.pool.swap_remove(rng.gen_range(0..self.pool.len())));
        }
        Some(Group { capacity, members })
    }

    /// Pool members left once the venues are exhausted.
    pub fn into_remainder(self) -> Vec<usize> {
        self.pool
    }
}

/// Partition `pool` over `capacities` in one go.
pub fn partition<R: Rng + ?Sized>(pool: Vec<usize>, capacities: Vec<usize>, rng: &mut R) -> Partition {
    let mut partitioner = GroupPartitioner::new(pool, capacities);
    let mut groups = Vec::new();
    while let Some(group) = partitioner.next_group(rng) {
        groups.push(group);
    }
    Partition { groups, remainder: partitioner.into_remainder() }
}

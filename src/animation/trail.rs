//! Trail - bounded history of recent tip positions
//!
//! A FIFO with a fixed capacity: pushing onto a full trail evicts the
//! oldest entry. Snapshots are always in chronological order.

use std::collections::VecDeque;

use crate::geometry::Point2D;

/// Bounded FIFO of the most recent tip positions
#[derive(Clone, Debug, Default)]
pub struct Trail {
    points: VecDeque<Point2D>,
    capacity: usize,
}

impl Trail {
    /// Create an empty trail holding at most `capacity` points
    ///
    /// A capacity of 0 is valid and keeps nothing.
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Push a new position, evicting the oldest if over capacity
    pub fn push(&mut self, point: Point2D) {
        self.points.push_back(point);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    /// Change the capacity, dropping the oldest points if it shrinks
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        while self.points.len() > capacity {
            self.points.pop_front();
        }
    }

    /// Most recent position
    pub fn latest(&self) -> Option<Point2D> {
        self.points.back().copied()
    }

    /// Iterate positions from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &Point2D> + '_ {
        self.points.iter()
    }

    /// Copy of the positions, oldest first
    pub fn snapshot(&self) -> Vec<Point2D> {
        self.points.iter().copied().collect()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

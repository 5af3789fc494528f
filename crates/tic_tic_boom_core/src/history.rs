//! Bounded first-in first-out queue of a symbol's live marks.

use super::board::SnapshotError;
use super::types::{Coord, MAX_ACTIVE_MARKS};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::instrument;

/// Coordinates of one symbol's marks still on the board, oldest first.
///
/// The queue is kept in lockstep with the grid by the move controller:
/// every push writes a cell, every eviction clears one. It never holds more
/// than [`MAX_ACTIVE_MARKS`] entries between calls.
///
/// Deserialization refuses queues that are over the cap or repeat a cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HistoryRecord")]
pub struct MoveHistory {
    entries: VecDeque<Coord>,
}

/// Unchecked wire form of [`MoveHistory`].
#[derive(Deserialize)]
struct HistoryRecord {
    entries: VecDeque<Coord>,
}

impl TryFrom<HistoryRecord> for MoveHistory {
    type Error = SnapshotError;

    fn try_from(record: HistoryRecord) -> Result<Self, Self::Error> {
        let entries = record.entries;
        if entries.len() > MAX_ACTIVE_MARKS {
            return Err(SnapshotError::OverfullHistory { len: entries.len() });
        }
        for (position, coord) in entries.iter().enumerate() {
            if entries.iter().skip(position + 1).any(|other| other == coord) {
                return Err(SnapshotError::RepeatedMark { coord: *coord });
            }
        }
        Ok(Self { entries })
    }
}

impl MoveHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(MAX_ACTIVE_MARKS + 1),
        }
    }

    /// Number of live marks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the symbol has no marks on the board.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The mark that will be depreciated next.
    pub fn oldest(&self) -> Option<Coord> {
        self.entries.front().copied()
    }

    /// The most recently placed mark.
    pub fn newest(&self) -> Option<Coord> {
        self.entries.back().copied()
    }

    /// Returns true if `coord` is one of the live marks.
    pub fn contains(&self, coord: Coord) -> bool {
        self.entries.contains(&coord)
    }

    /// Iterates live marks, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.entries.iter().copied()
    }

    /// Records a new mark and returns the evicted oldest mark once the queue
    /// exceeds [`MAX_ACTIVE_MARKS`].
    #[instrument(level = "trace", skip(self))]
    pub(crate) fn push(&mut self, coord: Coord) -> Option<Coord> {
        self.entries.push_back(coord);
        let evicted = if self.entries.len() > MAX_ACTIVE_MARKS {
            self.entries.pop_front()
        } else {
            None
        };
        debug_assert!(self.entries.len() <= MAX_ACTIVE_MARKS);
        evicted
    }

    /// Forgets every mark.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'a> IntoIterator for &'a MoveHistory {
    type Item = Coord;
    type IntoIter = std::iter::Copied<std::collections::vec_deque::Iter<'a, Coord>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter().copied()
    }
}

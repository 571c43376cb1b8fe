//! Schedule (timeline) model.
//!
//! A schedule is the ordered list of CPU occupancy intervals produced by
//! one algorithm run. Gaps between consecutive items are idle time.
//! Preemptive algorithms may emit several items for the same process.

use serde::{Deserialize, Serialize};

use super::ProcessId;

/// A completed schedule.
///
/// Items are ordered by non-decreasing start time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    /// CPU occupancy intervals in chronological order.
    pub items: Vec<ScheduleItem>,
}

/// One contiguous interval during which a process holds the CPU.
///
/// Covers `[start_time, end_time)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
    /// Process occupying the CPU.
    pub process_id: ProcessId,
    /// Start time (inclusive).
    pub start_time: i64,
    /// End time (exclusive).
    pub end_time: i64,
}

impl ScheduleItem {
    /// Creates a new schedule item.
    pub fn new(process_id: ProcessId, start_time: i64, end_time: i64) -> Self {
        Self {
            process_id,
            start_time,
            end_time,
        }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }

    /// Whether the CPU is held by this item at `time`.
    #[inline]
    pub fn contains(&self, time: i64) -> bool {
        self.start_time <= time && time < self.end_time
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item.
    pub fn push(&mut self, item: ScheduleItem) {
        self.items.push(item);
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the schedule has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over items in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleItem> {
        self.items.iter()
    }

    /// Makespan: latest end time across all items.
    ///
    /// Returns `None` for an empty schedule.
    pub fn makespan(&self) -> Option<i64> {
        self.items.iter().map(|i| i.end_time).max()
    }

    /// Returns all items for a given process.
    pub fn items_for(&self, process_id: ProcessId) -> Vec<&ScheduleItem> {
        self.items
            .iter()
            .filter(|i| i.process_id == process_id)
            .collect()
    }

    /// Completion time for a process (latest end of its items).
    pub fn completion_time(&self, process_id: ProcessId) -> Option<i64> {
        self.items_for(process_id).iter().map(|i| i.end_time).max()
    }

    /// First time a process was given the CPU.
    pub fn first_start(&self, process_id: ProcessId) -> Option<i64> {
        self.items_for(process_id).iter().map(|i| i.start_time).min()
    }

    /// Total CPU time a process received.
    pub fn busy_time_for(&self, process_id: ProcessId) -> i64 {
        self.items_for(process_id).iter().map(|i| i.duration()).sum()
    }

    /// Total CPU time across all items.
    pub fn busy_time(&self) -> i64 {
        self.items.iter().map(|i| i.duration()).sum()
    }

    /// Idle time between t=0 and the makespan.
    pub fn idle_time(&self) -> i64 {
        self.makespan().map_or(0, |end| end - self.busy_time())
    }

    /// The item holding the CPU at `time`, if any.
    pub fn item_at(&self, time: i64) -> Option<&ScheduleItem> {
        self.items.iter().find(|i| i.contains(time))
    }
}

impl From<Vec<ScheduleItem>> for Schedule {
    fn from(items: Vec<ScheduleItem>) -> Self {
        Self { items }
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a ScheduleItem;
    type IntoIter = std::slice::Iter<'a, ScheduleItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

//! Virtual-clock task queue.
//!
//! Merges the two asynchronous inputs the engine cares about, clock
//! ticks and delayed pair resolutions, into one ordered stream. Tasks
//! due at the same millisecond run timer ticks first, so an expiring
//! clock always beats a resolution landing on the same instant.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::session::ResolutionTicket;

/// Work the host must perform at a given time.
///
/// Variant order is the tie-break order for tasks due together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Task {
    TimerTick,
    Resolve(ResolutionTicket),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Scheduled {
    due_ms: u64,
    task: Task,
    seq: u64,
}

/// Min-heap of tasks keyed by due time.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now_ms: u64,
    next_seq: u64,
    queue: BinaryHeap<Reverse<Scheduled>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Queue `task` to run `delay_ms` from now.
    pub fn schedule_in(&mut self, delay_ms: u64, task: Task) {
        let scheduled = Scheduled {
            due_ms: self.now_ms.saturating_add(delay_ms),
            task,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.queue.push(Reverse(scheduled));
    }

    /// Pop the next task due at or before `until_ms`, moving the clock to it.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<Task> {
        let Reverse(next) = self.queue.peek()?;
        if next.due_ms > until_ms {
            return None;
        }
        let Reverse(next) = self.queue.pop()?;
        self.now_ms = self.now_ms.max(next.due_ms);
        Some(next.task)
    }

    /// Move the clock forward without running anything.
    pub fn advance_to(&mut self, ms: u64) {
        self.now_ms = self.now_ms.max(ms);
    }

    /// Drop every queued task matching `pred`.
    pub fn cancel_where(&mut self, mut pred: impl FnMut(&Task) -> bool) {
        self.queue.retain(|Reverse(s)| !pred(&s.task));
    }

    /// Drop every queued task.
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(sequence: u64) -> ResolutionTicket {
        ResolutionTicket { epoch: 1, sequence }
    }

    #[test]
    fn test_tasks_run_in_due_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_in(1000, Task::TimerTick);
        scheduler.schedule_in(500, Task::Resolve(ticket(0)));

        assert_eq!(scheduler.pop_due(2000), Some(Task::Resolve(ticket(0))));
        assert_eq!(scheduler.now_ms(), 500);
        assert_eq!(scheduler.pop_due(2000), Some(Task::TimerTick));
        assert_eq!(scheduler.now_ms(), 1000);
        assert_eq!(scheduler.pop_due(2000), None);
    }

    #[test]
    fn test_tick_wins_ties() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_in(500, Task::Resolve(ticket(0)));
        scheduler.schedule_in(500, Task::TimerTick);

        assert_eq!(scheduler.pop_due(500), Some(Task::TimerTick));
        assert_eq!(scheduler.pop_due(500), Some(Task::Resolve(ticket(0))));
    }

    #[test]
    fn test_not_due_yet() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_in(1000, Task::TimerTick);

        assert_eq!(scheduler.pop_due(999), None);
        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn test_delay_is_relative_to_now() {
        let mut scheduler = Scheduler::new();
        scheduler.advance_to(300);
        scheduler.schedule_in(500, Task::TimerTick);

        assert_eq!(scheduler.pop_due(799), None);
        assert_eq!(scheduler.pop_due(800), Some(Task::TimerTick));
    }

    #[test]
    fn test_cancel_where() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_in(100, Task::Resolve(ticket(0)));
        scheduler.schedule_in(1000, Task::TimerTick);

        scheduler.cancel_where(|t| matches!(t, Task::Resolve(_)));
        assert_eq!(scheduler.pop_due(5000), Some(Task::TimerTick));
        assert!(scheduler.is_empty());
    }
}

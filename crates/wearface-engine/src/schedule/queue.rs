use std::collections::BTreeMap;
use std::time::Duration;

use super::TaskToken;

/// Delayed tasks for a single-threaded host loop.
///
/// Posting returns immediately; the loop later pops due tasks in order of
/// due time, then post order. Cancellation removes a task by token before it
/// can be popped, so a cancelled tick is never observed afterwards.
///
/// Time is in milliseconds on whatever base the host's clock uses.
#[derive(Debug)]
pub struct TaskQueue<T> {
    entries: BTreeMap<(i64, u64), (TaskToken, T)>,
    seq: u64,
}

impl<T> Default for TaskQueue<T> {
    fn default() -> Self {
        Self { entries: BTreeMap::new(), seq: 0 }
    }
}

impl<T> TaskQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Posts `task` to run at `due_millis`.
    pub fn post_at(&mut self, due_millis: i64, token: TaskToken, task: T) {
        let seq = self.seq;
        self.seq = self.seq.wrapping_add(1);
        self.entries.insert((due_millis, seq), (token, task));
    }

    /// Posts `task` to run `delay` after `now_millis`.
    pub fn post_delayed(&mut self, now_millis: i64, delay: Duration, token: TaskToken, task: T) {
        let delay_ms = i64::try_from(delay.as_millis()).unwrap_or(i64::MAX);
        self.post_at(now_millis.saturating_add(delay_ms), token, task);
    }

    /// Removes every task posted under `token`. Returns how many were removed.
    pub fn cancel(&mut self, token: TaskToken) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, (t, _)| *t != token);
        before - self.entries.len()
    }

    /// Pops the earliest task due at or before `now_millis`.
    pub fn pop_due(&mut self, now_millis: i64) -> Option<(TaskToken, T)> {
        let (&(due, _), _) = self.entries.first_key_value()?;
        if due > now_millis {
            return None;
        }
        self.entries.pop_first().map(|(_, entry)| entry)
    }

    /// Due time of the earliest task.
    pub fn next_due(&self) -> Option<i64> {
        self.entries.first_key_value().map(|(&(due, _), _)| due)
    }

    pub fn contains(&self, token: TaskToken) -> bool {
        self.entries.values().any(|(t, _)| *t == token)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(id: u64) -> TaskToken {
        TaskToken::new(id)
    }

    #[test]
    fn pops_in_due_order_then_post_order() {
        let mut q = TaskQueue::new();
        q.post_at(20, t(0), "late");
        q.post_at(10, t(1), "first");
        q.post_at(10, t(2), "second");

        assert_eq!(q.pop_due(5), None);
        assert_eq!(q.pop_due(10), Some((t(1), "first")));
        assert_eq!(q.pop_due(10), Some((t(2), "second")));
        assert_eq!(q.pop_due(15), None);
        assert_eq!(q.pop_due(25), Some((t(0), "late")));
        assert!(q.is_empty());
    }

    #[test]
    fn cancel_removes_before_fire() {
        let mut q = TaskQueue::new();
        q.post_delayed(0, Duration::ZERO, t(7), ());
        assert!(q.contains(t(7)));
        assert_eq!(q.cancel(t(7)), 1);
        assert_eq!(q.pop_due(i64::MAX), None);
        assert_eq!(q.cancel(t(7)), 0);
    }

    #[test]
    fn next_due_tracks_head() {
        let mut q = TaskQueue::new();
        assert_eq!(q.next_due(), None);
        q.post_delayed(1_000, Duration::from_millis(250), t(0), ());
        q.post_delayed(1_000, Duration::from_millis(50), t(1), ());
        assert_eq!(q.next_due(), Some(1_050));
        assert_eq!(q.len(), 2);
    }
}
